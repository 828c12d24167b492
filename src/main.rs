mod app;
mod config;
mod error;
mod ffmpeg;
mod media;
mod session;
mod ui;
mod utils;

use anyhow::{anyhow, Result};
use app::SmolApp;
use clap::Parser;
use eframe::egui;
use ffmpeg::FFmpegWrapper;
use media::MediaFile;
use session::Session;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Preview and trim a video, then shrink it with FFmpeg.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Video file to trim. The result is written next to it as <name>_smol.<ext>
    input: PathBuf,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let ffmpeg = FFmpegWrapper::new();

    // Nothing is shown until the file is known to have a usable video stream.
    let (media, session) = open(&ffmpeg, &args.input)?;
    info!(
        "Loaded {} ({}, {}, {})",
        media.filename(),
        media.resolution_string(),
        media.stream_string(),
        media.duration_string()
    );
    if !media.info.has_audio {
        warn!("{} has no audio stream, the output will be silent", media.filename());
    }

    let title = format!("smolvid - {}", media.filename());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            Ok(Box::new(SmolApp::new(
                &cc.egui_ctx,
                media,
                session,
                Box::new(ffmpeg.clone()),
                Box::new(ffmpeg),
            )))
        }),
    )
    .map_err(|e| anyhow!("window failed: {}", e))
}

fn open(ffmpeg: &FFmpegWrapper, path: &std::path::Path) -> Result<(MediaFile, Session)> {
    let media = MediaFile::open(ffmpeg, path)?;
    let session = Session::new(media.info.duration)?;
    Ok((media, session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["smolvid"]).is_err());
        let args = Args::try_parse_from(["smolvid", "clip.mp4"]).unwrap();
        assert_eq!(args.input, PathBuf::from("clip.mp4"));
    }

    #[test]
    fn test_unreadable_input_fails_open() {
        let err = open(&FFmpegWrapper::new(), Path::new("/nonexistent/smolvid/clip.mp4"))
            .err()
            .unwrap();
        assert!(!format!("{:#}", err).is_empty());
    }
}
