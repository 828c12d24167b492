use crate::ffmpeg::{FFmpegWrapper, MediaInfo};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// The file given on the command line, probed once at startup.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub path: PathBuf,
    pub info: MediaInfo,
}

impl MediaFile {
    pub fn open(ffmpeg: &FFmpegWrapper, path: &Path) -> Result<Self> {
        let info = ffmpeg
            .probe(path)
            .with_context(|| format!("cannot open {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            info,
        })
    }

    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn resolution_string(&self) -> String {
        if self.info.width > 0 && self.info.height > 0 {
            format!("{}x{}", self.info.width, self.info.height)
        } else {
            "N/A".to_string()
        }
    }

    /// Codec and frame rate, e.g. "h264 @ 29.97 fps"
    pub fn stream_string(&self) -> String {
        let codec = self.info.video_codec.as_deref().unwrap_or("unknown codec");
        match self.info.framerate {
            Some(fps) => format!("{} @ {:.2} fps", codec, fps),
            None => codec.to_string(),
        }
    }

    pub fn duration_string(&self) -> String {
        crate::utils::format_time(self.info.duration)
    }
}
