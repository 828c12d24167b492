use crate::error::SmolError;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaInfo {
    pub duration: f64,
    pub width: u32,
    pub height: u32,
    pub video_codec: Option<String>,
    pub framerate: Option<f64>,
    pub has_audio: bool,
}

#[derive(Debug, Deserialize)]
struct FFProbeOutput {
    format: Option<FFProbeFormat>,
    #[serde(default)]
    streams: Vec<FFProbeStream>,
}

#[derive(Debug, Deserialize)]
struct FFProbeFormat {
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FFProbeStream {
    codec_type: Option<String>,
    codec_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    duration: Option<String>,
    r_frame_rate: Option<String>,
}

/// Run ffprobe on `path` and extract what the trimmer needs from the
/// first video stream.
pub fn probe_file(ffprobe: &str, path: &Path) -> Result<MediaInfo> {
    let output = Command::new(ffprobe)
        .args([
            "-v", "quiet",
            "-print_format", "json",
            "-show_format",
            "-show_streams",
        ])
        .arg(path)
        .output()
        .with_context(|| format!("failed to run {}", ffprobe))?;

    if !output.status.success() {
        return Err(SmolError::ToolFailed {
            tool: ffprobe.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    parse_probe_output(&String::from_utf8_lossy(&output.stdout))
}

pub fn parse_probe_output(json: &str) -> Result<MediaInfo> {
    let probe: FFProbeOutput = serde_json::from_str(json)
        .map_err(|e| anyhow!("Failed to parse ffprobe output: {}", e))?;

    let has_audio = probe
        .streams
        .iter()
        .any(|s| s.codec_type.as_deref() == Some("audio"));

    let video = probe
        .streams
        .into_iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or(SmolError::NoVideoStream)?;

    // Some containers only report the duration on the format.
    let duration = video
        .duration
        .as_deref()
        .and_then(|d| d.parse::<f64>().ok())
        .or_else(|| {
            probe
                .format
                .and_then(|f| f.duration)
                .and_then(|d| d.parse::<f64>().ok())
        })
        .filter(|d| d.is_finite())
        .ok_or(SmolError::MissingDuration)?;

    Ok(MediaInfo {
        duration,
        width: video.width.unwrap_or(0),
        height: video.height.unwrap_or(0),
        video_codec: video.codec_name,
        framerate: video.r_frame_rate.and_then(|r| parse_framerate(&r)),
        has_audio,
    })
}

fn parse_framerate(fps_str: &str) -> Option<f64> {
    let parts: Vec<&str> = fps_str.split('/').collect();
    if parts.len() == 2 {
        let num: f64 = parts[0].parse().ok()?;
        let den: f64 = parts[1].parse().ok()?;
        if den > 0.0 {
            return Some(num / den);
        }
        return None;
    }
    fps_str.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIP_JSON: &str = r#"{
        "streams": [
            {"codec_type": "audio", "codec_name": "aac", "duration": "119.98"},
            {"codec_type": "video", "codec_name": "h264", "width": 1920, "height": 1080,
             "duration": "120.033333", "r_frame_rate": "30000/1001"}
        ],
        "format": {"duration": "120.050000"}
    }"#;

    #[test]
    fn test_parse_video_stream() {
        let info = parse_probe_output(CLIP_JSON).unwrap();
        assert!((info.duration - 120.033333).abs() < 1e-6);
        assert_eq!((info.width, info.height), (1920, 1080));
        assert_eq!(info.video_codec.as_deref(), Some("h264"));
        assert!((info.framerate.unwrap() - 29.97).abs() < 0.01);
        assert!(info.has_audio);
    }

    #[test]
    fn test_duration_falls_back_to_format() {
        let json = r#"{
            "streams": [{"codec_type": "video", "codec_name": "vp9"}],
            "format": {"duration": "42.5"}
        }"#;
        let info = parse_probe_output(json).unwrap();
        assert_eq!(info.duration, 42.5);
        assert!(!info.has_audio);
    }

    #[test]
    fn test_audio_only_is_rejected() {
        let json = r#"{"streams": [{"codec_type": "audio"}], "format": {"duration": "10"}}"#;
        let err = parse_probe_output(json).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SmolError>(),
            Some(SmolError::NoVideoStream)
        ));
    }

    #[test]
    fn test_missing_duration_is_rejected() {
        let json = r#"{"streams": [{"codec_type": "video", "duration": "N/A"}]}"#;
        let err = parse_probe_output(json).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SmolError>(),
            Some(SmolError::MissingDuration)
        ));
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(parse_probe_output("not json").is_err());
    }

    #[test]
    fn test_parse_framerate() {
        assert_eq!(parse_framerate("25/1"), Some(25.0));
        assert_eq!(parse_framerate("24"), Some(24.0));
        assert_eq!(parse_framerate("0/0"), None);
    }
}
