use super::commands::*;
use super::executor::{FrameSource, JobExecutor, SubmittedJob, TranscodeJob};
use super::probe::{probe_file, MediaInfo};
use crate::config::{FFMPEG_BIN, FFPROBE_BIN, PREVIEW_SIZE};
use crate::error::SmolError;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct FFmpegWrapper {
    ffmpeg_path: String,
    ffprobe_path: String,
}

impl FFmpegWrapper {
    pub fn new() -> Self {
        Self {
            ffmpeg_path: FFMPEG_BIN.to_string(),
            ffprobe_path: FFPROBE_BIN.to_string(),
        }
    }

    /// Probe a media file for its video stream
    pub fn probe(&self, path: &Path) -> Result<MediaInfo> {
        let info = probe_file(&self.ffprobe_path, path)?;
        debug!(?info, "probed {}", path.display());
        Ok(info)
    }
}

impl Default for FFmpegWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for FFmpegWrapper {
    /// Blocks until ffmpeg exits. No timeout.
    fn frame_at(&self, input: &Path, time: f64) -> Result<Vec<u8>> {
        let args = build_preview_args(input, time, PREVIEW_SIZE);
        let output = Command::new(&self.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .with_context(|| format!("failed to run {}", self.ffmpeg_path))?;

        // Seeking past the last frame exits 0 with nothing written.
        if !output.status.success() || output.stdout.is_empty() {
            return Err(SmolError::ToolFailed {
                tool: self.ffmpeg_path.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(output.stdout)
    }
}

impl JobExecutor for FFmpegWrapper {
    /// Spawn the encoder and forget it. The child is never waited on.
    fn submit(&self, job: &TranscodeJob) -> Result<SubmittedJob> {
        let args = build_transcode_args(job);
        let mut command = Command::new(&self.ffmpeg_path);
        command
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NEW_CONSOLE: u32 = 0x0000_0010;
            command.creation_flags(CREATE_NEW_CONSOLE);
        }

        let child = command
            .spawn()
            .with_context(|| format!("failed to start {}", self.ffmpeg_path))?;

        info!(
            pid = child.id(),
            output = %job.output.display(),
            "encode started: {} {}",
            self.ffmpeg_path,
            args.join(" ")
        );

        Ok(SubmittedJob {
            pid: child.id(),
            output: job.output.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{EncodeSettings, TrimRange};

    fn missing_tools() -> FFmpegWrapper {
        FFmpegWrapper {
            ffmpeg_path: "/nonexistent/smolvid-ffmpeg".to_string(),
            ffprobe_path: "/nonexistent/smolvid-ffprobe".to_string(),
        }
    }

    #[test]
    fn test_missing_ffprobe_is_an_error() {
        let err = missing_tools().probe(Path::new("clip.mp4")).unwrap_err();
        assert!(err.to_string().contains("smolvid-ffprobe"));
    }

    #[test]
    fn test_missing_ffmpeg_fails_preview() {
        assert!(missing_tools().frame_at(Path::new("clip.mp4"), 1.0).is_err());
    }

    #[test]
    fn test_missing_ffmpeg_fails_submit() {
        let job = TranscodeJob::new(
            Path::new("clip.mp4"),
            TrimRange { start: 0.0, end: 5.0 },
            EncodeSettings::default(),
        );
        assert!(missing_tools().submit(&job).is_err());
    }
}
