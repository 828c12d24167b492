use super::commands::smol_output_path;
use crate::session::{EncodeSettings, TrimRange};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// One shrink encode, fully described.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscodeJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub range: TrimRange,
    pub settings: EncodeSettings,
}

impl TranscodeJob {
    pub fn new(input: &Path, range: TrimRange, settings: EncodeSettings) -> Self {
        Self {
            input: input.to_path_buf(),
            output: smol_output_path(input),
            range,
            settings,
        }
    }
}

/// Receipt for a started job. Holds no handle to the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedJob {
    pub pid: u32,
    pub output: PathBuf,
}

/// Decodes single frames for the preview.
pub trait FrameSource {
    /// Encoded PNG of the frame at `time` seconds.
    fn frame_at(&self, input: &Path, time: f64) -> Result<Vec<u8>>;
}

/// Runs encode jobs outside this process.
///
/// Submission is the only operation. Implementations do not report
/// completion; a monitoring executor would extend this trait.
pub trait JobExecutor {
    fn submit(&self, job: &TranscodeJob) -> Result<SubmittedJob>;
}
