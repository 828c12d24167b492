use thiserror::Error;

#[derive(Debug, Error)]
pub enum SmolError {
    #[error("no video stream found")]
    NoVideoStream,

    #[error("video stream has no usable duration")]
    MissingDuration,

    #[error("video is too short to trim ({duration:.1}s)")]
    TooShort { duration: f64 },

    #[error("{tool} failed ({status}): {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("trim range is empty: start {start:.1}s is not before end {end:.1}s")]
    InvalidTrim { start: f64, end: f64 },

    #[error("invalid encode settings: {0}")]
    InvalidSettings(String),
}
