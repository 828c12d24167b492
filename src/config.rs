//! Compiled-in defaults. There is no config file and nothing is persisted.

/// Size every preview frame is scaled to before display.
pub const PREVIEW_SIZE: (u32, u32) = (960, 540);

/// Slider granularity in seconds.
pub const SLIDER_STEP: f64 = 0.1;

/// Appended to the input stem to name the shrunk copy.
pub const OUTPUT_SUFFIX: &str = "_smol";

pub const VIDEO_CODEC: &str = "libx264";

pub const DEFAULT_CRF: u32 = 21;
pub const DEFAULT_FRAMERATE: u32 = 30;
pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 1080;

pub const FFMPEG_BIN: &str = "ffmpeg";
pub const FFPROBE_BIN: &str = "ffprobe";
