mod main_window;
mod preview;

pub use main_window::*;
pub use preview::*;
