mod commands;
mod executor;
mod probe;
mod wrapper;

pub use commands::*;
pub use executor::*;
pub use probe::*;
pub use wrapper::*;
