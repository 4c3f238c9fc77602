//! Render module - frame driving and presentation.

mod driver;
mod window;

pub use driver::{Droplet, DriverError, FrameDriver, FrameSink, SinkError};
pub use window::{RenderError, run_windowed};
