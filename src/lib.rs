//! Droplet field - animated grayscale droplet effect.
//!
//! Radially-decaying Gaussian intensity kernels are composited onto a
//! per-frame canvas with screen blending, thresholded into a binary mask,
//! and presented in a desktop window at a fixed frame rate.
//!
//! # Architecture
//!
//! The crate is split into three modules:
//!
//! - `schema`: Scene configuration types (serde, validated at startup)
//! - `compute`: The pipeline core (kernel generation, compositing, thresholding)
//! - `render`: The frame driver and the window display sink
//!
//! # Example
//!
//! ```rust,no_run
//! use droplet_field::{
//!     render::{FrameDriver, run_windowed},
//!     schema::SceneConfig,
//! };
//!
//! let config = SceneConfig::default();
//! let driver = FrameDriver::new(&config).expect("valid default scene");
//! run_windowed(driver, "droplet field").expect("window setup");
//! ```

pub mod compute;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use compute::{Canvas, Kernel, Mask};
pub use render::{FrameDriver, FrameSink};
pub use schema::SceneConfig;
