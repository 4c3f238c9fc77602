//! Configuration types for the droplet scene.

use serde::{Deserialize, Serialize};

/// Default binarization threshold.
fn default_threshold() -> f32 {
    0.1
}

/// Default tick rate in frames per second.
fn default_frame_rate() -> f32 {
    60.0
}

/// Top-level scene configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Canvas width in pixels.
    pub width: usize,
    /// Canvas height in pixels.
    pub height: usize,
    /// Binarization threshold applied to the composited canvas.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// Target frames per second.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f32,
    /// Droplets in the scene, composited in declaration order.
    pub droplets: Vec<DropletConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        // One droplet resting at center, one above it falling straight down.
        Self {
            width: 800,
            height: 600,
            threshold: 0.1,
            frame_rate: 60.0,
            droplets: vec![
                DropletConfig {
                    size: 100,
                    radius: 50.0,
                    sigma: None,
                    position: (350.0, 250.0),
                    velocity: (0.0, 0.0),
                },
                DropletConfig {
                    size: 100,
                    radius: 50.0,
                    sigma: None,
                    position: (350.0, 150.0),
                    velocity: (0.0, 3.0),
                },
            ],
        }
    }
}

/// Configuration for a single droplet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropletConfig {
    /// Kernel side length in pixels.
    pub size: usize,
    /// Effective droplet radius in pixels.
    pub radius: f32,
    /// Gaussian spread; `radius / 3` when omitted.
    #[serde(default)]
    pub sigma: Option<f32>,
    /// Initial top-left position (x, y) on the canvas.
    pub position: (f32, f32),
    /// Per-tick translation (dx, dy). Zero for a static droplet.
    #[serde(default)]
    pub velocity: (f32, f32),
}

impl SceneConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if !(self.frame_rate > 0.0) {
            return Err(ConfigError::InvalidFrameRate);
        }
        for (i, droplet) in self.droplets.iter().enumerate() {
            if droplet.size == 0 {
                return Err(ConfigError::InvalidDropletParameter {
                    droplet: i,
                    name: "size",
                });
            }
            if !(droplet.radius > 0.0) {
                return Err(ConfigError::InvalidDropletParameter {
                    droplet: i,
                    name: "radius",
                });
            }
            if let Some(sigma) = droplet.sigma
                && !(sigma > 0.0)
            {
                return Err(ConfigError::InvalidDropletParameter {
                    droplet: i,
                    name: "sigma",
                });
            }
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Canvas dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("Frame rate must be positive")]
    InvalidFrameRate,
    #[error("Droplet {droplet}: `{name}` must be positive")]
    InvalidDropletParameter { droplet: usize, name: &'static str },
}
