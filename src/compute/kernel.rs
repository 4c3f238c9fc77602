//! Radial decay kernel generation.
//!
//! A kernel is the precomputed intensity footprint of one droplet. Values
//! fall off from the center following a Gaussian, which gives a smooth
//! silhouette that thresholds into a clean circular blob.

use super::ComputeError;

/// Precomputed radial-decay intensity matrix.
///
/// Values are in [0, 1], stored row-major, with the maximum at the integer
/// center cell (`size / 2` in both axes). Kernels are immutable after
/// generation and may be shared across droplets via `Arc`.
#[derive(Debug, Clone)]
pub struct Kernel {
    /// 2D kernel values, row-major.
    pub data: Vec<f32>,
    /// Kernel side length.
    pub size: usize,
    /// Gaussian spread used at generation time.
    pub sigma: f32,
}

impl Kernel {
    /// Generate a Gaussian falloff kernel.
    ///
    /// Each cell holds `exp(-d^2 / (2 * sigma^2))` where `d` is the Euclidean
    /// distance to the center cell.
    ///
    /// # Arguments
    /// * `size` - Side length of the square matrix
    /// * `radius` - Effective droplet radius in cells
    /// * `sigma` - Gaussian spread; defaults to `radius / 3`
    pub fn generate(size: usize, radius: f32, sigma: Option<f32>) -> Result<Self, ComputeError> {
        if size == 0 {
            return Err(ComputeError::InvalidParameter {
                name: "size",
                value: 0.0,
            });
        }
        if !(radius > 0.0) {
            return Err(ComputeError::InvalidParameter {
                name: "radius",
                value: radius as f64,
            });
        }
        let sigma = sigma.unwrap_or(radius / 3.0);
        if !(sigma > 0.0) {
            return Err(ComputeError::InvalidParameter {
                name: "sigma",
                value: sigma as f64,
            });
        }

        let center = (size / 2) as f32;
        let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);

        let mut data = vec![0.0f32; size * size];
        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 - center;
                let dy = y as f32 - center;
                let dist_sq = dx * dx + dy * dy;
                data[y * size + x] = (-dist_sq * inv_two_sigma_sq).exp();
            }
        }

        Ok(Self { data, size, sigma })
    }

    /// Get kernel value at (x, y) position.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.size + x]
    }

    /// Distance from center at which values drop below `cutoff`.
    ///
    /// Inverts the falloff formula: `sigma * sqrt(-2 * ln(cutoff))`.
    pub fn effective_radius(&self, cutoff: f32) -> f32 {
        self.sigma * (-2.0 * cutoff.ln()).sqrt()
    }
}
