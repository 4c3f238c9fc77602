//! Frame driver - owns droplet state and runs the tick loop.
//!
//! Each tick advances every droplet by its velocity, composites all kernels
//! onto a cleared canvas, thresholds the result and hands the mask to the
//! sink. The driver is Running until `stop()` is called or the sink reports
//! it is closed; the transition is one-directional.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::compute::{Canvas, ComputeError, Kernel, Mask, composite, threshold};
use crate::schema::{ConfigError, SceneConfig};

/// Errors raised while constructing or running the driver.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Compute(#[from] ComputeError),
}

/// Why the sink refused a frame.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("display sink closed")]
    Closed,
}

/// Receives one finished mask per tick.
///
/// `present` may block until the next refresh slot. Returning
/// `SinkError::Closed` stops the driver cleanly; frames are never retried.
pub trait FrameSink {
    fn present(&mut self, mask: &Mask) -> Result<(), SinkError>;
}

/// A droplet instance: mutable position paired with a shared immutable kernel.
#[derive(Debug, Clone)]
pub struct Droplet {
    /// Top-left placement of the kernel on the canvas.
    pub position: (f32, f32),
    /// Per-tick translation.
    pub velocity: (f32, f32),
    /// Intensity footprint, shared across droplets with identical parameters.
    pub kernel: Arc<Kernel>,
}

/// Owns the droplet list and the per-frame canvas, and drives the tick loop.
pub struct FrameDriver {
    droplets: Vec<Droplet>,
    canvas: Canvas,
    threshold: f32,
    frame_interval: Duration,
    stopped: bool,
    tick: u64,
}

impl FrameDriver {
    /// Build a driver from a validated scene configuration.
    ///
    /// Kernels are generated once here and reused across frames; droplets
    /// with identical kernel parameters share one kernel.
    pub fn new(config: &SceneConfig) -> Result<Self, DriverError> {
        config.validate()?;

        let mut kernels: Vec<((usize, u32, Option<u32>), Arc<Kernel>)> = Vec::new();
        let mut droplets = Vec::with_capacity(config.droplets.len());

        for dc in &config.droplets {
            let key = (dc.size, dc.radius.to_bits(), dc.sigma.map(f32::to_bits));
            let kernel = match kernels.iter().find(|(k, _)| *k == key) {
                Some((_, kernel)) => Arc::clone(kernel),
                None => {
                    let kernel = Arc::new(Kernel::generate(dc.size, dc.radius, dc.sigma)?);
                    kernels.push((key, Arc::clone(&kernel)));
                    kernel
                }
            };
            droplets.push(Droplet {
                position: dc.position,
                velocity: dc.velocity,
                kernel,
            });
        }

        info!(
            "driver ready: {}x{} canvas, {} droplets, {} unique kernels",
            config.width,
            config.height,
            droplets.len(),
            kernels.len()
        );

        Ok(Self {
            droplets,
            canvas: Canvas::new(config.width, config.height),
            threshold: config.threshold,
            frame_interval: Duration::from_secs_f32(1.0 / config.frame_rate),
            stopped: false,
            tick: 0,
        })
    }

    /// Canvas dimensions as (width, height).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.canvas.width, self.canvas.height)
    }

    /// Nominal delay between ticks.
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Droplets in compositing order.
    pub fn droplets(&self) -> &[Droplet] {
        &self.droplets
    }

    /// Ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Whether the driver has entered the terminal Stopped state.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Request termination. Honored between ticks, never mid-tick.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    /// Advance all droplets and render one frame.
    ///
    /// Positions are truncated to integer pixels at placement time; droplets
    /// are composited in declaration order (the blend makes the order
    /// immaterial to the result).
    pub fn tick(&mut self) -> Result<Mask, ComputeError> {
        for droplet in &mut self.droplets {
            droplet.position.0 += droplet.velocity.0;
            droplet.position.1 += droplet.velocity.1;
        }

        self.canvas.clear();
        for droplet in &self.droplets {
            let pos = (droplet.position.0 as i32, droplet.position.1 as i32);
            composite(&mut self.canvas, pos, &droplet.kernel)?;
        }

        self.tick += 1;
        debug!("tick {} composited {} droplets", self.tick, self.droplets.len());

        Ok(threshold(&self.canvas, self.threshold))
    }

    /// Run until stopped or the sink closes, pacing ticks at the configured
    /// frame rate.
    pub fn run(&mut self, sink: &mut dyn FrameSink) -> Result<(), DriverError> {
        while !self.stopped {
            let frame_start = Instant::now();

            let mask = self.tick()?;
            match sink.present(&mask) {
                Ok(()) => {}
                Err(SinkError::Closed) => {
                    info!("display sink closed after {} ticks, stopping", self.tick);
                    self.stopped = true;
                    break;
                }
            }

            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_interval {
                std::thread::sleep(self.frame_interval - elapsed);
            }
        }
        Ok(())
    }
}
