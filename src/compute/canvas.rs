//! Frame buffers: the accumulating intensity canvas and the binary mask.
//!
//! Both are flat row-major grids indexed as `y * width + x`. The canvas is
//! cleared and re-filled every tick; the mask is derived from it and handed
//! to the display sink.

/// Per-frame intensity buffer.
///
/// Values stay in [0, 1]: compositing uses the screen blend, which is closed
/// over that range.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Intensity values, row-major.
    pub data: Vec<f32>,
    /// Buffer width in cells.
    pub width: usize,
    /// Buffer height in cells.
    pub height: usize,
}

impl Canvas {
    /// Create an all-zero canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0.0f32; width * height],
            width,
            height,
        }
    }

    /// Reset all cells to zero, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.fill(0.0);
    }

    /// Get intensity at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }
}

/// Thresholded binary image, one frame's output.
#[derive(Debug, Clone)]
pub struct Mask {
    /// Cell values, each 0 or 1, row-major.
    pub data: Vec<u8>,
    /// Buffer width in cells.
    pub width: usize,
    /// Buffer height in cells.
    pub height: usize,
}

impl Mask {
    /// Get mask value at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }
}
