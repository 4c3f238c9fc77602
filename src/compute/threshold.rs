//! Binarization of the intensity canvas.

use super::{Canvas, Mask};

/// Threshold a canvas into a binary mask.
///
/// A cell maps to 1 when strictly greater than `value`; cells exactly equal
/// to the threshold map to 0. Pure; the canvas is not modified.
pub fn threshold(canvas: &Canvas, value: f32) -> Mask {
    let data = canvas
        .data
        .iter()
        .map(|&v| if v > value { 1u8 } else { 0u8 })
        .collect();

    Mask {
        data,
        width: canvas.width,
        height: canvas.height,
    }
}
