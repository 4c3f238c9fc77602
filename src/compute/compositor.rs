//! Kernel placement with clipped screen blending.
//!
//! A kernel is placed on the canvas by its top-left corner, which may lie
//! anywhere including off-canvas. Only the intersection of the kernel's
//! extent with the canvas is touched; an empty intersection is a no-op.
//! Overlapping cells combine with the screen blend, which is commutative and
//! keeps the canvas in [0, 1].

use super::{Canvas, ComputeError, Kernel};

/// Screen blend: `1 - (1 - bg) * (1 - k)`.
///
/// Closed over [0, 1], monotone in both arguments, identity when either
/// input is zero. Overlapping droplets brighten without exceeding 1.
#[inline]
pub fn screen_blend(bg: f32, k: f32) -> f32 {
    1.0 - (1.0 - bg) * (1.0 - k)
}

/// Composite a kernel onto the canvas at the given top-left position.
///
/// `pos` is `(x, y)` in canvas coordinates and may be negative or exceed the
/// canvas bounds; out-of-canvas parts of the kernel are silently dropped.
/// Mutates the canvas in place.
///
/// Fails fast with `ShapeMismatch` if the kernel or canvas buffer does not
/// match its declared dimensions.
pub fn composite(canvas: &mut Canvas, pos: (i32, i32), kernel: &Kernel) -> Result<(), ComputeError> {
    let k_len = kernel.size * kernel.size;
    if kernel.data.len() != k_len {
        return Err(ComputeError::ShapeMismatch {
            context: "kernel",
            expected: k_len,
            actual: kernel.data.len(),
        });
    }
    let c_len = canvas.width * canvas.height;
    if canvas.data.len() != c_len {
        return Err(ComputeError::ShapeMismatch {
            context: "canvas",
            expected: c_len,
            actual: canvas.data.len(),
        });
    }

    let (pos_x, pos_y) = pos;
    let k_size = kernel.size as i32;
    let bg_w = canvas.width as i32;
    let bg_h = canvas.height as i32;

    // Intersection of the placed kernel extent with the canvas extent.
    let start_x = pos_x.max(0);
    let start_y = pos_y.max(0);
    let end_x = (pos_x + k_size).min(bg_w);
    let end_y = (pos_y + k_size).min(bg_h);

    if start_x >= end_x || start_y >= end_y {
        // Fully off-canvas.
        return Ok(());
    }

    for y in start_y..end_y {
        let ky = (y - pos_y) as usize;
        let k_row = ky * kernel.size;
        let bg_row = y as usize * canvas.width;

        for x in start_x..end_x {
            let kx = (x - pos_x) as usize;
            let idx = bg_row + x as usize;
            canvas.data[idx] = screen_blend(canvas.data[idx], kernel.data[k_row + kx]);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn flat_kernel(size: usize, value: f32) -> Kernel {
        Kernel {
            data: vec![value; size * size],
            size,
            sigma: 1.0,
        }
    }

    #[test]
    fn test_composite_onto_zero_canvas_copies_kernel() {
        let mut canvas = Canvas::new(10, 10);
        let kernel = Kernel::generate(5, 2.0, None).unwrap();

        composite(&mut canvas, (2, 3), &kernel).unwrap();

        // bg = 0 means the blend reduces to the kernel value
        for ky in 0..5 {
            for kx in 0..5 {
                let got = canvas.get(2 + kx, 3 + ky);
                let want = kernel.get(kx, ky);
                assert!((got - want).abs() < 1e-6, "at ({}, {})", kx, ky);
            }
        }
    }

    #[test]
    fn test_composite_fully_off_canvas_is_noop() {
        let kernel = flat_kernel(4, 0.8);
        let mut canvas = Canvas::new(10, 10);
        canvas.data[0] = 0.5;
        let before = canvas.data.clone();

        for pos in [(-4, 0), (0, -4), (10, 0), (0, 10), (-100, -100), (50, 50)] {
            composite(&mut canvas, pos, &kernel).unwrap();
            assert_eq!(canvas.data, before, "pos {:?} modified the canvas", pos);
        }
    }

    #[test]
    fn test_composite_partial_clip_negative_position() {
        let kernel = flat_kernel(4, 0.5);
        let mut canvas = Canvas::new(6, 6);

        // Top-left corner two cells off-canvas in both axes.
        composite(&mut canvas, (-2, -2), &kernel).unwrap();

        // Only the 2x2 bottom-right quarter of the kernel lands on canvas.
        for y in 0..6 {
            for x in 0..6 {
                let expected = if x < 2 && y < 2 { 0.5 } else { 0.0 };
                assert!(
                    (canvas.get(x, y) - expected).abs() < 1e-6,
                    "at ({}, {}): {}",
                    x,
                    y,
                    canvas.get(x, y)
                );
            }
        }
    }

    #[test]
    fn test_composite_partial_clip_far_edge() {
        let kernel = flat_kernel(4, 0.5);
        let mut canvas = Canvas::new(6, 6);

        composite(&mut canvas, (4, 4), &kernel).unwrap();

        for y in 0..6 {
            for x in 0..6 {
                let expected = if x >= 4 && y >= 4 { 0.5 } else { 0.0 };
                assert!((canvas.get(x, y) - expected).abs() < 1e-6, "at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_composite_order_insensitive() {
        let a = Kernel::generate(7, 3.0, None).unwrap();
        let b = flat_kernel(5, 0.4);

        let mut ab = Canvas::new(12, 12);
        composite(&mut ab, (1, 1), &a).unwrap();
        composite(&mut ab, (3, 3), &b).unwrap();

        let mut ba = Canvas::new(12, 12);
        composite(&mut ba, (3, 3), &b).unwrap();
        composite(&mut ba, (1, 1), &a).unwrap();

        for (x, y) in ab.data.iter().zip(ba.data.iter()) {
            assert!((x - y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_overlap_brightens_beyond_single_kernel() {
        // Two identical droplets with overlapping footprints: the canvas at
        // the midpoint must exceed what either kernel contributes alone.
        let kernel = Kernel::generate(100, 50.0, None).unwrap();
        let mut single = Canvas::new(300, 200);
        composite(&mut single, (0, 50), &kernel).unwrap();

        let mut pair = single.clone();
        composite(&mut pair, (40, 50), &kernel).unwrap();

        // Centers at x=50 and x=90, row y=100; midpoint x=70.
        let alone = single.get(70, 100);
        let combined = pair.get(70, 100);
        assert!(combined > alone, "{} vs {}", combined, alone);
        assert!(combined <= 1.0);
    }

    #[test]
    fn test_composite_rejects_malformed_kernel() {
        let mut canvas = Canvas::new(8, 8);
        let kernel = Kernel {
            data: vec![0.5; 10],
            size: 4,
            sigma: 1.0,
        };
        assert!(matches!(
            composite(&mut canvas, (0, 0), &kernel),
            Err(ComputeError::ShapeMismatch { context: "kernel", .. })
        ));
    }

    #[test]
    fn test_composite_rejects_malformed_canvas() {
        let mut canvas = Canvas::new(8, 8);
        canvas.data.truncate(10);
        let kernel = flat_kernel(2, 0.5);
        assert!(matches!(
            composite(&mut canvas, (0, 0), &kernel),
            Err(ComputeError::ShapeMismatch { context: "canvas", .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_blend_closed_over_unit_interval(bg in 0.0f32..=1.0, k in 0.0f32..=1.0) {
            let out = screen_blend(bg, k);
            prop_assert!((0.0..=1.0).contains(&out));
        }

        #[test]
        fn prop_blend_identity_at_zero(v in 0.0f32..=1.0) {
            prop_assert!((screen_blend(v, 0.0) - v).abs() < 1e-6);
            prop_assert!((screen_blend(0.0, v) - v).abs() < 1e-6);
        }

        #[test]
        fn prop_blend_monotone(
            bg in 0.0f32..=1.0,
            k in 0.0f32..=1.0,
            delta in 0.0f32..=0.5,
        ) {
            let base = screen_blend(bg, k);
            prop_assert!(screen_blend((bg + delta).min(1.0), k) >= base - 1e-6);
            prop_assert!(screen_blend(bg, (k + delta).min(1.0)) >= base - 1e-6);
        }

        #[test]
        fn prop_blend_commutative(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            prop_assert!((screen_blend(a, b) - screen_blend(b, a)).abs() < 1e-6);
        }
    }
}
