//! Gaussian blur for packed RGB grids.
//!
//! Separable 2-pass convolution: a horizontal pass into an intermediate grid,
//! then a vertical pass over that grid. Samples past the border reuse the
//! nearest edge pixel.

use crate::filters::core::gaussian_kernel_for_radius;
use crate::grid::PixelGrid;
use crate::pixel::{channel_from_f64, pack, unpack};

/// Weighted sum of a run of pixels, repacked to a pixel.
#[inline]
fn convolve<F>(kernel: &[f64], half: isize, sample: F) -> u32
where
    F: Fn(isize) -> u32,
{
    let mut sum = [0.0f64; 3];
    for (ki, &kv) in kernel.iter().enumerate() {
        let (r, g, b) = unpack(sample(ki as isize - half));
        sum[0] += kv * r as f64;
        sum[1] += kv * g as f64;
        sum[2] += kv * b as f64;
    }
    pack(
        channel_from_f64(sum[0]),
        channel_from_f64(sum[1]),
        channel_from_f64(sum[2]),
    )
}

/// Apply Gaussian blur to a grid.
///
/// # Arguments
/// * `src` - Source grid
/// * `radius` - Blur radius in pixels; 0 returns a copy
///
/// # Returns
/// Blurred grid with same dimensions
pub fn gaussian_blur(src: &PixelGrid, radius: usize) -> PixelGrid {
    let kernel = gaussian_kernel_for_radius(radius);
    if kernel.is_empty() || src.is_empty() {
        return src.clone();
    }

    let (rows, cols) = src.dim();
    let half = radius as isize;
    let mut temp = PixelGrid::filled(rows, cols, 0);
    let mut result = PixelGrid::filled(rows, cols, 0);

    // Horizontal pass
    for y in 0..rows {
        for x in 0..cols {
            let p = convolve(&kernel, half, |k| {
                let sx = (x as isize + k).clamp(0, cols as isize - 1) as usize;
                src[(y, sx)]
            });
            temp.set(y, x, p);
        }
    }

    // Vertical pass
    for y in 0..rows {
        for x in 0..cols {
            let p = convolve(&kernel, half, |k| {
                let sy = (y as isize + k).clamp(0, rows as isize - 1) as usize;
                temp[(sy, x)]
            });
            result.set(y, x, p);
        }
    }

    result
}
