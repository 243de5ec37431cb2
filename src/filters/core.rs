//! Core utilities shared by the filters.
//!
//! - Gaussian kernel generation for the separable blur
//! - Chebyshev color distance used by edge detection and chroma keying

use std::f64::consts::PI;

use crate::pixel::unpack;

/// Generate a normalized 1D Gaussian kernel for an integer radius.
///
/// The kernel has `2 * radius + 1` taps; the weight for offset `k` lives at
/// index `k + radius`. Sigma equals the radius. A radius of 0 yields an empty
/// kernel, which callers treat as "no blur".
///
/// # Arguments
/// * `radius` - Blur radius in pixels
///
/// # Returns
/// Normalized weights summing to 1.0
pub fn gaussian_kernel_for_radius(radius: usize) -> Vec<f64> {
    if radius < 1 {
        return Vec::new();
    }

    let r = radius as f64;
    let inv_two_r_sq = 1.0 / (2.0 * r * r);
    let scale = 1.0 / ((2.0 * PI).sqrt() * r);
    let half = radius as isize;

    let mut kernel: Vec<f64> = (-half..=half)
        .map(|k| {
            let x = (k * k) as f64;
            scale * (-x * inv_two_r_sq).exp()
        })
        .collect();

    // Normalize
    let sum: f64 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}

/// Chebyshev distance between two packed colors.
///
/// Returns the largest absolute per-channel difference, 0-255.
#[inline]
pub fn channel_distance(a: u32, b: u32) -> u32 {
    let (r1, g1, b1) = unpack(a);
    let (r2, g2, b2) = unpack(b);
    let dr = r1.abs_diff(r2);
    let dg = g1.abs_diff(g2);
    let db = b1.abs_diff(b2);
    dr.max(dg).max(db) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{BLACK, GREEN, WHITE};

    #[test]
    fn test_kernel_empty_for_radius_zero() {
        assert!(gaussian_kernel_for_radius(0).is_empty());
    }

    #[test]
    fn test_kernel_normalized() {
        for radius in 1..=12 {
            let kernel = gaussian_kernel_for_radius(radius);
            assert_eq!(kernel.len(), 2 * radius + 1);
            let sum: f64 = kernel.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "radius {} sums to {}", radius, sum);
            assert!(kernel.iter().all(|&w| w >= 0.0));
        }
    }

    #[test]
    fn test_kernel_symmetric_and_peaked() {
        let kernel = gaussian_kernel_for_radius(4);
        let n = kernel.len();
        for i in 0..n {
            assert_eq!(kernel[i], kernel[n - 1 - i]);
        }
        let center = kernel[4];
        assert!(kernel.iter().all(|&w| w <= center));
        assert!(kernel[0] < kernel[1]);
    }

    #[test]
    fn test_kernel_radius_one_values() {
        // exp(-1/2) relative weight on each side
        let kernel = gaussian_kernel_for_radius(1);
        let side = (-0.5f64).exp();
        let total = 1.0 + 2.0 * side;
        assert!((kernel[1] - 1.0 / total).abs() < 1e-12);
        assert!((kernel[0] - side / total).abs() < 1e-12);
    }

    #[test]
    fn test_channel_distance() {
        assert_eq!(channel_distance(WHITE, BLACK), 255);
        assert_eq!(channel_distance(GREEN, GREEN), 0);
        assert_eq!(channel_distance(0x102030, 0x152010), 0x20);
        assert_eq!(channel_distance(0x152010, 0x102030), 0x20);
    }
}
