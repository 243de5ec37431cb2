//! Edge detection by neighborhood color distance.
//!
//! A pixel is an edge when any in-bounds pixel of its 3x3 neighborhood differs
//! from it by more than the threshold (Chebyshev distance). Output is strictly
//! two-color: edges black, everything else white.

use crate::filters::core::channel_distance;
use crate::grid::PixelGrid;
use crate::pixel::{BLACK, WHITE};

/// Whether the pixel at `(r, c)` differs from a neighbor by more than `threshold`.
///
/// Neighbors outside the grid are skipped.
pub fn is_edge(src: &PixelGrid, threshold: u32, r: usize, c: usize) -> bool {
    let center = src[(r, c)];
    let (ri, ci) = (r as isize, c as isize);

    for dy in -1..=1 {
        for dx in -1..=1 {
            if let Some(neighbor) = src.get(ri + dy, ci + dx) {
                if channel_distance(center, neighbor) > threshold {
                    return true;
                }
            }
        }
    }

    false
}

/// Detect edges, producing a black/white grid.
///
/// # Arguments
/// * `src` - Source grid
/// * `threshold` - Minimum channel distance that counts as an edge, at least 1
///
/// # Returns
/// Grid of the same dimensions containing only `BLACK` and `WHITE`
pub fn edge_detect(src: &PixelGrid, threshold: u32) -> PixelGrid {
    let (rows, cols) = src.dim();
    let mut output = PixelGrid::filled(rows, cols, WHITE);

    for r in 0..rows {
        for c in 0..cols {
            if is_edge(src, threshold, r, c) {
                output.set(r, c, BLACK);
            }
        }
    }

    output
}
