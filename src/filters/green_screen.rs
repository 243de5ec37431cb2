//! Green screen compositing.
//!
//! Places a sticker onto a background at a given origin. Sticker pixels close
//! to pure green are treated as transparent; sticker cells that land outside
//! the background are dropped.

use crate::filters::core::channel_distance;
use crate::grid::PixelGrid;
use crate::params::Point;
use crate::pixel::GREEN;

/// Whether a pixel is within `tolerance` of pure green.
#[inline]
pub fn is_green(pixel: u32, tolerance: u32) -> bool {
    channel_distance(pixel, GREEN) < tolerance
}

/// Composite `sticker` onto `background` with its top-left corner at `origin`.
///
/// # Arguments
/// * `background` - Base grid, its dimensions are kept
/// * `sticker` - Foreground grid
/// * `origin` - Background cell receiving the sticker's `(0, 0)` cell
/// * `tolerance` - Chroma key tolerance, expected in 1-100
///
/// # Returns
/// Copy of `background` with the non-green sticker pixels overlaid
pub fn green_screen(
    background: &PixelGrid,
    sticker: &PixelGrid,
    origin: Point,
    tolerance: u32,
) -> PixelGrid {
    let (rows, cols) = background.dim();
    let mut output = background.clone();

    // Only the overlap of sticker and background needs visiting
    let visible_rows = sticker.rows().min(rows.saturating_sub(origin.row));
    let visible_cols = sticker.cols().min(cols.saturating_sub(origin.col));

    for r in 0..visible_rows {
        for c in 0..visible_cols {
            let pixel = sticker[(r, c)];
            if !is_green(pixel, tolerance) {
                output.set(origin.row + r, origin.col + c, pixel);
            }
        }
    }

    output
}
