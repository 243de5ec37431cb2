//! Arbitrary-angle rotation by inverse mapping.
//!
//! For each output cell `(r, c)` the source cell is
//!
//! ```text
//! sr = floor(-(c * sin a) + (r + cos a) + rows / 2)
//! sc = floor(c * cos a + r * sin a)
//! ```
//!
//! with `rows / 2` in integer arithmetic. This is not a rotation about the
//! image center; the mapping is kept as-is because it defines the filter's
//! expected output. Cells mapping outside the source are filled white.

use crate::grid::PixelGrid;
use crate::pixel::WHITE;

/// Source cell sampled for output cell `(r, c)`.
#[inline]
pub fn source_coordinate(r: usize, c: usize, rows: usize, sin: f64, cos: f64) -> (isize, isize) {
    let (rf, cf) = (r as f64, c as f64);
    let half_rows = (rows / 2) as f64;
    let sr = (-(cf * sin) + (rf + cos) + half_rows).floor();
    let sc = (cf * cos + rf * sin).floor();
    (sr as isize, sc as isize)
}

/// Rotate a grid by `angle_degrees`.
///
/// # Arguments
/// * `src` - Source grid
/// * `angle_degrees` - Angle in degrees, expected in 0-360
///
/// # Returns
/// Grid with the same dimensions, unmapped cells `WHITE`
pub fn rotate(src: &PixelGrid, angle_degrees: f64) -> PixelGrid {
    let (rows, cols) = src.dim();
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let mut output = PixelGrid::filled(rows, cols, WHITE);

    for r in 0..rows {
        for c in 0..cols {
            let (sr, sc) = source_coordinate(r, c, rows, sin, cos);
            if let Some(p) = src.get(sr, sc) {
                output.set(r, c, p);
            }
        }
    }

    output
}
