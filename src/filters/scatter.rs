//! Scatter filter: per-pixel random resampling.
//!
//! Each output pixel copies a source pixel at a random offset of up to
//! `degree` rows and columns. Offsets landing outside the grid are redrawn.

use rand::Rng;

use crate::grid::PixelGrid;

/// Full-window draws tried before falling back to the clipped window.
pub const MAX_REJECTION_ATTEMPTS: usize = 64;

/// Scatter pixels by random offsets in `[-degree, degree]` on both axes.
///
/// Offsets are rejection sampled over the full window. After
/// [`MAX_REJECTION_ATTEMPTS`] misses the offset is drawn from the window
/// clipped to the grid. Rows and columns are independent, so the clipped draw
/// has the same distribution as rejection sampling and always terminates.
///
/// # Arguments
/// * `src` - Source grid
/// * `degree` - Maximum offset, expected in 1-100
/// * `rng` - Random source
///
/// # Returns
/// Grid with the same dimensions whose every pixel comes from `src`
pub fn scatter<R: Rng>(src: &PixelGrid, degree: usize, rng: &mut R) -> PixelGrid {
    let (rows, cols) = src.dim();
    let mut output = src.clone();
    let d = degree as isize;
    let mut fallbacks = 0usize;

    for r in 0..rows {
        for c in 0..cols {
            let (ri, ci) = (r as isize, c as isize);
            let mut sampled = None;

            for _ in 0..MAX_REJECTION_ATTEMPTS {
                let dr = rng.gen_range(-d..=d);
                let dc = rng.gen_range(-d..=d);
                if let Some(p) = src.get(ri + dr, ci + dc) {
                    sampled = Some(p);
                    break;
                }
            }

            let pixel = match sampled {
                Some(p) => p,
                None => {
                    fallbacks += 1;
                    let sr = rng.gen_range((ri - d).max(0)..=(ri + d).min(rows as isize - 1));
                    let sc = rng.gen_range((ci - d).max(0)..=(ci + d).min(cols as isize - 1));
                    src[(sr as usize, sc as usize)]
                }
            };

            output.set(r, c, pixel);
        }
    }

    if fallbacks > 0 {
        tracing::debug!(fallbacks, degree, "scatter used clipped window");
    }

    output
}
