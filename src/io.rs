//! Image file loading and saving.
//!
//! Decoding and encoding go through the `image` crate; the format follows the
//! file extension. Alpha is discarded on load.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::Result;
use crate::grid::PixelGrid;
use crate::pixel::{pack, unpack};

/// Convert a decoded RGB image into a grid.
pub fn grid_from_image(img: &RgbImage) -> PixelGrid {
    let (width, height) = img.dimensions();
    let mut grid = PixelGrid::filled(height as usize, width as usize, 0);
    for (x, y, Rgb([r, g, b])) in img.enumerate_pixels() {
        grid.set(y as usize, x as usize, pack(*r, *g, *b));
    }
    grid
}

/// Convert a grid into an RGB image.
pub fn image_from_grid(grid: &PixelGrid) -> RgbImage {
    let (rows, cols) = grid.dim();
    RgbImage::from_fn(cols as u32, rows as u32, |x, y| {
        let (r, g, b) = unpack(grid[(y as usize, x as usize)]);
        Rgb([r, g, b])
    })
}

/// Open an image file as a grid.
pub fn load_grid(path: impl AsRef<Path>) -> Result<PixelGrid> {
    let path = path.as_ref();
    let img = image::open(path)?.to_rgb8();
    tracing::info!(path = %path.display(), width = img.width(), height = img.height(), "loaded image");
    Ok(grid_from_image(&img))
}

/// Save a grid to an image file.
pub fn save_grid(grid: &PixelGrid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    image_from_grid(grid).save(path)?;
    tracing::info!(path = %path.display(), rows = grid.rows(), cols = grid.cols(), "saved image");
    Ok(())
}
