//! Row-major grid of packed RGB pixels.
//!
//! [`PixelGrid`] wraps an `Array2<u32>` of shape `(rows, cols)`. Indexing is
//! `(row, col)`, i.e. `(y, x)`. Every stored value is masked to 24 bits so each
//! channel byte stays in 0-255.

use std::ops::Index;

use ndarray::{Array2, ArrayView2};

use crate::error::{FilterError, Result};
use crate::pixel::RGB_MASK;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Array2<u32>,
}

impl PixelGrid {
    /// Create a grid filled with a single pixel value.
    pub fn filled(rows: usize, cols: usize, pixel: u32) -> Self {
        PixelGrid {
            pixels: Array2::from_elem((rows, cols), pixel & RGB_MASK),
        }
    }

    /// Create a grid from row-major pixel data.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<u32>) -> Result<Self> {
        let len = data.len();
        let pixels = Array2::from_shape_vec((rows, cols), data)
            .map_err(|_| FilterError::Shape { rows, cols, len })?;
        Ok(Self::from_array(pixels))
    }

    /// Create a grid from nested rows. All rows must have the same length.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let data: Vec<u32> = rows.iter().flatten().copied().collect();
        Self::from_shape_vec(rows.len(), cols, data)
    }

    /// Wrap an existing array, masking each value to 24 bits.
    pub fn from_array(mut pixels: Array2<u32>) -> Self {
        pixels.mapv_inplace(|p| p & RGB_MASK);
        PixelGrid { pixels }
    }

    pub fn rows(&self) -> usize {
        self.pixels.nrows()
    }

    pub fn cols(&self) -> usize {
        self.pixels.ncols()
    }

    /// `(rows, cols)`
    pub fn dim(&self) -> (usize, usize) {
        self.pixels.dim()
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether a signed `(row, col)` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows() && (col as usize) < self.cols()
    }

    /// Bounds-checked lookup with signed coordinates.
    #[inline]
    pub fn get(&self, row: isize, col: isize) -> Option<u32> {
        if self.in_bounds(row, col) {
            Some(self.pixels[[row as usize, col as usize]])
        } else {
            None
        }
    }

    /// Store a pixel, masking it to 24 bits.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, pixel: u32) {
        self.pixels[[row, col]] = pixel & RGB_MASK;
    }

    pub fn into_array(self) -> Array2<u32> {
        self.pixels
    }

    /// Iterate over all pixels in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &u32> {
        self.pixels.iter()
    }
}

impl Index<(usize, usize)> for PixelGrid {
    type Output = u32;

    fn index(&self, (row, col): (usize, usize)) -> &u32 {
        &self.pixels[[row, col]]
    }
}

impl From<ArrayView2<'_, u32>> for PixelGrid {
    fn from(view: ArrayView2<'_, u32>) -> Self {
        Self::from_array(view.to_owned())
    }
}
