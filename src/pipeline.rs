//! Filter selection and dispatch.
//!
//! [`Filter`] holds one of the six operations together with its validated
//! parameters (and second image where needed). [`Filter::apply`] runs it on a
//! grid; [`apply_batch`] runs it on many grids in parallel.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::filters::{blur, compare, edge, green_screen, rotate, scatter};
use crate::grid::PixelGrid;
use crate::params::{BlurParams, EdgeParams, GreenScreenParams, RotateParams, ScatterParams};

/// The filters offered to the user, numbered as in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Scatter = 1,
    EdgeDetect = 2,
    GreenScreen = 3,
    Compare = 4,
    Rotate = 5,
    GaussianBlur = 6,
}

impl FilterKind {
    pub fn label(self) -> &'static str {
        match self {
            FilterKind::Scatter => "Scatter",
            FilterKind::EdgeDetect => "Edge detection",
            FilterKind::GreenScreen => "Green screen with another image",
            FilterKind::Compare => "Compare with another image",
            FilterKind::Rotate => "Rotation",
            FilterKind::GaussianBlur => "Gaussian blur",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", *self as u8, self.label())
    }
}

/// A filter with everything it needs besides the input grid.
#[derive(Debug, Clone)]
pub enum Filter {
    Scatter(ScatterParams),
    EdgeDetect(EdgeParams),
    GreenScreen {
        sticker: PixelGrid,
        params: GreenScreenParams,
    },
    Compare {
        other: PixelGrid,
    },
    Rotate(RotateParams),
    GaussianBlur(BlurParams),
}

/// Result of applying a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOutput {
    Image(PixelGrid),
    /// Number of differing pixels, from [`Filter::Compare`].
    Difference(usize),
}

impl FilterOutput {
    pub fn image(&self) -> Option<&PixelGrid> {
        match self {
            FilterOutput::Image(grid) => Some(grid),
            FilterOutput::Difference(_) => None,
        }
    }

    pub fn into_image(self) -> Option<PixelGrid> {
        match self {
            FilterOutput::Image(grid) => Some(grid),
            FilterOutput::Difference(_) => None,
        }
    }

    /// Human readable description of a comparison result.
    pub fn summary(&self) -> Option<String> {
        match self {
            FilterOutput::Difference(0) => Some("The images are the same.".to_string()),
            FilterOutput::Difference(n) => Some(format!("The images differ by {} pixels.", n)),
            FilterOutput::Image(_) => None,
        }
    }
}

impl Filter {
    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Scatter(_) => FilterKind::Scatter,
            Filter::EdgeDetect(_) => FilterKind::EdgeDetect,
            Filter::GreenScreen { .. } => FilterKind::GreenScreen,
            Filter::Compare { .. } => FilterKind::Compare,
            Filter::Rotate(_) => FilterKind::Rotate,
            Filter::GaussianBlur(_) => FilterKind::GaussianBlur,
        }
    }

    /// Apply the filter to `src`. The input grid is never modified.
    pub fn apply(&self, src: &PixelGrid) -> FilterOutput {
        self.apply_indexed(src, 0)
    }

    /// `index` offsets the scatter seed so each image of a batch differs.
    fn apply_indexed(&self, src: &PixelGrid, index: u64) -> FilterOutput {
        let (rows, cols) = src.dim();
        match self {
            Filter::Scatter(params) => {
                tracing::debug!(rows, cols, degree = params.degree, seed = ?params.seed, "scatter");
                let mut rng = match params.seed {
                    Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index)),
                    None => StdRng::from_entropy(),
                };
                FilterOutput::Image(scatter::scatter(src, params.degree, &mut rng))
            }
            Filter::EdgeDetect(params) => {
                tracing::debug!(rows, cols, threshold = params.threshold, "edge detect");
                FilterOutput::Image(edge::edge_detect(src, params.threshold))
            }
            Filter::GreenScreen { sticker, params } => {
                tracing::debug!(
                    rows,
                    cols,
                    sticker_rows = sticker.rows(),
                    sticker_cols = sticker.cols(),
                    origin = %params.origin,
                    tolerance = params.tolerance,
                    "green screen"
                );
                FilterOutput::Image(green_screen::green_screen(
                    src,
                    sticker,
                    params.origin,
                    params.tolerance,
                ))
            }
            Filter::Compare { other } => {
                tracing::debug!(rows, cols, other_rows = other.rows(), other_cols = other.cols(), "compare");
                FilterOutput::Difference(compare::count_differing_pixels(src, other))
            }
            Filter::Rotate(params) => {
                tracing::debug!(rows, cols, angle = params.angle, "rotate");
                FilterOutput::Image(rotate::rotate(src, params.angle))
            }
            Filter::GaussianBlur(params) => {
                tracing::debug!(rows, cols, radius = params.radius, "gaussian blur");
                FilterOutput::Image(blur::gaussian_blur(src, params.radius))
            }
        }
    }
}

/// Apply one filter to many grids in parallel.
///
/// Results are returned in input order. A seeded scatter uses `seed + i` for
/// the `i`-th grid, so seeded batches are reproducible.
pub fn apply_batch(filter: &Filter, images: &[PixelGrid]) -> Vec<FilterOutput> {
    images
        .par_iter()
        .enumerate()
        .map(|(i, src)| filter.apply_indexed(src, i as u64))
        .collect()
}
