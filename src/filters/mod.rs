//! Filter modules for packed RGB grids.
//!
//! ## Grid Format
//!
//! Every filter works on a [`PixelGrid`](crate::grid::PixelGrid): a
//! `(rows, cols)` array of `u32` pixels packed as `0xRRGGBB`.
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Pure** - The input grid is only read; a fresh grid is returned
//! - **Dimension preserving** - Output has the input's shape
//! - **Bounds checked** - Neighborhood reads are skipped, clamped or filled,
//!   never out of range
//! - **Pre-validated parameters** - Range checks live in [`params`](crate::params)
//!
//! ## Filters
//!
//! - **Scatter**: random local resampling
//! - **Edge detection**: 3x3 color distance threshold, black/white output
//! - **Green screen**: chroma-keyed compositing of a second image
//! - **Compare**: count of differing pixels
//! - **Rotate**: inverse-mapped rotation with white fill
//! - **Gaussian blur**: separable convolution with edge clamping

pub mod core;
pub mod scatter;
pub mod edge;
pub mod green_screen;
pub mod compare;
pub mod rotate;
pub mod blur;

pub use self::blur::gaussian_blur;
pub use self::compare::count_differing_pixels;
pub use self::core::{channel_distance, gaussian_kernel_for_radius};
pub use self::edge::edge_detect;
pub use self::green_screen::green_screen;
pub use self::rotate::rotate;
pub use self::scatter::scatter;
