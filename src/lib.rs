//! Fauxtoshop
//!
//! Pixel-level image filters over grids of packed 24-bit RGB pixels, with an
//! optional command line front end and Python bindings via PyO3.
//!
//! ## Image Format
//! A [`PixelGrid`] is a `(rows, cols)` array of `u32` values laid out as
//! `0xRRGGBB`. Indexing is `(row, col)`, i.e. `(y, x)`. There is no alpha.
//!
//! ## Filter Architecture
//! Filters are pure functions: they read one grid (two for green screen and
//! compare) and return a new one with the same dimensions. Parameters are
//! validated up front by the types in [`params`], and [`pipeline::Filter`]
//! ties an operation to its parameters for dispatch.
//!
//! ## Features
//! - `cli` (default): the `fauxtoshop` binary and image file I/O in [`io`]
//! - `python`: the `fauxtoshop` Python extension module

pub mod error;
pub mod filters;
pub mod grid;
pub mod params;
pub mod pipeline;
pub mod pixel;

#[cfg(feature = "cli")]
pub mod io;

#[cfg(feature = "python")]
mod python;

#[cfg(feature = "python")]
pub use python::fauxtoshop;

pub use error::{FilterError, Result};
pub use grid::PixelGrid;
pub use params::Point;
pub use pipeline::{apply_batch, Filter, FilterKind, FilterOutput};
