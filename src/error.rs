//! Error types shared by parameter validation, grid construction and image I/O.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FilterError>;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("{name} must be at least {min}, got {value}")]
    BelowMinimum {
        name: &'static str,
        value: f64,
        min: f64,
    },

    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid point {0:?}, expected \"(row,col)\"")]
    InvalidPoint(String),

    #[error("Point ({row}, {col}) must not be negative")]
    NegativePoint { row: i64, col: i64 },

    #[error("Pixel buffer of length {len} does not match {rows}x{cols}")]
    Shape { rows: usize, cols: usize, len: usize },

    #[cfg(feature = "cli")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
