//! Validated filter parameters.
//!
//! Each constructor enforces the range its filter expects, so the filters
//! themselves can assume valid input.

use std::fmt;
use std::str::FromStr;

use crate::error::{FilterError, Result};

pub const SCATTER_DEGREE_MIN: i64 = 1;
pub const SCATTER_DEGREE_MAX: i64 = 100;
pub const EDGE_THRESHOLD_MIN: i64 = 1;
pub const TOLERANCE_MIN: i64 = 1;
pub const TOLERANCE_MAX: i64 = 100;
pub const ANGLE_MIN: f64 = 0.0;
pub const ANGLE_MAX: f64 = 360.0;

fn check_range(name: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(FilterError::OutOfRange {
            name,
            value: value as f64,
            min: min as f64,
            max: max as f64,
        });
    }
    Ok(())
}

fn check_min(name: &'static str, value: i64, min: i64) -> Result<()> {
    if value < min {
        return Err(FilterError::BelowMinimum {
            name,
            value: value as f64,
            min: min as f64,
        });
    }
    Ok(())
}

// ============================================================================
// Point
// ============================================================================

/// A non-negative `(row, col)` position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Point { row, col }
    }

    /// Build a point from signed coordinates, rejecting negatives.
    pub fn try_new(row: i64, col: i64) -> Result<Self> {
        if row < 0 || col < 0 {
            return Err(FilterError::NegativePoint { row, col });
        }
        Ok(Point::new(row as usize, col as usize))
    }

    /// Map a pointer click at `(x, y)` to `(row = y, col = x)`.
    pub fn from_click(x: i64, y: i64) -> Result<Self> {
        Self::try_new(y, x)
    }
}

impl FromStr for Point {
    type Err = FilterError;

    /// Parse the literal form `(row,col)`. Whitespace around the numbers is allowed.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FilterError::InvalidPoint(s.to_string());

        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let (row, col) = inner.split_once(',').ok_or_else(invalid)?;
        let row: i64 = row.trim().parse().map_err(|_| invalid())?;
        let col: i64 = col.trim().parse().map_err(|_| invalid())?;

        Self::try_new(row, col)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ============================================================================
// Per-filter parameters
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScatterParams {
    pub degree: usize,
    /// Fixed seed for reproducible output; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl ScatterParams {
    pub fn new(degree: i64) -> Result<Self> {
        check_range("degree", degree, SCATTER_DEGREE_MIN, SCATTER_DEGREE_MAX)?;
        Ok(ScatterParams {
            degree: degree as usize,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeParams {
    pub threshold: u32,
}

impl EdgeParams {
    pub fn new(threshold: i64) -> Result<Self> {
        check_min("threshold", threshold, EDGE_THRESHOLD_MIN)?;
        let threshold = u32::try_from(threshold).unwrap_or(u32::MAX);
        Ok(EdgeParams { threshold })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreenScreenParams {
    pub origin: Point,
    pub tolerance: u32,
}

impl GreenScreenParams {
    pub fn new(origin: Point, tolerance: i64) -> Result<Self> {
        check_range("tolerance", tolerance, TOLERANCE_MIN, TOLERANCE_MAX)?;
        Ok(GreenScreenParams {
            origin,
            tolerance: tolerance as u32,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateParams {
    pub angle: f64,
}

impl RotateParams {
    pub fn new(angle: f64) -> Result<Self> {
        if !(ANGLE_MIN..=ANGLE_MAX).contains(&angle) {
            return Err(FilterError::OutOfRange {
                name: "angle",
                value: angle,
                min: ANGLE_MIN,
                max: ANGLE_MAX,
            });
        }
        Ok(RotateParams { angle })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurParams {
    pub radius: usize,
}

impl BlurParams {
    pub fn new(radius: i64) -> Result<Self> {
        check_min("radius", radius, 0)?;
        Ok(BlurParams {
            radius: radius as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!("(3,4)".parse::<Point>().unwrap(), Point::new(3, 4));
        assert_eq!(" ( 12 , 0 ) ".parse::<Point>().unwrap(), Point::new(12, 0));
    }

    #[test]
    fn test_parse_point_rejects_malformed() {
        for text in ["", "3,4", "(3 4)", "(a,4)", "(3,4", "3,4)", "(3,4,5)"] {
            assert!(
                matches!(text.parse::<Point>(), Err(FilterError::InvalidPoint(_))),
                "accepted {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_point_rejects_negative() {
        assert!(matches!(
            "(-1,4)".parse::<Point>(),
            Err(FilterError::NegativePoint { row: -1, col: 4 })
        ));
    }

    #[test]
    fn test_click_maps_x_y_to_col_row() {
        let point = Point::from_click(10, 20).unwrap();
        assert_eq!(point, Point::new(20, 10));
        assert!(Point::from_click(-1, 0).is_err());
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(2, 5).to_string(), "(2, 5)");
    }

    #[test]
    fn test_scatter_range() {
        assert!(ScatterParams::new(0).is_err());
        assert!(ScatterParams::new(101).is_err());
        let params = ScatterParams::new(100).unwrap().with_seed(5);
        assert_eq!(params.degree, 100);
        assert_eq!(params.seed, Some(5));
    }

    #[test]
    fn test_edge_range() {
        assert!(EdgeParams::new(0).is_err());
        assert_eq!(EdgeParams::new(1).unwrap().threshold, 1);
        assert_eq!(EdgeParams::new(1 << 40).unwrap().threshold, u32::MAX);
    }

    #[test]
    fn test_green_screen_range() {
        let origin = Point::new(0, 0);
        assert!(GreenScreenParams::new(origin, 0).is_err());
        assert!(GreenScreenParams::new(origin, 101).is_err());
        assert_eq!(GreenScreenParams::new(origin, 100).unwrap().tolerance, 100);
    }

    #[test]
    fn test_rotate_range() {
        assert!(RotateParams::new(-0.5).is_err());
        assert!(RotateParams::new(360.5).is_err());
        assert!(RotateParams::new(f64::NAN).is_err());
        assert!(RotateParams::new(0.0).is_ok());
        assert!(RotateParams::new(360.0).is_ok());
    }

    #[test]
    fn test_blur_range() {
        assert!(BlurParams::new(-1).is_err());
        assert_eq!(BlurParams::new(0).unwrap().radius, 0);
    }
}
