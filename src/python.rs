//! Python bindings via PyO3.
//!
//! Grids cross the boundary as numpy `uint32` arrays of shape `(rows, cols)`
//! holding packed `0xRRGGBB` pixels. Parameters are validated here and raise
//! `ValueError` when out of range.

use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::FilterError;
use crate::filters::{blur, compare, core, edge, green_screen, rotate, scatter};
use crate::grid::PixelGrid;
use crate::params::{BlurParams, EdgeParams, GreenScreenParams, Point, RotateParams, ScatterParams};

impl From<FilterError> for PyErr {
    fn from(err: FilterError) -> PyErr {
        match err {
            FilterError::Io(_) => PyIOError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

fn to_grid(image: &PyReadonlyArray2<'_, u32>) -> PixelGrid {
    PixelGrid::from(image.as_array())
}

fn to_py<'py>(py: Python<'py>, grid: PixelGrid) -> Bound<'py, PyArray2<u32>> {
    grid.into_array().into_pyarray(py)
}

/// Scatter pixels by random offsets of up to `degree` (1-100).
#[pyfunction]
#[pyo3(signature = (image, degree, seed=None))]
pub fn scatter_image<'py>(
    py: Python<'py>,
    image: PyReadonlyArray2<'py, u32>,
    degree: i64,
    seed: Option<u64>,
) -> PyResult<Bound<'py, PyArray2<u32>>> {
    let params = ScatterParams::new(degree)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let result = scatter::scatter(&to_grid(&image), params.degree, &mut rng);
    Ok(to_py(py, result))
}

/// Black/white edge map; `threshold` must be at least 1.
#[pyfunction]
pub fn edge_detect<'py>(
    py: Python<'py>,
    image: PyReadonlyArray2<'py, u32>,
    threshold: i64,
) -> PyResult<Bound<'py, PyArray2<u32>>> {
    let params = EdgeParams::new(threshold)?;
    let result = edge::edge_detect(&to_grid(&image), params.threshold);
    Ok(to_py(py, result))
}

/// Composite `sticker` onto `background` with its corner at `(row, col)`.
#[pyfunction]
pub fn green_screen_image<'py>(
    py: Python<'py>,
    background: PyReadonlyArray2<'py, u32>,
    sticker: PyReadonlyArray2<'py, u32>,
    row: i64,
    col: i64,
    tolerance: i64,
) -> PyResult<Bound<'py, PyArray2<u32>>> {
    let params = GreenScreenParams::new(Point::try_new(row, col)?, tolerance)?;
    let result = green_screen::green_screen(
        &to_grid(&background),
        &to_grid(&sticker),
        params.origin,
        params.tolerance,
    );
    Ok(to_py(py, result))
}

/// Number of pixels that differ between two images.
#[pyfunction]
pub fn count_differing_pixels(
    a: PyReadonlyArray2<'_, u32>,
    b: PyReadonlyArray2<'_, u32>,
) -> usize {
    compare::count_differing_pixels(&to_grid(&a), &to_grid(&b))
}

/// Rotate by `angle` degrees (0-360).
#[pyfunction]
pub fn rotate_image<'py>(
    py: Python<'py>,
    image: PyReadonlyArray2<'py, u32>,
    angle: f64,
) -> PyResult<Bound<'py, PyArray2<u32>>> {
    let params = RotateParams::new(angle)?;
    let result = rotate::rotate(&to_grid(&image), params.angle);
    Ok(to_py(py, result))
}

/// Gaussian blur with the given integer radius (0 is a no-op).
#[pyfunction]
pub fn gaussian_blur<'py>(
    py: Python<'py>,
    image: PyReadonlyArray2<'py, u32>,
    radius: i64,
) -> PyResult<Bound<'py, PyArray2<u32>>> {
    let params = BlurParams::new(radius)?;
    let result = blur::gaussian_blur(&to_grid(&image), params.radius);
    Ok(to_py(py, result))
}

/// Normalized 1D Gaussian kernel of length `2 * radius + 1`.
#[pyfunction]
pub fn gaussian_kernel(radius: i64) -> PyResult<Vec<f64>> {
    let params = BlurParams::new(radius)?;
    Ok(core::gaussian_kernel_for_radius(params.radius))
}

/// Parse a `"(row,col)"` string into a tuple.
#[pyfunction]
pub fn parse_point(text: &str) -> PyResult<(usize, usize)> {
    let point: Point = text.parse()?;
    Ok((point.row, point.col))
}

/// Fauxtoshop extension module
#[pymodule]
pub fn fauxtoshop(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(scatter_image, m)?)?;
    m.add_function(wrap_pyfunction!(edge_detect, m)?)?;
    m.add_function(wrap_pyfunction!(green_screen_image, m)?)?;
    m.add_function(wrap_pyfunction!(count_differing_pixels, m)?)?;
    m.add_function(wrap_pyfunction!(rotate_image, m)?)?;
    m.add_function(wrap_pyfunction!(gaussian_blur, m)?)?;
    m.add_function(wrap_pyfunction!(gaussian_kernel, m)?)?;
    m.add_function(wrap_pyfunction!(parse_point, m)?)?;
    Ok(())
}
