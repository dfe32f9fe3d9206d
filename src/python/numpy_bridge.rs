//! Numpy array conversion helpers.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

/// Convert numpy array to Vec<f64>.
pub fn numpy_to_vec_f64(arr: PyReadonlyArray1<f64>) -> PyResult<Vec<f64>> {
    Ok(arr.as_slice()?.to_vec())
}

/// Convert a numpy array of frame indices to an event sequence.
pub fn numpy_to_events(arr: PyReadonlyArray1<i64>) -> PyResult<Vec<usize>> {
    arr.as_slice()?
        .iter()
        .map(|&v| {
            usize::try_from(v).map_err(|_| {
                pyo3::exceptions::PyValueError::new_err(
                    "event frame indices must be non-negative",
                )
            })
        })
        .collect()
}

/// Convert Vec<f64> to numpy array.
pub fn vec_to_numpy_f64<'py>(py: Python<'py>, vec: Vec<f64>) -> &'py PyArray1<f64> {
    PyArray1::from_vec(py, vec)
}
