//! PyO3 function bindings for GaitCore.

use numpy::{PyArray1, PyArray2, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::core::config::AnalysisConfig;
use crate::core::types::{AngleSignal, GaitEvents};
use crate::cycles::align::{align, AlignMode};
use crate::cycles::normalize::normalize_phases as normalize_phases_rs;
use crate::metrics::outliers::filter_outliers as filter_outliers_rs;
use crate::metrics::report;
use crate::signal::filter::ZeroPhaseFilter;

use super::numpy_bridge::*;

/// Python-exposed analysis configuration.
#[pyclass]
#[derive(Debug, Clone)]
pub struct PyAnalysisConfig {
    #[pyo3(get, set)]
    pub sample_rate_hz: f64,
    #[pyo3(get, set)]
    pub filter_cutoff_hz: f64,
    #[pyo3(get, set)]
    pub filter_order: usize,
    #[pyo3(get, set)]
    pub stance_tolerance: f64,
    #[pyo3(get, set)]
    pub double_support_tolerance: f64,
    #[pyo3(get, set)]
    pub outlier_sigma: f64,
}

#[pymethods]
impl PyAnalysisConfig {
    #[new]
    #[pyo3(signature = (sample_rate_hz=50.0))]
    fn new(sample_rate_hz: f64) -> Self {
        (&AnalysisConfig::with_sample_rate(sample_rate_hz)).into()
    }
}

impl From<&AnalysisConfig> for PyAnalysisConfig {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            sample_rate_hz: config.sample_rate_hz,
            filter_cutoff_hz: config.filter_cutoff_hz,
            filter_order: config.filter_order,
            stance_tolerance: config.stance_tolerance,
            double_support_tolerance: config.double_support_tolerance,
            outlier_sigma: config.outlier_sigma,
        }
    }
}

impl From<&PyAnalysisConfig> for AnalysisConfig {
    fn from(py_config: &PyAnalysisConfig) -> Self {
        Self {
            sample_rate_hz: py_config.sample_rate_hz,
            filter_cutoff_hz: py_config.filter_cutoff_hz,
            filter_order: py_config.filter_order,
            stance_tolerance: py_config.stance_tolerance,
            double_support_tolerance: py_config.double_support_tolerance,
            outlier_sigma: py_config.outlier_sigma,
        }
    }
}

/// Python-exposed metric table row.
#[pyclass]
#[derive(Debug, Clone)]
pub struct PyMetricRow {
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub right: String,
    #[pyo3(get)]
    pub left: String,
    #[pyo3(get)]
    pub ratio: String,
}

fn resolve_config(config: Option<&PyAnalysisConfig>) -> AnalysisConfig {
    config.map(AnalysisConfig::from).unwrap_or_default()
}

fn build_inputs(
    right: PyReadonlyArray1<f64>,
    left: PyReadonlyArray1<f64>,
    right_strike: PyReadonlyArray1<i64>,
    left_strike: PyReadonlyArray1<i64>,
    right_off: PyReadonlyArray1<i64>,
    left_off: PyReadonlyArray1<i64>,
) -> PyResult<(AngleSignal, GaitEvents)> {
    let angles = AngleSignal::new(numpy_to_vec_f64(right)?, numpy_to_vec_f64(left)?)?;
    let events = GaitEvents {
        right_strike: numpy_to_events(right_strike)?,
        left_strike: numpy_to_events(left_strike)?,
        right_off: numpy_to_events(right_off)?,
        left_off: numpy_to_events(left_off)?,
    };
    Ok((angles, events))
}

/// Zero-phase low-pass conditioning of one angle trace.
#[pyfunction]
#[pyo3(signature = (data, cutoff_hz=6.0, order=2, sample_rate_hz=50.0))]
pub fn condition_signal<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    cutoff_hz: f64,
    order: usize,
    sample_rate_hz: f64,
) -> PyResult<&'py PyArray1<f64>> {
    let vec = numpy_to_vec_f64(data)?;
    let filter = ZeroPhaseFilter::new(cutoff_hz, order, sample_rate_hz)?;
    Ok(vec_to_numpy_f64(py, filter.apply(&vec)?))
}

/// Segment a signal at cycle boundaries and resample each stride to 101
/// percent-of-cycle points. Returns a (cycles x 101) array.
#[pyfunction]
pub fn normalize_phases<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    events: PyReadonlyArray1<i64>,
) -> PyResult<&'py PyArray2<f64>> {
    let vec = numpy_to_vec_f64(data)?;
    let events = numpy_to_events(events)?;
    let normalized = normalize_phases_rs(&vec, &events);
    PyArray2::from_vec2(py, &normalized.cycles)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// Match two event streams within a tolerance window; returns the signed
/// per-pair differences in frames.
#[pyfunction]
#[pyo3(signature = (events_a, events_b, tolerance=30.0, start_left=true))]
pub fn align_events<'py>(
    py: Python<'py>,
    events_a: PyReadonlyArray1<i64>,
    events_b: PyReadonlyArray1<i64>,
    tolerance: f64,
    start_left: bool,
) -> PyResult<&'py PyArray1<f64>> {
    let a = numpy_to_events(events_a)?;
    let b = numpy_to_events(events_b)?;
    let deltas = align(&a, &b, AlignMode::Diff, tolerance, start_left)?;
    Ok(vec_to_numpy_f64(py, deltas))
}

/// Remove statistically extreme values from a sample (iterated sigma fence).
#[pyfunction]
#[pyo3(signature = (values, sigma=2.0))]
pub fn filter_outliers<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<f64>,
    sigma: f64,
) -> PyResult<&'py PyArray1<f64>> {
    let vec = numpy_to_vec_f64(values)?;
    Ok(vec_to_numpy_f64(py, filter_outliers_rs(&vec, sigma)))
}

/// Compute the metric table for one recording of conditioned angles.
#[pyfunction]
#[pyo3(signature = (right, left, right_strike, left_strike, right_off, left_off, config=None))]
#[allow(clippy::too_many_arguments)]
pub fn compute_metrics(
    right: PyReadonlyArray1<f64>,
    left: PyReadonlyArray1<f64>,
    right_strike: PyReadonlyArray1<i64>,
    left_strike: PyReadonlyArray1<i64>,
    right_off: PyReadonlyArray1<i64>,
    left_off: PyReadonlyArray1<i64>,
    config: Option<PyAnalysisConfig>,
) -> PyResult<Vec<PyMetricRow>> {
    let (angles, events) = build_inputs(
        right,
        left,
        right_strike,
        left_strike,
        right_off,
        left_off,
    )?;
    let rows = report::compute_metrics(&angles, &events, &resolve_config(config.as_ref()))?;
    Ok(rows
        .into_iter()
        .map(|r| PyMetricRow {
            name: r.name,
            right: r.right,
            left: r.left,
            ratio: r.ratio,
        })
        .collect())
}

/// Mean stride curves per side, for the average-stride figure.
#[pyfunction]
pub fn avg_gait_phase<'py>(
    py: Python<'py>,
    right: PyReadonlyArray1<f64>,
    left: PyReadonlyArray1<f64>,
    right_strike: PyReadonlyArray1<i64>,
    left_strike: PyReadonlyArray1<i64>,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let angles = AngleSignal::new(numpy_to_vec_f64(right)?, numpy_to_vec_f64(left)?)?;
    let events = GaitEvents {
        right_strike: numpy_to_events(right_strike)?,
        left_strike: numpy_to_events(left_strike)?,
        ..GaitEvents::default()
    };
    let (right_curve, left_curve) = report::avg_gait_phase(&angles, &events);
    Ok((
        vec_to_numpy_f64(py, right_curve),
        vec_to_numpy_f64(py, left_curve),
    ))
}
