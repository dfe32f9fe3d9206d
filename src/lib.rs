// Suppress warning from PyO3 macro expansion (fixed in newer PyO3 versions)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

//! GaitCore - gait cycle analysis engine.
//!
//! This crate turns a per-frame joint-angle signal and upstream-detected gait
//! events into clinically interpretable metrics:
//! - Zero-phase low-pass signal conditioning
//! - Stride segmentation and 101-point percent-of-cycle normalization
//! - Tolerance-window event alignment for phase timing (stance, swing,
//!   double support)
//! - Outlier-robust summary statistics with right/left symmetry ratios
//!
//! The engine is purely computational: no I/O, no shared mutable state, and
//! caller-owned inputs are never mutated. Independent recordings can be
//! evaluated in parallel via [`metrics::batch::analyze_batch`].

pub mod core;
pub mod cycles;
pub mod estimation;
pub mod metrics;
#[cfg(feature = "python")]
pub mod python;
pub mod signal;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module entry point
#[cfg(feature = "python")]
#[pymodule]
fn _gaitcore(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    // Register config and result classes
    m.add_class::<python::bindings::PyAnalysisConfig>()?;
    m.add_class::<python::bindings::PyMetricRow>()?;

    // Register analysis functions
    m.add_function(wrap_pyfunction!(python::bindings::condition_signal, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::normalize_phases, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::align_events, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::filter_outliers, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::compute_metrics, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::avg_gait_phase, m)?)?;

    Ok(())
}
