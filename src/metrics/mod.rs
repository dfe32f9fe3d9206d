//! Metric aggregation for GaitCore.

pub mod batch;
pub mod outliers;
pub mod report;

pub use batch::analyze_batch;
pub use outliers::filter_outliers;
pub use report::{analyze, avg_gait_phase, compute_metrics};

/// Arithmetic mean; NaN for an empty sample.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1); zero for fewer than two values.
pub(crate) fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    variance.sqrt()
}
