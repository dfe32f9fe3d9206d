//! Outlier rejection for per-stride scalar samples.
//!
//! Pose estimation occasionally produces a wildly wrong stride (tracking
//! loss, occlusion), and a single such stride would dominate a mean of a
//! dozen values. Before summarizing, each sample set passes a sigma fence.
//!
//! Rule (documented for the report methodology): values further than
//! `sigma` sample standard deviations from the sample mean are removed,
//! and the fence is re-applied to the reduced sample until it stabilizes.
//! Iterating to the fixed point makes the filter idempotent; the surviving
//! values keep their original order.

use super::{mean, sample_std};

/// Remove statistically extreme values from a sample.
///
/// Deterministic and order-preserving; the result is a subsequence of the
/// input. Samples of two or fewer values are returned unchanged (too little
/// data to judge an outlier), and an empty input yields an empty result.
/// Non-finite values are always dropped.
pub fn filter_outliers(values: &[f64], sigma: f64) -> Vec<f64> {
    let mut kept: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

    loop {
        if kept.len() <= 2 {
            return kept;
        }
        let center = mean(&kept);
        let spread = sample_std(&kept);
        if spread == 0.0 {
            return kept;
        }
        let lo = center - sigma * spread;
        let hi = center + sigma * spread;

        let next: Vec<f64> = kept.iter().copied().filter(|&v| v >= lo && v <= hi).collect();
        if next.len() == kept.len() {
            return next;
        }
        kept = next;
    }
}
