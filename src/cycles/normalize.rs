//! Percent-of-cycle normalization.
//!
//! Strides have different durations, so each inter-event segment is resampled
//! onto a canonical 101-point 0-100% axis before strides can be compared or
//! averaged.

use serde::{Deserialize, Serialize};

use crate::core::types::FrameIndex;

/// Number of samples per normalized cycle (0% through 100% inclusive).
pub const CYCLE_POINTS: usize = 101;

/// The normalized strides of one side, cycle index x 101.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizedCycles {
    /// One 101-point curve per valid cycle, in temporal order.
    pub cycles: Vec<Vec<f64>>,
    /// Segments excluded as degenerate (out-of-order events, fewer than two
    /// samples, or events beyond the end of the signal).
    pub skipped: usize,
}

impl NormalizedCycles {
    /// Number of valid cycles.
    #[inline]
    pub fn len(&self) -> usize {
        self.cycles.len()
    }

    /// Check if no valid cycle was found.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Element-wise mean across cycles: the representative stride shape.
    ///
    /// Returns a 101-point NaN curve when no cycle is available, so the
    /// caller can still plot "no data".
    pub fn mean_curve(&self) -> Vec<f64> {
        if self.cycles.is_empty() {
            return vec![f64::NAN; CYCLE_POINTS];
        }
        let n = self.cycles.len() as f64;
        (0..CYCLE_POINTS)
            .map(|i| self.cycles.iter().map(|c| c[i]).sum::<f64>() / n)
            .collect()
    }

    /// Per-percent mean and standard deviation columns, for plotting the
    /// mean curve against a +/- 1 std band.
    pub fn phase_band(&self) -> (Vec<f64>, Vec<f64>) {
        let mean = self.mean_curve();
        if self.cycles.len() < 2 {
            return (mean, vec![0.0; CYCLE_POINTS]);
        }
        let n = self.cycles.len() as f64;
        let std = (0..CYCLE_POINTS)
            .map(|i| {
                let m = mean[i];
                let var = self
                    .cycles
                    .iter()
                    .map(|c| (c[i] - m).powi(2))
                    .sum::<f64>()
                    / (n - 1.0);
                var.sqrt()
            })
            .collect();
        (mean, std)
    }

    /// Reduce each cycle to a scalar, e.g. range of motion or peak value.
    pub fn map_cycles<F>(&self, f: F) -> Vec<f64>
    where
        F: Fn(&[f64]) -> f64,
    {
        self.cycles.iter().map(|c| f(c)).collect()
    }
}

/// Segment a signal at the given cycle-boundary events and resample every
/// valid segment to [`CYCLE_POINTS`] samples.
///
/// Each consecutive event pair `(events[i], events[i+1])` delimits the
/// half-open frame interval of one cycle. Degenerate segments are skipped
/// silently but counted in [`NormalizedCycles::skipped`]. Fewer than two
/// events yield an empty result, not an error.
pub fn normalize_phases(signal: &[f64], events: &[FrameIndex]) -> NormalizedCycles {
    let mut result = NormalizedCycles::default();

    for pair in events.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        if end <= start || end - start < 2 {
            // Out-of-order or too short to interpolate.
            result.skipped += 1;
            continue;
        }
        if end > signal.len() {
            // The stride is only partially recorded; stretching the
            // fragment over the full percent axis would misrepresent it.
            result.skipped += 1;
            continue;
        }
        result.cycles.push(resample(&signal[start..end]));
    }

    result
}

/// Piecewise-linear resampling of one segment onto the percent axis.
///
/// t in [0,1] maps linearly onto the original frame positions; linear
/// interpolation is monotone between samples, so no overshoot is introduced.
fn resample(segment: &[f64]) -> Vec<f64> {
    debug_assert!(segment.len() >= 2);
    let last = segment.len() - 1;
    (0..CYCLE_POINTS)
        .map(|k| {
            let pos = k as f64 * last as f64 / (CYCLE_POINTS - 1) as f64;
            let i = pos.floor() as usize;
            if i >= last {
                segment[last]
            } else {
                let frac = pos - i as f64;
                segment[i] * (1.0 - frac) + segment[i + 1] * frac
            }
        })
        .collect()
}
