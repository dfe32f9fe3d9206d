//! Analysis configuration.
//!
//! All tunables travel in an explicit config struct passed by reference into
//! every entry point, so repeated evaluation of the same recording is
//! deterministic and parallel batches need no shared state.

use serde::{Deserialize, Serialize};

/// Configuration for the gait analysis engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Sampling rate of the angle signal in Hz.
    pub sample_rate_hz: f64,
    /// Low-pass cutoff frequency for signal conditioning in Hz.
    pub filter_cutoff_hz: f64,
    /// Butterworth filter order (per pass; applied forward and backward).
    pub filter_order: usize,
    /// Tolerance window for stance/swing event alignment, in frames.
    pub stance_tolerance: f64,
    /// Tolerance window for double-support event alignment, in frames.
    pub double_support_tolerance: f64,
    /// Standard-deviation multiple for the outlier fence.
    pub outlier_sigma: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        // Defaults match the 50 Hz pose pipeline feeding this engine.
        Self {
            sample_rate_hz: 50.0,
            filter_cutoff_hz: 6.0,
            filter_order: 2,
            stance_tolerance: 30.0,
            double_support_tolerance: 10.0,
            outlier_sigma: 2.0,
        }
    }
}

impl AnalysisConfig {
    /// Create a config for a recording at the given sampling rate.
    pub fn with_sample_rate(sample_rate_hz: f64) -> Self {
        Self {
            sample_rate_hz,
            ..Self::default()
        }
    }

    /// Milliseconds per frame at the configured sampling rate.
    #[inline]
    pub fn frame_ms(&self) -> f64 {
        1000.0 / self.sample_rate_hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_ms() {
        let config = AnalysisConfig::default();
        assert!((config.frame_ms() - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_with_sample_rate() {
        let config = AnalysisConfig::with_sample_rate(100.0);
        assert!((config.frame_ms() - 10.0).abs() < 1e-10);
        assert!((config.stance_tolerance - 30.0).abs() < 1e-10);
    }
}
