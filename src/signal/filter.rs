//! Zero-phase Butterworth low-pass filtering.
//!
//! Pose-derived angle traces carry frame-to-frame estimation jitter that
//! corrupts range-of-motion and peak metrics. Conditioning runs a low-pass
//! Butterworth filter forward and backward over the whole series, which
//! squares the magnitude response and cancels the phase shift.

use crate::core::config::AnalysisConfig;
use crate::core::error::{GaitError, Result};
use crate::core::types::AngleSignal;

/// Edge padding factor relative to the filter tap count.
const PAD_FACTOR: usize = 3;

/// A zero-phase second-order-section Butterworth low-pass filter.
///
/// Requested orders above two are realized as cascaded identical
/// second-order sections.
#[derive(Debug, Clone)]
pub struct ZeroPhaseFilter {
    // Biquad coefficients, normalized to a0 = 1.
    b: [f64; 3],
    a: [f64; 2],
    /// Number of cascaded second-order sections per direction.
    sections: usize,
}

impl ZeroPhaseFilter {
    /// Design a low-pass filter.
    ///
    /// # Arguments
    /// * `cutoff_hz` - Cutoff frequency, must lie below Nyquist
    /// * `order` - Filter order per direction (>= 1)
    /// * `sample_rate_hz` - Sampling rate of the signal
    pub fn new(cutoff_hz: f64, order: usize, sample_rate_hz: f64) -> Result<Self> {
        if order == 0 {
            return Err(GaitError::invalid_parameter("filter order must be >= 1"));
        }
        if sample_rate_hz <= 0.0 {
            return Err(GaitError::invalid_parameter(
                "sample rate must be positive",
            ));
        }
        if cutoff_hz <= 0.0 || cutoff_hz >= sample_rate_hz / 2.0 {
            return Err(GaitError::invalid_parameter(
                "cutoff must lie between 0 and the Nyquist frequency",
            ));
        }

        // Bilinear transform of the analog 2nd-order Butterworth prototype.
        let wc = (std::f64::consts::PI * cutoff_hz / sample_rate_hz).tan();
        let k = wc * wc;
        let norm = 1.0 + std::f64::consts::SQRT_2 * wc + k;

        let b = [k / norm, 2.0 * k / norm, k / norm];
        let a = [
            2.0 * (k - 1.0) / norm,
            (1.0 - std::f64::consts::SQRT_2 * wc + k) / norm,
        ];

        Ok(Self {
            b,
            a,
            sections: (order + 1) / 2,
        })
    }

    /// Design from an [`AnalysisConfig`].
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        Self::new(
            config.filter_cutoff_hz,
            config.filter_order,
            config.sample_rate_hz,
        )
    }

    /// Minimum number of input samples the filter accepts.
    #[inline]
    pub fn min_samples(&self) -> usize {
        self.pad_len() + 1
    }

    #[inline]
    fn pad_len(&self) -> usize {
        PAD_FACTOR * self.b.len()
    }

    /// Apply the filter with zero phase shift.
    ///
    /// Returns a new signal of identical length; the input is untouched.
    /// Fails with [`GaitError::InvalidSignal`] when the signal is shorter
    /// than the edge-padding window.
    pub fn apply(&self, signal: &[f64]) -> Result<Vec<f64>> {
        let pad = self.pad_len();
        if signal.len() < self.min_samples() {
            return Err(GaitError::invalid_signal(self.min_samples(), signal.len()));
        }

        // Odd reflection about the endpoints suppresses edge transients.
        let mut extended = Vec::with_capacity(signal.len() + 2 * pad);
        let first = signal[0];
        let last = signal[signal.len() - 1];
        for i in (1..=pad).rev() {
            extended.push(2.0 * first - signal[i]);
        }
        extended.extend_from_slice(signal);
        for i in (signal.len() - pad - 1..signal.len() - 1).rev() {
            extended.push(2.0 * last - signal[i]);
        }

        for _ in 0..self.sections {
            self.forward(&mut extended);
            extended.reverse();
            self.forward(&mut extended);
            extended.reverse();
        }

        Ok(extended[pad..pad + signal.len()].to_vec())
    }

    /// One causal pass of the biquad, in place.
    fn forward(&self, data: &mut [f64]) {
        // DC steady state initial conditions (the filter has unity DC gain).
        let mut x1 = data[0];
        let mut x2 = data[0];
        let mut y1 = data[0];
        let mut y2 = data[0];

        for sample in data.iter_mut() {
            let x0 = *sample;
            let y0 = self.b[0] * x0 + self.b[1] * x1 + self.b[2] * x2
                - self.a[0] * y1
                - self.a[1] * y2;
            x2 = x1;
            x1 = x0;
            y2 = y1;
            y1 = y0;
            *sample = y0;
        }
    }
}

/// Condition both columns of an angle signal independently.
pub fn condition_angles(angles: &AngleSignal, config: &AnalysisConfig) -> Result<AngleSignal> {
    let filter = ZeroPhaseFilter::from_config(config)?;
    Ok(AngleSignal {
        right: filter.apply(&angles.right)?,
        left: filter.apply(&angles.left)?,
    })
}
