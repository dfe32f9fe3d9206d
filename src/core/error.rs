//! Error types for GaitCore.

use thiserror::Error;

/// Result type alias for GaitCore operations.
pub type Result<T> = std::result::Result<T, GaitError>;

/// Error types for the gait analysis engine.
///
/// Only fatal input conditions are errors. Degenerate-but-recoverable data
/// (zero detected cycles, a partially empty event sequence) is absorbed into
/// empty results and NaN means instead.
#[derive(Error, Debug)]
pub enum GaitError {
    /// Signal too short for the requested filter window.
    #[error("Invalid signal: need at least {required} samples, got {available}")]
    InvalidSignal { required: usize, available: usize },

    /// Event sequences unusable for alignment (both sides empty).
    #[error("Misaligned event sequences: {message}")]
    MisalignedSequences { message: String },

    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Data length mismatch between arrays.
    #[error("Data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl GaitError {
    /// Create an invalid signal error.
    pub fn invalid_signal(required: usize, available: usize) -> Self {
        Self::InvalidSignal {
            required,
            available,
        }
    }

    /// Create a misaligned sequences error.
    pub fn misaligned_sequences(message: impl Into<String>) -> Self {
        Self::MisalignedSequences {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }
}

#[cfg(feature = "python")]
impl From<GaitError> for pyo3::PyErr {
    fn from(err: GaitError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
