//! Core types and utilities for GaitCore.

pub mod config;
pub mod error;
pub mod types;

pub use config::AnalysisConfig;
pub use error::{GaitError, Result};
pub use types::*;
