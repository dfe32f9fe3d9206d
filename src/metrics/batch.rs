//! Parallel evaluation of independent recordings.
//!
//! The engine holds no shared mutable state, so a batch of recordings can be
//! analyzed on a rayon pool with one result per recording. A recording with
//! fatal input (e.g. a signal too short to filter) fails alone; the rest of
//! the batch is unaffected.

use rayon::prelude::*;

use crate::core::config::AnalysisConfig;
use crate::core::error::Result;
use crate::core::types::{GaitReport, Recording};

use super::report::analyze;

/// Analyze each recording in parallel, preserving input order.
pub fn analyze_batch(
    recordings: &[Recording],
    config: &AnalysisConfig,
) -> Vec<Result<GaitReport>> {
    recordings
        .par_iter()
        .map(|recording| analyze(recording, config))
        .collect()
}
