//! Tolerance-window alignment of two event streams.
//!
//! Strike and liftoff events are detected independently upstream, so the two
//! streams may disagree in count and carry spurious or missing detections.
//! Alignment pairs each usable event with the nearest in-order counterpart
//! within a tolerance window; everything unmatched is dropped silently.

use crate::core::error::{GaitError, Result};
use crate::core::types::FrameIndex;

/// What to report for each matched pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignMode {
    /// Signed difference `b - a` in frames.
    Diff,
    /// Absolute difference `|b - a|` in frames.
    Abs,
}

/// Match `events_a` against `events_b` and return the per-pair differences.
///
/// Matching is greedy in temporal order: each event in `events_a` pairs with
/// the nearest not-yet-consumed event of `events_b` at or after it, within
/// `tolerance` frames (inclusive). A counterpart that precedes the anchor is
/// accepted only when no following candidate fits the window: that keeps
/// small detection jitter (a liftoff resolved a few frames before the
/// contralateral strike) legal without letting an anchor capture the event
/// of the previous gait phase. Each element of `events_b` is consumed by at
/// most one pair. Unmatched events on either side are dropped, so the
/// result length is at most `min(events_a.len(), events_b.len())`.
///
/// `start_left` anchors matching on the first element of `events_a`; with
/// `false`, leading `events_a` entries that precede `events_b[0]` are
/// skipped first (the two streams may be offset by one event).
///
/// Fails with [`GaitError::MisalignedSequences`] only when both sequences
/// are empty; a single empty sequence yields an empty result.
pub fn align(
    events_a: &[FrameIndex],
    events_b: &[FrameIndex],
    mode: AlignMode,
    tolerance: f64,
    start_left: bool,
) -> Result<Vec<f64>> {
    if events_a.is_empty() && events_b.is_empty() {
        return Err(GaitError::misaligned_sequences(
            "both event sequences are empty",
        ));
    }
    if events_a.is_empty() || events_b.is_empty() {
        return Ok(Vec::new());
    }

    let events_a = if start_left {
        events_a
    } else {
        match events_a.iter().position(|&a| a >= events_b[0]) {
            Some(i) => &events_a[i..],
            None => return Ok(Vec::new()),
        }
    };

    let mut deltas = Vec::new();
    let mut next_b = 0;

    for &a in events_a {
        let mut following: Option<usize> = None;
        let mut preceding: Option<usize> = None;
        for (j, &b) in events_b.iter().enumerate().skip(next_b) {
            let delta = b as f64 - a as f64;
            if delta > tolerance {
                // events_b is ascending; no later candidate can match.
                break;
            }
            if delta < -tolerance {
                continue;
            }
            if delta >= 0.0 {
                // Ascending, so the first in-order candidate is the nearest.
                following = Some(j);
                break;
            }
            // Each later preceding candidate is strictly nearer.
            preceding = Some(j);
        }
        if let Some(j) = following.or(preceding) {
            let delta = events_b[j] as f64 - a as f64;
            deltas.push(match mode {
                AlignMode::Diff => delta,
                AlignMode::Abs => delta.abs(),
            });
            next_b = j + 1;
        }
    }

    Ok(deltas)
}

/// Successive differences within one event sequence, in frames.
///
/// Used for step time, where no cross-stream alignment is needed.
pub fn step_times(events: &[FrameIndex]) -> Vec<f64> {
    events
        .windows(2)
        .map(|pair| pair[1] as f64 - pair[0] as f64)
        .collect()
}
