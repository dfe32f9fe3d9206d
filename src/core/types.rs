//! Core data types for GaitCore.

use serde::{Deserialize, Serialize};

use super::error::{GaitError, Result};

/// Frame index into an angle signal.
pub type FrameIndex = usize;

/// Ascending, deduplicated frame indices of a detected gait event.
///
/// Owned by the caller and consumed read-only; the engine never creates
/// events. May be empty or short when upstream detection failed.
pub type EventSequence = Vec<FrameIndex>;

/// Body side of a joint or event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// Column index in a two-column angle table.
    #[inline]
    pub fn column(self) -> usize {
        match self {
            Side::Right => 0,
            Side::Left => 1,
        }
    }

    /// Display label ("Right" / "Left").
    pub fn label(self) -> &'static str {
        match self {
            Side::Right => "Right",
            Side::Left => "Left",
        }
    }
}

/// Per-frame joint angles for both sides, in degrees.
///
/// Columns are time-aligned and share the sampling rate from
/// [`crate::core::AnalysisConfig`]. Immutable once produced upstream;
/// conditioning returns a new signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AngleSignal {
    /// Right-side angle trace.
    pub right: Vec<f64>,
    /// Left-side angle trace.
    pub left: Vec<f64>,
}

impl AngleSignal {
    /// Create a two-column signal, checking the columns agree in length.
    pub fn new(right: Vec<f64>, left: Vec<f64>) -> Result<Self> {
        if right.len() != left.len() {
            return Err(GaitError::length_mismatch(right.len(), left.len()));
        }
        Ok(Self { right, left })
    }

    /// Number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.right.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.right.is_empty()
    }

    /// Angle trace for one side.
    pub fn side(&self, side: Side) -> &[f64] {
        match side {
            Side::Right => &self.right,
            Side::Left => &self.left,
        }
    }
}

/// The four independently detected event streams of one recording.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GaitEvents {
    /// Right foot touchdown frames.
    pub right_strike: EventSequence,
    /// Left foot touchdown frames.
    pub left_strike: EventSequence,
    /// Right foot liftoff frames.
    pub right_off: EventSequence,
    /// Left foot liftoff frames.
    pub left_off: EventSequence,
}

impl GaitEvents {
    /// Strike sequence for one side.
    pub fn strikes(&self, side: Side) -> &[FrameIndex] {
        match side {
            Side::Right => &self.right_strike,
            Side::Left => &self.left_strike,
        }
    }

    /// Liftoff sequence for one side.
    pub fn offs(&self, side: Side) -> &[FrameIndex] {
        match side {
            Side::Right => &self.right_off,
            Side::Left => &self.left_off,
        }
    }

    /// True when no event stream carries any detection.
    pub fn all_empty(&self) -> bool {
        self.right_strike.is_empty()
            && self.left_strike.is_empty()
            && self.right_off.is_empty()
            && self.left_off.is_empty()
    }
}

/// One recording handed over by the upstream pose pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recording {
    pub angles: AngleSignal,
    pub events: GaitEvents,
}

/// One display row of the metrics report.
///
/// Cells are pre-formatted "mean ± std unit" strings; a cell with no usable
/// sample renders as "-". Produced fresh per report and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRow {
    /// Metric name, e.g. "Stance time".
    pub name: String,
    /// Right-side "mean ± std unit" cell.
    pub right: String,
    /// Left-side "mean ± std unit" cell.
    pub left: String,
    /// Signed right-vs-left percentage ratio, e.g. "+20.00%".
    pub ratio: String,
}

/// Full analysis result for one recording.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaitReport {
    /// Metric rows in fixed display order.
    pub rows: Vec<MetricRow>,
    /// Mean right-side stride shape over the 101-point cycle axis.
    pub right_curve: Vec<f64>,
    /// Mean left-side stride shape over the 101-point cycle axis.
    pub left_curve: Vec<f64>,
}
