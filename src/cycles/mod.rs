//! Stride segmentation and event-stream alignment.

pub mod align;
pub mod normalize;

pub use align::{align, step_times, AlignMode};
pub use normalize::{normalize_phases, NormalizedCycles, CYCLE_POINTS};
