//! Signal conditioning for GaitCore.
//!
//! Downstream event alignment is phase-sensitive, so all smoothing is
//! zero-phase (forward-backward filtering).

pub mod filter;

pub use filter::{condition_angles, ZeroPhaseFilter};
