//! Upstream pose-estimation boundary.
//!
//! The neural pose pipeline (person detection, 2D keypoints, 3D lifting,
//! event detection) lives outside this crate. The engine only depends on the
//! single capability "estimate": given a video handle and per-frame bounding
//! boxes, produce joint angles and gait events. Nothing here knows about
//! model internals, checkpoints or GPUs.

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{AngleSignal, GaitEvents};

/// Frame-major 3D joint positions, `frame x joint x (x, y, z)`.
pub type Pose3d = Vec<Vec<[f64; 3]>>;

/// Opaque handle to a decoded video clip. Decoding is the surrounding
/// application's concern; the engine only needs the temporal extent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VideoClip {
    /// Number of frames.
    pub frame_count: usize,
    /// Frames per second.
    pub fps: f64,
}

/// Per-frame person bounding box from the upstream detector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox {
    pub frame: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything the pose pipeline hands the engine for one recording.
#[derive(Debug, Clone)]
pub struct Estimation {
    /// Lifted 3D pose, kept for the viewer; unused by the metrics core.
    pub pose: Pose3d,
    /// Per-frame joint angles for both sides, degrees.
    pub angles: AngleSignal,
    /// Detected strike and liftoff frames.
    pub events: GaitEvents,
}

/// Which estimation pipeline to run, chosen once at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimatorKind {
    /// 2D keypoint pipeline with angles measured in the image plane.
    Planar,
    /// 3D lifting pipeline with angles measured in space.
    Spatial,
}

/// The injected upstream collaborator.
pub trait PoseEstimator {
    /// Which pipeline this estimator runs. Callers use it to label results
    /// and to decide whether the lifted [`Pose3d`] carries depth.
    fn kind(&self) -> EstimatorKind;

    /// Run pose estimation over a clip and derive angles and events.
    fn estimate(&self, video: &VideoClip, bboxes: &[BoundingBox]) -> Result<Estimation>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnalysisConfig;
    use crate::metrics::report::analyze;
    use crate::core::types::Recording;

    /// Deterministic stand-in for the neural pipeline.
    struct SyntheticEstimator;

    impl PoseEstimator for SyntheticEstimator {
        fn kind(&self) -> EstimatorKind {
            EstimatorKind::Planar
        }

        fn estimate(&self, video: &VideoClip, _bboxes: &[BoundingBox]) -> Result<Estimation> {
            let n = video.frame_count;
            let angle = |i: usize| {
                30.0 + 25.0 * (2.0 * std::f64::consts::PI * i as f64 / 50.0).sin()
            };
            let right: Vec<f64> = (0..n).map(angle).collect();
            let left = right.clone();
            Ok(Estimation {
                pose: Vec::new(),
                angles: AngleSignal::new(right, left)?,
                events: GaitEvents {
                    right_strike: (0..n).step_by(50).collect(),
                    left_strike: (25..n).step_by(50).collect(),
                    right_off: (28..n).step_by(50).collect(),
                    left_off: (3..n).step_by(50).collect(),
                },
            })
        }
    }

    #[test]
    fn test_estimator_feeds_analysis() {
        let clip = VideoClip {
            frame_count: 300,
            fps: 50.0,
        };
        let estimator = SyntheticEstimator;
        assert_eq!(estimator.kind(), EstimatorKind::Planar);
        let estimation = estimator.estimate(&clip, &[]).unwrap();
        let recording = Recording {
            angles: estimation.angles,
            events: estimation.events,
        };
        let report = analyze(&recording, &AnalysisConfig::default()).unwrap();
        assert_eq!(report.rows.len(), 7);
        assert_eq!(report.right_curve.len(), 101);
    }
}
