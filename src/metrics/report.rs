//! Metric report assembly.
//!
//! Orchestrates conditioning, cycle normalization, event alignment and
//! outlier filtering into the fixed-order metric table and the mean stride
//! curves the front-end displays. Pure functions of their inputs; repeated
//! evaluation of the same recording gives identical output.

use crate::core::config::AnalysisConfig;
use crate::core::error::{GaitError, Result};
use crate::core::types::{AngleSignal, GaitEvents, GaitReport, MetricRow, Recording, Side};
use crate::cycles::align::{align, step_times, AlignMode};
use crate::cycles::normalize::{normalize_phases, NormalizedCycles};
use crate::signal::filter::condition_angles;

use super::outliers::filter_outliers;
use super::{mean, sample_std};

/// Points of the normalized cycle covering the loading response (first 30%).
const LOADING_RESPONSE_POINTS: usize = 31;

/// Compute the full metric table for one recording.
///
/// `angles` is expected to be conditioned already (see
/// [`crate::signal::condition_angles`]); [`analyze`] composes both steps.
///
/// Rows appear in fixed order: range of motion, the two peak metrics, then
/// the four timing metrics. A side without usable data renders "-" cells
/// instead of failing; only a recording with no events at all is an error.
pub fn compute_metrics(
    angles: &AngleSignal,
    events: &GaitEvents,
    config: &AnalysisConfig,
) -> Result<Vec<MetricRow>> {
    if events.all_empty() {
        return Err(GaitError::misaligned_sequences(
            "no gait events detected in any stream",
        ));
    }

    let right = normalize_phases(&angles.right, &events.right_strike);
    let left = normalize_phases(&angles.left, &events.left_strike);
    let ms = config.frame_ms();

    let range_of_motion =
        |t: &NormalizedCycles| t.map_cycles(|c| peak(c) - trough(c));
    let max_peak = |t: &NormalizedCycles| t.map_cycles(|c| peak(c));
    let loading_peak =
        |t: &NormalizedCycles| t.map_cycles(|c| peak(&c[..LOADING_RESPONSE_POINTS]));

    let step_right = scale(step_times(&events.right_strike), ms);
    let step_left = scale(step_times(&events.left_strike), ms);

    let stance_tol = config.stance_tolerance;
    let ds_tol = config.double_support_tolerance;

    // Stance: strike to ipsilateral liftoff. Swing: liftoff to the next
    // ipsilateral strike. Double support: one side's strike against the
    // contralateral liftoff, which follows shortly in alternating gait.
    let stance_right = scale(timing(&events.right_strike, &events.right_off, stance_tol)?, ms);
    let stance_left = scale(timing(&events.left_strike, &events.left_off, stance_tol)?, ms);
    let swing_right = scale(timing(&events.right_off, &events.right_strike, stance_tol)?, ms);
    let swing_left = scale(timing(&events.left_off, &events.left_strike, stance_tol)?, ms);
    let ds_right = scale(timing(&events.right_strike, &events.left_off, ds_tol)?, ms);
    let ds_left = scale(timing(&events.left_strike, &events.right_off, ds_tol)?, ms);

    Ok(vec![
        row("Range of motion", &range_of_motion(&right), &range_of_motion(&left), "°", config),
        row("Max peak", &max_peak(&right), &max_peak(&left), "°", config),
        row(
            "Max peak (loading response)",
            &loading_peak(&right),
            &loading_peak(&left),
            "°",
            config,
        ),
        row("Total step time", &step_right, &step_left, "ms", config),
        row("Stance time", &stance_right, &stance_left, "ms", config),
        row("Swing time", &swing_right, &swing_left, "ms", config),
        row("Double support time", &ds_right, &ds_left, "ms", config),
    ])
}

/// Mean stride shape per side: the element-wise average over all normalized
/// cycles, as two 101-point curves (NaN-filled when a side has no cycles).
pub fn avg_gait_phase(angles: &AngleSignal, events: &GaitEvents) -> (Vec<f64>, Vec<f64>) {
    let right = normalize_phases(angles.side(Side::Right), events.strikes(Side::Right));
    let left = normalize_phases(angles.side(Side::Left), events.strikes(Side::Left));
    (right.mean_curve(), left.mean_curve())
}

/// Condition a recording and compute its full report.
pub fn analyze(recording: &Recording, config: &AnalysisConfig) -> Result<GaitReport> {
    let conditioned = condition_angles(&recording.angles, config)?;
    let rows = compute_metrics(&conditioned, &recording.events, config)?;
    let (right_curve, left_curve) = avg_gait_phase(&conditioned, &recording.events);
    Ok(GaitReport {
        rows,
        right_curve,
        left_curve,
    })
}

/// Format the right-vs-left symmetry ratio of two sample means.
///
/// The ratio is `100 * right / left - 100` as a percentage with two
/// decimals; values above parity carry an explicit `+`. Means that are not
/// finite (empty sample) or a zero left mean render "-".
pub fn ratio_str(right_mean: f64, left_mean: f64) -> String {
    if !right_mean.is_finite() || !left_mean.is_finite() || left_mean == 0.0 {
        return "-".to_string();
    }
    let pct = 100.0 * right_mean / left_mean - 100.0;
    if pct > 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

/// Format a sample as "mean ± std unit"; an empty sample renders "-".
pub fn fmt_mean_std(values: &[f64], unit: &str) -> String {
    if values.is_empty() {
        return "-".to_string();
    }
    format!("{:.1} ± {:.1} {}", mean(values), sample_std(values), unit)
}

/// Build one metric row: outlier-filter each side, then format.
fn row(
    name: &str,
    right_values: &[f64],
    left_values: &[f64],
    unit: &str,
    config: &AnalysisConfig,
) -> MetricRow {
    let right = filter_outliers(right_values, config.outlier_sigma);
    let left = filter_outliers(left_values, config.outlier_sigma);
    MetricRow {
        name: name.to_string(),
        right: fmt_mean_std(&right, unit),
        left: fmt_mean_std(&left, unit),
        ratio: ratio_str(mean(&right), mean(&left)),
    }
}

/// Aligned timing distribution in frames; empty when neither stream can
/// anchor a match.
fn timing(events_a: &[usize], events_b: &[usize], tolerance: f64) -> Result<Vec<f64>> {
    if events_a.is_empty() && events_b.is_empty() {
        return Ok(Vec::new());
    }
    align(events_a, events_b, AlignMode::Diff, tolerance, true)
}

fn scale(values: Vec<f64>, factor: f64) -> Vec<f64> {
    values.into_iter().map(|v| v * factor).collect()
}

fn peak(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn trough(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_sign_convention() {
        assert_eq!(ratio_str(12.0, 10.0), "+20.00%");
        assert_eq!(ratio_str(8.0, 10.0), "-20.00%");
        assert_eq!(ratio_str(10.0, 10.0), "0.00%");
    }

    #[test]
    fn test_ratio_degenerate() {
        assert_eq!(ratio_str(f64::NAN, 10.0), "-");
        assert_eq!(ratio_str(10.0, f64::NAN), "-");
        assert_eq!(ratio_str(10.0, 0.0), "-");
    }

    #[test]
    fn test_fmt_mean_std() {
        assert_eq!(fmt_mean_std(&[], "ms"), "-");
        assert_eq!(fmt_mean_std(&[600.0], "ms"), "600.0 ± 0.0 ms");
        assert_eq!(fmt_mean_std(&[10.0, 14.0], "°"), "12.0 ± 2.8 °");
    }

    #[test]
    fn test_all_empty_events_is_error() {
        let angles = AngleSignal::new(vec![0.0; 100], vec![0.0; 100]).unwrap();
        let result = compute_metrics(&angles, &GaitEvents::default(), &AnalysisConfig::default());
        assert!(matches!(
            result,
            Err(GaitError::MisalignedSequences { .. })
        ));
    }

    #[test]
    fn test_fixed_row_order() {
        let angles = AngleSignal::new(vec![1.0; 200], vec![1.0; 200]).unwrap();
        let events = GaitEvents {
            right_strike: vec![0, 50, 100, 150],
            left_strike: vec![25, 75, 125, 175],
            right_off: vec![28, 78, 128, 178],
            left_off: vec![53, 103, 153],
        };
        let rows = compute_metrics(&angles, &events, &AnalysisConfig::default()).unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Range of motion",
                "Max peak",
                "Max peak (loading response)",
                "Total step time",
                "Stance time",
                "Swing time",
                "Double support time",
            ]
        );
    }
}
