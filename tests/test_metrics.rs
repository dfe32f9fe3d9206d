//! Integration tests for the metric report pipeline.

use gaitcore::core::types::{AngleSignal, GaitEvents, Recording};
use gaitcore::core::{AnalysisConfig, GaitError};
use gaitcore::cycles::normalize::normalize_phases;
use gaitcore::metrics::outliers::filter_outliers;
use gaitcore::metrics::report::{analyze, avg_gait_phase, compute_metrics, ratio_str};
use gaitcore::metrics::analyze_batch;

fn sinusoid(n: usize, period: f64, phase_frames: f64) -> Vec<f64> {
    (0..n)
        .map(|i| {
            30.0 + 25.0
                * (2.0 * std::f64::consts::PI * (i as f64 - phase_frames) / period).sin()
        })
        .collect()
}

/// Alternating gait at 50 Hz: 50-frame cycles, 28-frame stance, sides offset
/// by half a cycle.
fn clean_recording() -> Recording {
    let n = 200;
    Recording {
        angles: AngleSignal::new(sinusoid(n, 50.0, 0.0), sinusoid(n, 50.0, 25.0)).unwrap(),
        events: GaitEvents {
            right_strike: vec![0, 50, 100, 150, 200],
            left_strike: vec![25, 75, 125, 175],
            right_off: vec![28, 78, 128, 178],
            left_off: vec![53, 103, 153],
        },
    }
}

#[test]
fn test_report_row_order_and_timing_values() {
    let recording = clean_recording();
    let config = AnalysisConfig::default();
    let rows = compute_metrics(&recording.angles, &recording.events, &config).unwrap();

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

    // 50-frame cycles at 50 Hz: 1000 ms steps, 560 ms stance, 440 ms swing,
    // 60 ms double support, identical on both sides.
    let by_name = |name: &str| rows.iter().find(|r| r.name == name).unwrap();
    let step = by_name("Total step time");
    assert_eq!(step.right, "1000.0 ± 0.0 ms");
    assert_eq!(step.ratio, "0.00%");

    let stance = by_name("Stance time");
    assert_eq!(stance.right, "560.0 ± 0.0 ms");
    assert_eq!(stance.left, "560.0 ± 0.0 ms");
    assert_eq!(stance.ratio, "0.00%");

    let swing = by_name("Swing time");
    assert_eq!(swing.right, "440.0 ± 0.0 ms");

    let ds = by_name("Double support time");
    assert_eq!(ds.right, "60.0 ± 0.0 ms");
    assert_eq!(ds.left, "60.0 ± 0.0 ms");
}

#[test]
fn test_shape_metrics_symmetric_for_mirrored_signal() {
    // Left is the right signal shifted by exactly half a cycle, so the
    // per-cycle samples are identical and every ratio is parity.
    let recording = clean_recording();
    let rows = compute_metrics(
        &recording.angles,
        &recording.events,
        &AnalysisConfig::default(),
    )
    .unwrap();
    for name in ["Range of motion", "Max peak", "Max peak (loading response)"] {
        let row = rows.iter().find(|r| r.name == name).unwrap();
        assert_eq!(row.ratio, "0.00%", "{} not symmetric", name);
        assert_eq!(row.right, row.left);
    }
}

#[test]
fn test_avg_gait_phase_scenario() {
    // 300 frames, 60-frame cycles, sides offset by half a cycle.
    let n = 300;
    let angles = AngleSignal::new(sinusoid(n, 60.0, 0.0), sinusoid(n, 60.0, 30.0)).unwrap();
    let events = GaitEvents {
        right_strike: vec![0, 60, 120, 180, 240],
        left_strike: vec![30, 90, 150, 210, 270],
        ..GaitEvents::default()
    };

    assert_eq!(normalize_phases(&angles.right, &events.right_strike).len(), 4);
    assert_eq!(normalize_phases(&angles.left, &events.left_strike).len(), 4);

    let (right_curve, left_curve) = avg_gait_phase(&angles, &events);
    assert_eq!(right_curve.len(), 101);
    assert_eq!(left_curve.len(), 101);

    // The sinusoid peaks a quarter of the way into each cycle.
    let argmax = |curve: &[f64]| {
        curve
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap()
    };
    assert!((24..=26).contains(&argmax(&right_curve)));
    assert!((24..=26).contains(&argmax(&left_curve)));
}

#[test]
fn test_phase_times_positive_when_off_stream_leads() {
    // Recording starts mid-swing: every liftoff is detected before the
    // first strike of its stride, so the previous strike is nearer to each
    // liftoff than the next one. Stance and swing must still come out as
    // the forward phase durations, not negated ones.
    let n = 200;
    let recording = Recording {
        angles: AngleSignal::new(sinusoid(n, 50.0, 0.0), sinusoid(n, 50.0, 25.0)).unwrap(),
        events: GaitEvents {
            right_strike: vec![30, 80, 130, 180],
            right_off: vec![10, 60, 110, 160],
            left_strike: vec![5, 55, 105, 155],
            left_off: vec![35, 85, 135, 185],
        },
    };
    let rows = compute_metrics(
        &recording.angles,
        &recording.events,
        &AnalysisConfig::default(),
    )
    .unwrap();

    // 30-frame stance, 20-frame swing at 50 Hz.
    let by_name = |name: &str| rows.iter().find(|r| r.name == name).unwrap();
    assert_eq!(by_name("Stance time").right, "600.0 ± 0.0 ms");
    assert_eq!(by_name("Swing time").right, "400.0 ± 0.0 ms");
    assert_eq!(by_name("Stance time").left, "600.0 ± 0.0 ms");
}

#[test]
fn test_empty_right_strikes_do_not_fail() {
    let mut recording = clean_recording();
    recording.events.right_strike.clear();
    let rows = compute_metrics(
        &recording.angles,
        &recording.events,
        &AnalysisConfig::default(),
    )
    .unwrap();

    let rom = rows.iter().find(|r| r.name == "Range of motion").unwrap();
    assert_eq!(rom.right, "-");
    assert_ne!(rom.left, "-");
    assert_eq!(rom.ratio, "-");

    // Left-only metrics stay computable.
    let stance = rows.iter().find(|r| r.name == "Stance time").unwrap();
    assert_eq!(stance.left, "560.0 ± 0.0 ms");
}

#[test]
fn test_all_events_empty_is_insufficient() {
    let recording = clean_recording();
    let result = compute_metrics(
        &recording.angles,
        &GaitEvents::default(),
        &AnalysisConfig::default(),
    );
    assert!(matches!(result, Err(GaitError::MisalignedSequences { .. })));
}

#[test]
fn test_outlier_filter_idempotent_on_stride_sample() {
    let sample = vec![980.0, 1010.0, 995.0, 1005.0, 2600.0, 990.0, 1000.0, 1015.0];
    let once = filter_outliers(&sample, 2.0);
    let twice = filter_outliers(&once, 2.0);
    assert_eq!(once, twice);
    assert!(!once.contains(&2600.0));
}

#[test]
fn test_ratio_string_convention() {
    assert_eq!(ratio_str(12.0, 10.0), "+20.00%");
    assert_eq!(ratio_str(8.0, 10.0), "-20.00%");
}

#[test]
fn test_analyze_conditions_then_reports() {
    let recording = clean_recording();
    let report = analyze(&recording, &AnalysisConfig::default()).unwrap();
    assert_eq!(report.rows.len(), 7);
    assert_eq!(report.right_curve.len(), 101);
    assert!(report.right_curve.iter().all(|v| v.is_finite()));
}

#[test]
fn test_analyze_rejects_too_short_signal() {
    let recording = Recording {
        angles: AngleSignal::new(vec![1.0; 5], vec![1.0; 5]).unwrap(),
        events: GaitEvents {
            right_strike: vec![0, 3],
            ..GaitEvents::default()
        },
    };
    let result = analyze(&recording, &AnalysisConfig::default());
    assert!(matches!(result, Err(GaitError::InvalidSignal { .. })));
}

#[test]
fn test_batch_isolates_per_recording_failures() {
    let good = clean_recording();
    let bad = Recording {
        angles: AngleSignal::new(vec![0.0; 3], vec![0.0; 3]).unwrap(),
        events: GaitEvents {
            left_strike: vec![0, 2],
            ..GaitEvents::default()
        },
    };
    let results = analyze_batch(&[good.clone(), bad, good], &AnalysisConfig::default());
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert!(results[2].is_ok());
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let recording = clean_recording();
    let config = AnalysisConfig::default();
    let a = analyze(&recording, &config).unwrap();
    let b = analyze(&recording, &config).unwrap();
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.right_curve, b.right_curve);
}
