use hostwatch::application::services::alert_engine::AlertEngine;
use hostwatch::domain::entities::sample::Sample;
use hostwatch::domain::value_objects::metric::Metric;
use hostwatch::domain::value_objects::severity::Severity;
use hostwatch::domain::value_objects::thresholds::ThresholdSet;
use hostwatch::infrastructure::persistence::ALERT_LOG_CAPACITY;

use crate::common::{fixture_text, load_samples, make_sample};

fn kinds(engine_alerts: &[hostwatch::domain::entities::alert::Alert]) -> Vec<(Metric, Severity)> {
    engine_alerts.iter().map(|a| (a.metric, a.severity)).collect()
}

#[test]
fn fixture_spike_produces_expected_alerts() {
    let mut engine = AlertEngine::default();
    let thresholds = ThresholdSet::default();
    let per_sample: Vec<Vec<(Metric, Severity)>> = load_samples("samples_spike.json")
        .iter()
        .map(|s| kinds(&engine.evaluate(s, &thresholds)))
        .collect();

    assert_eq!(
        per_sample,
        vec![
            vec![],
            vec![(Metric::Cpu, Severity::Warning)],
            vec![
                (Metric::Cpu, Severity::Critical),
                (Metric::Memory, Severity::Warning),
                (Metric::Disk, Severity::Warning),
            ],
            vec![(Metric::Memory, Severity::Critical)],
        ]
    );
    assert_eq!(engine.log().len(), 5);
}

#[test]
fn partial_sample_treats_missing_fields_as_zero() {
    let sample: Sample =
        serde_json::from_str(&fixture_text("sample_partial.json")).expect("parse partial");
    let mut engine = AlertEngine::default();
    let alerts = engine.evaluate(&sample, &ThresholdSet::default());
    assert_eq!(kinds(&alerts), vec![(Metric::Cpu, Severity::Critical)]);
}

#[test]
fn cpu_scenario_boundaries() {
    let thresholds = ThresholdSet::default();
    let mut engine = AlertEngine::default();

    let at_warning = engine.evaluate(&make_sample(0, 70.0, 0.0, 0.0), &thresholds);
    assert_eq!(at_warning.len(), 1);
    assert_eq!(at_warning[0].severity, Severity::Warning);
    assert!(at_warning[0].message.contains("high: 70.0%"));

    let at_critical = engine.evaluate(&make_sample(1, 90.0, 0.0, 0.0), &thresholds);
    assert_eq!(kinds(&at_critical), vec![(Metric::Cpu, Severity::Critical)]);

    let below = engine.evaluate(&make_sample(2, 69.9, 0.0, 0.0), &thresholds);
    assert!(below.is_empty());
}

#[test]
fn severity_is_exclusive_per_metric_across_a_sweep() {
    let thresholds = ThresholdSet::default();
    let mut engine = AlertEngine::default();

    for step in 0..=1000u32 {
        let value = f64::from(step) / 10.0;
        let alerts = engine.evaluate(&make_sample(step, value, value, value), &thresholds);

        for metric in Metric::ALL {
            let limits = thresholds.for_metric(metric);
            let for_metric: Vec<Severity> = alerts
                .iter()
                .filter(|a| a.metric == metric)
                .map(|a| a.severity)
                .collect();

            let expected = if value >= limits.critical {
                vec![Severity::Critical]
            } else if value >= limits.warning {
                vec![Severity::Warning]
            } else {
                vec![]
            };
            assert_eq!(for_metric, expected, "{metric} at {value}");
        }
    }
    assert_eq!(engine.log().len(), ALERT_LOG_CAPACITY);
}

#[test]
fn recent_ten_after_fifteen_alerts() {
    let thresholds = ThresholdSet::default();
    let mut engine = AlertEngine::default();
    for n in 1..=15 {
        engine.evaluate(&make_sample(n, 90.0 + f64::from(n) / 10.0, 0.0, 0.0), &thresholds);
    }

    let recent = engine.recent(10);
    assert_eq!(recent.len(), 10);
    let values: Vec<f64> = recent.iter().map(|a| a.value).collect();
    let expected: Vec<f64> = (6..=15u32).map(|n| 90.0 + f64::from(n) / 10.0).collect();
    assert_eq!(values, expected);
}

#[test]
fn inverted_thresholds_keep_critical_first() {
    let thresholds = ThresholdSet {
        cpu_warning: 95.0,
        cpu_critical: 80.0,
        ..ThresholdSet::default()
    };
    let mut engine = AlertEngine::default();

    let between = engine.evaluate(&make_sample(0, 85.0, 0.0, 0.0), &thresholds);
    assert_eq!(kinds(&between), vec![(Metric::Cpu, Severity::Critical)]);

    let below = engine.evaluate(&make_sample(1, 79.0, 0.0, 0.0), &thresholds);
    assert!(below.is_empty());
}
