use std::sync::{Arc, RwLock};
use std::time::Duration;

use hostwatch::application::services::monitor::{
    MonitoringSession, SharedThresholds, tick_shared,
};
use hostwatch::domain::ports::sampler::SamplerError;
use hostwatch::domain::value_objects::thresholds::ThresholdSet;

use crate::common::{ReplaySampler, TrackingNotifier, load_samples, make_sample};

#[test]
fn replayed_history_and_alerts_reach_notifier() {
    let notifier = TrackingNotifier::default();
    let mut session = MonitoringSession::new(
        ReplaySampler::new(load_samples("samples_spike.json")),
        Box::new(notifier.clone()),
        60,
    );
    let thresholds = ThresholdSet::default();

    for _ in 0..4 {
        session.tick(&thresholds, Duration::ZERO).expect("tick");
    }

    assert_eq!(session.history().len(), 4);
    assert_eq!(session.alert_count(), 5);
    assert_eq!(notifier.received(), session.recent_alerts(10));

    let stats = session.stats().expect("stats");
    assert_eq!(stats.span_secs, 15);
    assert!((stats.cpu.max - 90.0).abs() < f64::EPSILON);
    assert_eq!(stats.network_delta.bytes_sent, 3_145_728);
}

#[test]
fn capacity_five_keeps_last_five_of_seven() {
    let samples = (1..=7).map(|n| make_sample(n, f64::from(n), 0.0, 0.0)).collect();
    let mut session =
        MonitoringSession::new(ReplaySampler::new(samples), Box::new(TrackingNotifier::default()), 5);

    for _ in 0..7 {
        session
            .tick(&ThresholdSet::default(), Duration::ZERO)
            .expect("tick");
    }

    let cpu: Vec<f64> = session.history().all().iter().map(|s| s.cpu_percent).collect();
    assert_eq!(cpu, vec![3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn unavailable_sample_skips_tick_then_recovers() {
    let sampler = ReplaySampler::scripted(vec![
        Err(SamplerError::Unavailable("no disk mounted at /srv".into())),
        Ok(make_sample(1, 95.0, 0.0, 0.0)),
    ]);
    let notifier = TrackingNotifier::default();
    let mut session = MonitoringSession::new(sampler, Box::new(notifier.clone()), 10);
    let thresholds = ThresholdSet::default();

    assert!(session.tick(&thresholds, Duration::ZERO).is_err());
    assert!(session.history().is_empty());
    assert!(notifier.received().is_empty());

    session.tick(&thresholds, Duration::ZERO).expect("second tick");
    assert_eq!(session.history().len(), 1);
    assert_eq!(notifier.received().len(), 1);
}

#[test]
fn clear_resets_history_and_alerts_but_not_thresholds() {
    let mut session = MonitoringSession::new(
        ReplaySampler::new(load_samples("samples_spike.json")),
        Box::new(TrackingNotifier::default()),
        60,
    );
    let thresholds = ThresholdSet {
        cpu_warning: 10.0,
        ..ThresholdSet::default()
    };
    let before = thresholds.clone();
    for _ in 0..4 {
        session.tick(&thresholds, Duration::ZERO).expect("tick");
    }

    session.clear();

    assert!(session.history().all().is_empty());
    assert!(session.recent_alerts(10).is_empty());
    assert!(session.stats().is_none());
    assert_eq!(thresholds, before);
}

#[test]
fn shared_session_sees_threshold_change_between_ticks() {
    let samples = vec![make_sample(0, 60.0, 0.0, 0.0), make_sample(1, 60.0, 0.0, 0.0)];
    let notifier = TrackingNotifier::default();
    let session = MonitoringSession::new(ReplaySampler::new(samples), Box::new(notifier.clone()), 10)
        .into_shared();
    let thresholds: SharedThresholds = Arc::new(RwLock::new(ThresholdSet::default()));

    let first = tick_shared(&session, &thresholds, Duration::ZERO).expect("first");
    assert!(first.alerts.is_empty());

    thresholds.write().expect("write").cpu_critical = 60.0;
    let second = tick_shared(&session, &thresholds, Duration::ZERO).expect("second");
    assert_eq!(second.alerts.len(), 1);
    assert!((second.alerts[0].threshold - 60.0).abs() < f64::EPSILON);
    assert_eq!(notifier.received().len(), 1);
}

#[test]
fn concurrent_ticks_are_serialized() {
    let samples = (0..40).map(|n| make_sample(n, 95.0, 0.0, 0.0)).collect();
    let session = MonitoringSession::new(
        ReplaySampler::new(samples),
        Box::new(TrackingNotifier::default()),
        100,
    )
    .into_shared();
    let thresholds: SharedThresholds = Arc::new(RwLock::new(ThresholdSet::default()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let (session, thresholds) = (Arc::clone(&session), Arc::clone(&thresholds));
            std::thread::spawn(move || {
                for _ in 0..10 {
                    tick_shared(&session, &thresholds, Duration::ZERO).expect("tick");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("join");
    }

    let guard = session.lock().expect("lock");
    assert_eq!(guard.history().len(), 40);
    assert_eq!(guard.alert_count(), 40);
}
