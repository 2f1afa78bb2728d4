use std::sync::{Arc, RwLock};
use std::time::{Duration, SystemTime};

use hostwatch::application::config::{AppConfig, ConfigWatcher};
use hostwatch::application::services::monitor::{MonitoringSession, tick_shared};
use hostwatch::domain::value_objects::thresholds::ThresholdSet;
use hostwatch::presentation::cli::commands::daemon::apply_config;

use crate::common::{ReplaySampler, TrackingNotifier, make_sample};

fn touch(path: &std::path::Path, offset_secs: u64) {
    std::fs::OpenOptions::new()
        .write(true)
        .open(path)
        .expect("open")
        .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000 + offset_secs))
        .expect("set mtime");
}

#[test]
fn edited_config_changes_thresholds_and_history_live() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    AppConfig::default().save_to(&path).expect("save");
    touch(&path, 0);
    let mut watcher = ConfigWatcher::new(&path);

    let samples = (0..6).map(|n| make_sample(n, 50.0, 0.0, 0.0)).collect();
    let session = MonitoringSession::new(
        ReplaySampler::new(samples),
        Box::new(TrackingNotifier::default()),
        60,
    )
    .into_shared();
    let thresholds = Arc::new(RwLock::new(ThresholdSet::default()));

    for _ in 0..5 {
        let outcome = tick_shared(&session, &thresholds, Duration::ZERO).expect("tick");
        assert!(outcome.alerts.is_empty());
    }

    std::fs::write(
        &path,
        "[thresholds]\ncpu_warning = 45.0\n\n[settings]\nhistory_points = 2\n",
    )
    .expect("edit");
    touch(&path, 30);

    let reloaded = watcher.poll().expect("reload");
    apply_config(&session, &thresholds, &reloaded).expect("apply");
    assert_eq!(session.lock().expect("lock").history().len(), 2);

    let outcome = tick_shared(&session, &thresholds, Duration::ZERO).expect("tick");
    assert_eq!(outcome.alerts.len(), 1);
    assert!((outcome.alerts[0].threshold - 45.0).abs() < f64::EPSILON);
}

#[test]
fn invalid_edit_keeps_previous_thresholds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    AppConfig::default().save_to(&path).expect("save");
    touch(&path, 0);
    let mut watcher = ConfigWatcher::new(&path);

    std::fs::write(&path, "[thresholds]\nmemory_warning = -5.0\n").expect("edit");
    touch(&path, 30);

    assert!(watcher.poll().is_none());
}

#[test]
fn default_file_round_trips_through_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("config.toml");
    let created = AppConfig::load_or_create(&path).expect("create");
    let text = std::fs::read_to_string(&path).expect("read");

    assert!(text.contains("[thresholds]"));
    assert!(text.contains("[settings]"));
    assert!(text.contains("[notifications]"));
    assert_eq!(AppConfig::load_from(&path).expect("reload"), created);
}
