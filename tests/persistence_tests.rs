// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persist/restore/reset tests against the in-memory store.

mod common;

use common::{
    cycling_form, running_form, test_controller, test_controller_offline, RecordingRenderer,
};
use workout_tracker::services::WorkoutController;
use workout_tracker::storage::{keys, KeyValueStore, MemoryStore};
use workout_tracker::StorageError;

#[test]
fn test_restore_after_persist_round_trip() {
    let (mut controller, storage) = test_controller();
    controller
        .submit_new_workout(&running_form("5", "25", "180"))
        .unwrap();
    controller
        .submit_new_workout(&cycling_form("20", "60", "-50"))
        .unwrap();
    controller
        .submit_new_workout(&running_form("10.5", "52.5", "170"))
        .unwrap();
    let original = controller.workouts().to_vec();

    // A new session over the same storage
    let mut reloaded = WorkoutController::new(storage, RecordingRenderer::default());
    let restored = reloaded.restore().to_vec();

    assert_eq!(restored.len(), original.len());
    for (a, b) in original.iter().zip(&restored) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.created_at(), b.created_at());
        assert_eq!(a.metric(), b.metric());
        assert_eq!(a.description(), b.description());
    }
    assert_eq!(restored, original);
}

#[test]
fn test_stored_format_is_flat_records() {
    let (mut controller, storage) = test_controller();
    let workout = controller
        .submit_new_workout(&running_form("5", "25", "180"))
        .unwrap();

    let json = storage.get(keys::WORKOUTS).unwrap().expect("persisted");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let records = value.as_array().expect("array of records");
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record["id"], workout.id());
    assert_eq!(record["kind"], "running");
    assert_eq!(record["coordinates"], serde_json::json!([40.0, -73.0]));
    assert_eq!(record["distanceKm"], 5.0);
    assert_eq!(record["durationMin"], 25.0);
    assert_eq!(record["cadenceSpm"], 180.0);
    // Derived values are never stored
    assert!(record.get("pace").is_none());
    assert!(record.get("description").is_none());
}

#[test]
fn test_restore_missing_key_is_empty() {
    let (mut controller, _) = test_controller();
    assert!(controller.restore().is_empty());
}

#[test]
fn test_restore_malformed_value_is_empty() {
    let storage = MemoryStore::new();
    storage.set(keys::WORKOUTS, "{not json").unwrap();

    let mut controller = WorkoutController::new(storage, RecordingRenderer::default());
    assert!(controller.restore().is_empty());
}

#[test]
fn test_reset_all_then_restore_is_empty() {
    let (mut controller, storage) = test_controller();
    controller
        .submit_new_workout(&running_form("5", "25", "180"))
        .unwrap();

    controller.reset_all().unwrap();
    assert!(controller.workouts().is_empty());
    assert_eq!(storage.get(keys::WORKOUTS).unwrap(), None);
    assert!(controller.restore().is_empty());
}

#[test]
fn test_start_lists_restored_workouts_and_defers_markers() {
    let (mut controller, storage) = test_controller();
    let a = controller
        .submit_new_workout(&running_form("5", "25", "180"))
        .unwrap();
    let b = controller
        .submit_new_workout(&cycling_form("20", "60", "10"))
        .unwrap();

    let mut session = WorkoutController::start(storage, RecordingRenderer::default());
    assert_eq!(session.renderer().list_entries(), vec![a.id(), b.id()]);
    assert_eq!(session.renderer().markers(), 0);

    session.map_ready();
    assert_eq!(session.renderer().markers(), 2);
}

#[test]
fn test_storage_unavailable_keeps_workout_in_memory() {
    let mut controller = test_controller_offline();

    let workout = controller
        .submit_new_workout(&running_form("5", "25", "180"))
        .expect("storage failure must not fail the submission");

    assert_eq!(controller.workouts().len(), 1);
    assert_eq!(controller.find_by_id(workout.id()), Ok(&workout));
    assert!(matches!(
        controller.persist(),
        Err(StorageError::Unavailable(_))
    ));
    // Nothing readable means an empty history
    assert!(controller.restore().is_empty());
}

#[test]
fn test_storage_full_keeps_workout_in_memory() {
    let storage = MemoryStore::with_quota(64);
    let mut controller = WorkoutController::new(storage.clone(), RecordingRenderer::default());

    controller
        .submit_new_workout(&cycling_form("20", "60", "10"))
        .unwrap();

    assert_eq!(controller.workouts().len(), 1);
    assert!(matches!(
        controller.persist(),
        Err(StorageError::QuotaExceeded { quota: 64, .. })
    ));
    assert_eq!(storage.get(keys::WORKOUTS).unwrap(), None);
}

#[test]
fn test_reset_all_clears_memory_even_when_storage_fails() {
    let mut controller = test_controller_offline();
    controller
        .submit_new_workout(&running_form("5", "25", "180"))
        .unwrap();

    assert!(controller.reset_all().is_err());
    assert!(controller.workouts().is_empty());
}

#[test]
fn test_restore_skips_records_the_form_would_reject() {
    let storage = MemoryStore::new();
    storage
        .set(
            keys::WORKOUTS,
            r#"[
                {"id":"ok","createdAt":"2024-05-01T10:00:00Z","kind":"running","coordinates":[40,-73],"distanceKm":5,"durationMin":25,"cadenceSpm":180},
                {"id":"no-cadence","createdAt":"2024-05-02T10:00:00Z","kind":"running","coordinates":[40,-73],"distanceKm":5,"durationMin":25,"cadenceSpm":0},
                {"id":"descent","createdAt":"2024-05-03T10:00:00Z","kind":"cycling","coordinates":[40,-73],"distanceKm":20,"durationMin":60,"elevationGainM":-50}
            ]"#,
        )
        .unwrap();

    let mut controller = WorkoutController::new(storage, RecordingRenderer::default());
    let ids: Vec<&str> = controller.restore().iter().map(|w| w.id()).collect();
    assert_eq!(ids, vec!["ok", "descent"]);
}
