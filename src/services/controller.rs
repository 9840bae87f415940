// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout store and controller.
//!
//! Handles the core workflow:
//! 1. Validate raw form input
//! 2. Build the workout and derive its metric
//! 3. Append it to the in-memory store
//! 4. Mirror the whole store to durable storage
//! 5. Hand it to the renderer (map marker + list entry)
//!
//! On startup the stored history is read back, re-derived, and replayed
//! through the same renderer.

use crate::error::{NotFound, StorageError, ValidationError};
use crate::models::{derive, Coordinates, Workout, WorkoutRecord};
use crate::services::form::WorkoutForm;
use crate::services::render::WorkoutRenderer;
use crate::storage::{keys, KeyValueStore};
use std::collections::HashSet;

/// Owns the ordered workout list and mediates between input, storage and
/// rendering.
pub struct WorkoutController<S, R> {
    storage: S,
    renderer: R,
    workouts: Vec<Workout>,
    map_ready: bool,
}

impl<S: KeyValueStore, R: WorkoutRenderer> WorkoutController<S, R> {
    /// Create a controller with an empty store.
    pub fn new(storage: S, renderer: R) -> Self {
        Self {
            storage,
            renderer,
            workouts: Vec::new(),
            map_ready: false,
        }
    }

    /// Create a controller, restore stored history and list it.
    ///
    /// Markers are drawn later, once the map is ready.
    pub fn start(storage: S, renderer: R) -> Self {
        let mut controller = Self::new(storage, renderer);
        controller.restore();
        for workout in &controller.workouts {
            controller.renderer.render_list_entry(workout);
        }
        tracing::info!(
            count = controller.workouts.len(),
            "Workout history restored"
        );
        controller
    }

    /// Workouts in insertion order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_map_ready(&self) -> bool {
        self.map_ready
    }

    /// Validate the form, create the workout, append it and persist.
    ///
    /// On a validation error nothing is mutated. A storage failure is
    /// logged and does not fail the submission: the workout stays in
    /// memory for the rest of the session.
    pub fn submit_new_workout(&mut self, form: &WorkoutForm) -> Result<Workout, ValidationError> {
        let record = form.validate().inspect_err(|e| {
            tracing::debug!(error = %e, kind = %form.kind, "Rejected workout input");
        })?;

        let workout = derive(record);
        tracing::info!(
            id = workout.id(),
            kind = %workout.kind(),
            distance_km = workout.distance_km(),
            duration_min = workout.duration_min(),
            "Workout recorded"
        );
        self.workouts.push(workout.clone());

        if let Err(e) = self.persist() {
            tracing::warn!(error = %e, "Failed to persist workouts; keeping them in memory");
        }

        Ok(workout)
    }

    /// Submit a workout and render it in the list and, once the map is
    /// ready, as a marker.
    pub fn record_workout(&mut self, form: &WorkoutForm) -> Result<Workout, ValidationError> {
        let workout = self.submit_new_workout(form)?;
        if self.map_ready {
            render_marker(&mut self.renderer, &workout);
        }
        self.renderer.render_list_entry(&workout);
        Ok(workout)
    }

    /// The map has loaded: draw a marker for every workout in the store.
    pub fn map_ready(&mut self) {
        self.map_ready = true;
        for workout in &self.workouts {
            render_marker(&mut self.renderer, workout);
        }
        tracing::debug!(count = self.workouts.len(), "Markers rendered");
    }

    /// The map has loaded around `position`: draw every marker, then center
    /// the map on `position`.
    pub fn map_ready_at(&mut self, position: Coordinates) {
        self.map_ready();
        self.renderer.focus_on(position);
    }

    /// Find a workout by id.
    pub fn find_by_id(&self, id: &str) -> Result<&Workout, NotFound> {
        self.workouts
            .iter()
            .find(|w| w.id() == id)
            .ok_or_else(|| NotFound(id.to_string()))
    }

    /// Center the map on the selected workout.
    ///
    /// Returns `Ok(false)` without doing anything while the map is not ready.
    pub fn select_workout(&mut self, id: &str) -> Result<bool, NotFound> {
        if !self.map_ready {
            return Ok(false);
        }
        let coordinates = self.find_by_id(id)?.coordinates();
        self.renderer.focus_on(coordinates);
        Ok(true)
    }

    /// Serialize the whole store under the workouts key, overwriting it.
    pub fn persist(&self) -> Result<(), StorageError> {
        let records: Vec<&WorkoutRecord> = self.workouts.iter().map(Workout::record).collect();
        let json = serde_json::to_string(&records)?;
        self.storage.set(keys::WORKOUTS, &json)?;
        tracing::debug!(
            count = records.len(),
            bytes = json.len(),
            "Workouts persisted"
        );
        Ok(())
    }

    /// Replace the in-memory store with the stored history.
    ///
    /// Missing or malformed data is treated as an empty history. Records
    /// that cannot be decoded, break the form's input rules, or repeat an
    /// earlier id are skipped. Every kept record is re-derived.
    pub fn restore(&mut self) -> &[Workout] {
        self.workouts = match self.storage.get(keys::WORKOUTS) {
            Ok(Some(json)) => decode_workouts(&json),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored workouts");
                Vec::new()
            }
        };
        &self.workouts
    }

    /// Clear the in-memory store and the stored history.
    ///
    /// The in-memory store is cleared even if storage cannot be reached.
    pub fn reset_all(&mut self) -> Result<(), StorageError> {
        let count = self.workouts.len();
        self.workouts.clear();
        self.storage.remove(keys::WORKOUTS)?;
        tracing::info!(count, "All workouts cleared");
        Ok(())
    }
}

fn render_marker<R: WorkoutRenderer>(renderer: &mut R, workout: &Workout) {
    renderer.render_marker(
        workout.coordinates(),
        workout.kind(),
        &workout.marker_label(),
    );
}

/// Decode a stored workouts array, skipping records that could not have
/// been submitted.
fn decode_workouts(json: &str) -> Vec<Workout> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(json) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(error = %e, "Stored workouts are malformed; starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut workouts = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let record: WorkoutRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping undecodable workout record");
                continue;
            }
        };
        if !record.has_valid_input() {
            tracing::warn!(index, id = %record.id, "Skipping workout with invalid input");
            continue;
        }
        if !seen.insert(record.id.clone()) {
            tracing::warn!(index, id = %record.id, "Skipping duplicate workout id");
            continue;
        }
        workouts.push(derive(record));
    }
    workouts
}
