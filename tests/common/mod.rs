// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use workout_tracker::models::{Coordinates, Workout, WorkoutKind};
use workout_tracker::services::{WorkoutController, WorkoutForm, WorkoutRenderer};
use workout_tracker::storage::MemoryStore;

/// One call received by the recording renderer.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Marker {
        coordinates: Coordinates,
        kind: WorkoutKind,
        label: String,
    },
    ListEntry {
        id: String,
    },
    Focus {
        coordinates: Coordinates,
    },
}

/// Renderer that records every call for later assertions.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Rendered>,
}

#[allow(dead_code)]
impl RecordingRenderer {
    pub fn markers(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Rendered::Marker { .. }))
            .count()
    }

    pub fn list_entries(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Rendered::ListEntry { id } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl WorkoutRenderer for RecordingRenderer {
    fn render_marker(&mut self, coordinates: Coordinates, kind: WorkoutKind, label: &str) {
        self.calls.push(Rendered::Marker {
            coordinates,
            kind,
            label: label.to_string(),
        });
    }

    fn render_list_entry(&mut self, workout: &Workout) {
        self.calls.push(Rendered::ListEntry {
            id: workout.id().to_string(),
        });
    }

    fn focus_on(&mut self, coordinates: Coordinates) {
        self.calls.push(Rendered::Focus { coordinates });
    }
}

pub type TestController = WorkoutController<MemoryStore, RecordingRenderer>;

/// Controller over a fresh in-memory store. The returned store handle shares
/// entries with the controller's.
#[allow(dead_code)]
pub fn test_controller() -> (TestController, MemoryStore) {
    let storage = MemoryStore::new();
    let controller = WorkoutController::new(storage.clone(), RecordingRenderer::default());
    (controller, storage)
}

/// Controller whose storage is always unavailable.
#[allow(dead_code)]
pub fn test_controller_offline() -> TestController {
    WorkoutController::new(MemoryStore::unavailable(), RecordingRenderer::default())
}

#[allow(dead_code)]
pub fn running_form(distance: &str, duration: &str, cadence: &str) -> WorkoutForm {
    WorkoutForm::new(
        WorkoutKind::Running,
        Coordinates::new(40.0, -73.0),
        distance,
        duration,
        cadence,
    )
}

#[allow(dead_code)]
pub fn cycling_form(distance: &str, duration: &str, elevation: &str) -> WorkoutForm {
    WorkoutForm::new(
        WorkoutKind::Cycling,
        Coordinates::new(51.5, -0.12),
        distance,
        duration,
        elevation,
    )
}
