// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rendering collaborator for the map and the workout list.

use crate::models::{Coordinates, Workout, WorkoutKind};

/// Map zoom level used when focusing on a position.
pub const DEFAULT_MAP_ZOOM: u8 = 13;

/// Draws workouts on the map and in the list.
///
/// The controller only ever pushes to the renderer; it never reads back.
pub trait WorkoutRenderer {
    /// Place a marker with an open popup at `coordinates`.
    fn render_marker(&mut self, coordinates: Coordinates, kind: WorkoutKind, label: &str);

    /// Add an entry for `workout` to the workout list.
    fn render_list_entry(&mut self, workout: &Workout);

    /// Center the map on `coordinates`.
    fn focus_on(&mut self, coordinates: Coordinates);
}

impl<T: WorkoutRenderer + ?Sized> WorkoutRenderer for &mut T {
    fn render_marker(&mut self, coordinates: Coordinates, kind: WorkoutKind, label: &str) {
        (**self).render_marker(coordinates, kind, label)
    }

    fn render_list_entry(&mut self, workout: &Workout) {
        (**self).render_list_entry(workout)
    }

    fn focus_on(&mut self, coordinates: Coordinates) {
        (**self).focus_on(coordinates)
    }
}

/// Renderer that emits structured log events instead of drawing.
///
/// Used by the headless binary.
#[derive(Debug, Clone)]
pub struct TracingRenderer {
    zoom: u8,
}

impl TracingRenderer {
    pub fn new(zoom: u8) -> Self {
        Self { zoom }
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }
}

impl Default for TracingRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_ZOOM)
    }
}

impl WorkoutRenderer for TracingRenderer {
    fn render_marker(&mut self, coordinates: Coordinates, kind: WorkoutKind, label: &str) {
        let popup_class = format!("{}-popup", kind);
        tracing::info!(
            lat = coordinates.latitude,
            lng = coordinates.longitude,
            popup_class = %popup_class,
            label,
            "Marker"
        );
    }

    fn render_list_entry(&mut self, workout: &Workout) {
        let details: Vec<String> = workout
            .detail_rows()
            .iter()
            .map(|row| format!("{} {:.1} {}", row.icon, row.value, row.unit))
            .collect();
        tracing::info!(
            id = workout.id(),
            kind = %workout.kind(),
            title = workout.description(),
            details = %details.join("  "),
            "Workout"
        );
    }

    fn focus_on(&mut self, coordinates: Coordinates) {
        tracing::info!(
            lat = coordinates.latitude,
            lng = coordinates.longitude,
            zoom = self.zoom,
            "Map view"
        );
    }
}
