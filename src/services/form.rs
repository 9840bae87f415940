// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw workout form input and its validation.

use crate::error::ValidationError;
use crate::models::{Coordinates, Exercise, WorkoutKind, WorkoutRecord};

/// Values read from the workout form, exactly as the user typed them.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutForm {
    /// Selected workout type
    pub kind: WorkoutKind,
    /// Map location the user clicked
    pub coordinates: Coordinates,
    /// Distance field (km)
    pub distance: String,
    /// Duration field (min)
    pub duration: String,
    /// Cadence (running) or elevation gain (cycling) field
    pub extra: String,
}

impl WorkoutForm {
    pub fn new(
        kind: WorkoutKind,
        coordinates: Coordinates,
        distance: impl Into<String>,
        duration: impl Into<String>,
        extra: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            coordinates,
            distance: distance.into(),
            duration: duration.into(),
            extra: extra.into(),
        }
    }

    /// Build a form from the type selector's string value.
    pub fn from_selector(
        kind: &str,
        coordinates: Coordinates,
        distance: impl Into<String>,
        duration: impl Into<String>,
        extra: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let kind = kind
            .parse::<WorkoutKind>()
            .map_err(|e| ValidationError::UnknownKind(e.0))?;
        Ok(Self::new(kind, coordinates, distance, duration, extra))
    }

    /// Name of the kind-specific field for this form's kind.
    pub fn extra_field(&self) -> &'static str {
        match self.kind {
            WorkoutKind::Running => "cadence",
            WorkoutKind::Cycling => "elevation",
        }
    }

    /// Validate the form and build a new record from it.
    ///
    /// All numeric fields must be finite. Distance, duration and running
    /// cadence must be positive; cycling elevation may be zero or negative.
    pub fn validate(&self) -> Result<WorkoutRecord, ValidationError> {
        if !self.coordinates.is_finite() {
            return Err(ValidationError::NotFinite {
                field: "coordinates",
            });
        }

        let extra_field = self.extra_field();
        let distance = parse_finite("distance", &self.distance)?;
        let duration = parse_finite("duration", &self.duration)?;
        let extra = parse_finite(extra_field, &self.extra)?;

        require_positive("distance", distance)?;
        require_positive("duration", duration)?;

        let exercise = match self.kind {
            WorkoutKind::Running => {
                require_positive(extra_field, extra)?;
                Exercise::Running { cadence_spm: extra }
            }
            WorkoutKind::Cycling => Exercise::Cycling {
                elevation_gain_m: extra,
            },
        };

        Ok(WorkoutRecord::new(
            self.coordinates,
            distance,
            duration,
            exercise,
        ))
    }
}

/// Parse a form field as a finite number. Empty input is not a number.
fn parse_finite(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotFinite { field })
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field })
    }
}
