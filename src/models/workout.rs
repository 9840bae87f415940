// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout model: stored records and the metrics derived from them.
//!
//! A [`WorkoutRecord`] holds only what the user entered plus identity and
//! creation time; it is what gets written to durable storage. A [`Workout`]
//! is a record run through [`derive`], which adds the kind-specific metric
//! and the description. Derivation happens both when a workout is created
//! and when it is restored, so stored and fresh workouts always agree.

use crate::time_utils::format_month_day;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A latitude/longitude pair, serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.latitude, c.longitude]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Workout discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Value used in storage and by the form's type selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalized name used in descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    /// Icon shown on map popups and list entries.
    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a form selector value that is neither running nor cycling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown workout kind: {0}")]
pub struct ParseKindError(pub String);

impl FromStr for WorkoutKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// Kind-specific input, tagged by `kind` in the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Exercise {
    Running {
        /// Steps per minute
        #[serde(rename = "cadenceSpm")]
        cadence_spm: f64,
    },
    Cycling {
        /// Net elevation gain in meters (negative for a net descent)
        #[serde(rename = "elevationGainM")]
        elevation_gain_m: f64,
    },
}

impl Exercise {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Exercise::Running { .. } => WorkoutKind::Running,
            Exercise::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// Stored workout record: user input plus identity. Never carries derived data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    /// Opaque unique identifier
    pub id: String,
    /// Creation time (RFC 3339, UTC)
    pub created_at: DateTime<Utc>,
    /// Where the user clicked on the map
    #[cfg_attr(feature = "binding-generation", ts(type = "[number, number]"))]
    pub coordinates: Coordinates,
    /// Distance in kilometres
    pub distance_km: f64,
    /// Duration in minutes
    pub duration_min: f64,
    #[serde(flatten)]
    pub exercise: Exercise,
}

impl WorkoutRecord {
    /// New record with a fresh id, created now.
    pub fn new(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        exercise: Exercise,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            coordinates,
            distance_km,
            duration_min,
            exercise,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        self.exercise.kind()
    }

    /// Whether the record satisfies the same rules as form input: finite
    /// numbers, positive distance, duration and running cadence.
    pub fn has_valid_input(&self) -> bool {
        let extra_ok = match self.exercise {
            Exercise::Running { cadence_spm } => cadence_spm.is_finite() && cadence_spm > 0.0,
            Exercise::Cycling { elevation_gain_m } => elevation_gain_m.is_finite(),
        };
        self.coordinates.is_finite()
            && self.distance_km.is_finite()
            && self.distance_km > 0.0
            && self.duration_min.is_finite()
            && self.duration_min > 0.0
            && extra_ok
    }
}

/// The kind-specific derived metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Minutes per kilometre (running)
    Pace { min_per_km: f64 },
    /// Kilometres per hour (cycling)
    Speed { km_per_h: f64 },
}

impl Metric {
    pub fn value(&self) -> f64 {
        match *self {
            Metric::Pace { min_per_km } => min_per_km,
            Metric::Speed { km_per_h } => km_per_h,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Pace { .. } => "min/km",
            Metric::Speed { .. } => "km/h",
        }
    }
}

/// One row of a rendered list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub icon: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// A workout with its derived metric and description.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    record: WorkoutRecord,
    metric: Metric,
    description: String,
}

impl Workout {
    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.record.created_at
    }

    pub fn coordinates(&self) -> Coordinates {
        self.record.coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.record.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.record.duration_min
    }

    pub fn kind(&self) -> WorkoutKind {
        self.record.kind()
    }

    pub fn exercise(&self) -> Exercise {
        self.record.exercise
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn record(&self) -> &WorkoutRecord {
        &self.record
    }

    pub fn into_record(self) -> WorkoutRecord {
        self.record
    }

    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.metric {
            Metric::Pace { min_per_km } => Some(min_per_km),
            Metric::Speed { .. } => None,
        }
    }

    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.metric {
            Metric::Speed { km_per_h } => Some(km_per_h),
            Metric::Pace { .. } => None,
        }
    }

    pub fn cadence_spm(&self) -> Option<f64> {
        match self.record.exercise {
            Exercise::Running { cadence_spm } => Some(cadence_spm),
            Exercise::Cycling { .. } => None,
        }
    }

    pub fn elevation_gain_m(&self) -> Option<f64> {
        match self.record.exercise {
            Exercise::Cycling { elevation_gain_m } => Some(elevation_gain_m),
            Exercise::Running { .. } => None,
        }
    }

    /// Popup text for the map marker.
    pub fn marker_label(&self) -> String {
        format!("{} {}", self.kind().icon(), self.description)
    }

    /// Rows shown in the workout list, in display order.
    pub fn detail_rows(&self) -> Vec<DetailRow> {
        let mut rows = vec![
            DetailRow {
                icon: self.kind().icon(),
                value: self.record.distance_km,
                unit: "km",
            },
            DetailRow {
                icon: "⏱",
                value: self.record.duration_min,
                unit: "min",
            },
            DetailRow {
                icon: "⚡️",
                value: self.metric.value(),
                unit: self.metric.unit(),
            },
        ];
        rows.push(match self.record.exercise {
            Exercise::Running { cadence_spm } => DetailRow {
                icon: "🦶🏼",
                value: cadence_spm,
                unit: "spm",
            },
            Exercise::Cycling { elevation_gain_m } => DetailRow {
                icon: "⛰",
                value: elevation_gain_m,
                unit: "m",
            },
        });
        rows
    }
}

/// Compute the derived metric and description for a record.
///
/// Pure: the same record always yields the same workout. Inputs are not
/// validated here; a zero distance gives a non-finite pace.
pub fn derive(record: WorkoutRecord) -> Workout {
    let metric = match record.exercise {
        Exercise::Running { .. } => Metric::Pace {
            min_per_km: record.duration_min / record.distance_km,
        },
        Exercise::Cycling { .. } => Metric::Speed {
            km_per_h: record.distance_km / (record.duration_min / 60.0),
        },
    };
    let description = describe(record.kind(), record.created_at);
    Workout {
        record,
        metric,
        description,
    }
}

/// "<Kind> on <Month> <Day>" for the given creation time.
pub fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", kind.label(), format_month_day(created_at))
}

/// Create a running workout at `coordinates`, timestamped now.
pub fn create_running(
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    cadence_spm: f64,
) -> Workout {
    derive(WorkoutRecord::new(
        coordinates,
        distance_km,
        duration_min,
        Exercise::Running { cadence_spm },
    ))
}

/// Create a cycling workout at `coordinates`, timestamped now.
pub fn create_cycling(
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    elevation_gain_m: f64,
) -> Workout {
    derive(WorkoutRecord::new(
        coordinates,
        distance_km,
        duration_min,
        Exercise::Cycling { elevation_gain_m },
    ))
}
