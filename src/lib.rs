// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Tracker: record runs and rides at places picked on a map
//!
//! This crate provides the workout model (running and cycling, with their
//! derived pace and speed), the controller that owns the session's workout
//! list, and the durable storage the list is mirrored to.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod time_utils;

pub use error::{NotFound, PositionError, StorageError, TrackerError, ValidationError};
pub use models::{Coordinates, Workout, WorkoutKind, WorkoutRecord};
pub use services::{WorkoutController, WorkoutForm};
