// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic and collaborators.

pub mod controller;
pub mod form;
pub mod position;
pub mod render;

pub use controller::WorkoutController;
pub use form::WorkoutForm;
pub use position::{locate, FixedPositionProvider, PositionProvider};
pub use render::{TracingRenderer, WorkoutRenderer, DEFAULT_MAP_ZOOM};
