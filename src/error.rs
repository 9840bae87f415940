// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for workout submission, storage and lookups.
//!
//! None of these are fatal: validation errors abort a single submission,
//! storage errors only cost persistence across sessions, and lookup misses
//! are ignored by the caller.

/// Rejected user input. The submission is aborted and no state is mutated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Field '{field}' is not a finite number")]
    NotFinite { field: &'static str },

    #[error("Field '{field}' must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("Unknown workout kind: {0}")]
    UnknownKind(String),
}

impl ValidationError {
    /// Text shown to the user when a submission is rejected.
    pub const USER_MESSAGE: &'static str = "Inputs have to be positive number";

    /// Message suitable for an alert in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::NotFinite { .. } | ValidationError::NotPositive { .. } => {
                Self::USER_MESSAGE
            }
            ValidationError::UnknownKind(_) => "Workout type has to be running or cycling",
        }
    }

    /// Name of the offending form field, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::NotFinite { field } | ValidationError::NotPositive { field } => {
                Some(field)
            }
            ValidationError::UnknownKind(_) => None,
        }
    }
}

/// Durable storage failure.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded: {needed} bytes needed, quota is {quota} bytes")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Lookup miss for a workout id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Workout not found: {0}")]
pub struct NotFound(pub String);

/// Failure to acquire the user's current position.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PositionError {
    #[error("Position unavailable: {0}")]
    Unavailable(String),

    #[error("Position request timed out after {0}s")]
    Timeout(u64),
}

/// Umbrella error for the binary and for callers that mix operations.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error(transparent)]
    Position(#[from] PositionError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl TrackerError {
    /// Whether the error only affects persistence and the session can go on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TrackerError::Internal(_))
    }
}

/// Result type alias for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;
