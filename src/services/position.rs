// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Position provider collaborator.

use crate::error::PositionError;
use crate::models::Coordinates;
use std::future::Future;
use std::time::Duration;

/// Source of the user's current position.
pub trait PositionProvider {
    /// Single-shot request for the current position.
    fn request_current_position(
        &self,
    ) -> impl Future<Output = Result<Coordinates, PositionError>> + Send;
}

/// Provider that always answers with a configured position, if it has one.
#[derive(Debug, Clone, Default)]
pub struct FixedPositionProvider {
    position: Option<Coordinates>,
}

impl FixedPositionProvider {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }
}

impl PositionProvider for FixedPositionProvider {
    async fn request_current_position(&self) -> Result<Coordinates, PositionError> {
        self.position
            .ok_or_else(|| PositionError::Unavailable("No home position configured".to_string()))
    }
}

/// Request the current position, giving up after `timeout`.
pub async fn locate<P: PositionProvider>(
    provider: &P,
    timeout: Duration,
) -> Result<Coordinates, PositionError> {
    match tokio::time::timeout(timeout, provider.request_current_position()).await {
        Ok(Ok(position)) => {
            tracing::info!(
                lat = position.latitude,
                lng = position.longitude,
                "Position acquired"
            );
            Ok(position)
        }
        Ok(Err(e)) => Err(e),
        Err(_) => Err(PositionError::Timeout(timeout.as_secs())),
    }
}
