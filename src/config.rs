//! Application configuration loaded from environment variables.
//!
//! Only the binary reads the environment; the library takes these values
//! through constructors.

use crate::models::Coordinates;
use crate::services::DEFAULT_MAP_ZOOM;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Browser-like storage quota (5 MiB).
pub const DEFAULT_STORAGE_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the stored workout history
    pub data_dir: PathBuf,
    /// Largest value the store accepts, in bytes
    pub storage_quota_bytes: usize,
    /// Map zoom level when focusing on a position
    pub map_zoom: u8,
    /// How long to wait for the current position
    pub position_timeout: Duration,
    /// Position reported by the fixed position provider
    pub home_position: Option<Coordinates>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            storage_quota_bytes: DEFAULT_STORAGE_QUOTA_BYTES,
            map_zoom: DEFAULT_MAP_ZOOM,
            position_timeout: Duration::from_secs(10),
            home_position: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        Ok(Self {
            data_dir: env::var("WORKOUT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            storage_quota_bytes: parse_var("STORAGE_QUOTA_BYTES")?
                .unwrap_or(defaults.storage_quota_bytes),
            map_zoom: parse_var("MAP_ZOOM")?.unwrap_or(defaults.map_zoom),
            position_timeout: parse_var("POSITION_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.position_timeout),
            home_position: home_position()?,
        })
    }
}

/// Parse an optional environment variable.
fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(None);
    };
    match raw.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(ConfigError::Invalid(name, raw)),
    }
}

/// HOME_LATITUDE and HOME_LONGITUDE must be set together.
fn home_position() -> Result<Option<Coordinates>, ConfigError> {
    let latitude: Option<f64> = parse_var("HOME_LATITUDE")?;
    let longitude: Option<f64> = parse_var("HOME_LONGITUDE")?;
    match (latitude, longitude) {
        (Some(lat), Some(lng)) => Ok(Some(Coordinates::new(lat, lng))),
        (None, None) => Ok(None),
        (None, Some(_)) => Err(ConfigError::Missing("HOME_LATITUDE")),
        (Some(_), None) => Err(ConfigError::Missing("HOME_LONGITUDE")),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
