//! Application configuration loaded from environment variables.
//!
//! Everything has a sensible default so the engine runs without any
//! environment at all; the variables exist for the embedding frontend to
//! tune cadences and point at its own data files.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed boarding charge added to every ride total (minor units).
    pub flat_fee: i64,
    /// Currency suffix used in rendered amounts (e.g. "kr.-").
    pub currency: String,
    /// Cadence of the running-cost ticker for an active ride.
    pub ride_tick_ms: u64,
    /// Cadence of the reservation countdown watcher.
    pub countdown_tick_ms: u64,
    /// Phone number used when the identity provider has none on file.
    pub fallback_phone: String,
    /// Optional path to a vehicle fleet JSON file.
    pub fleet_path: Option<String>,
    /// Optional path to the parking garages GeoJSON file.
    pub parking_garages_path: Option<String>,
    /// Optional path to the parking spots GeoJSON file.
    pub parking_spots_path: Option<String>,
    /// Optional path to the charging stations GeoJSON file.
    pub charging_path: Option<String>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            flat_fee: 4,
            currency: "kr.-".to_string(),
            ride_tick_ms: 500,
            countdown_tick_ms: 1000,
            fallback_phone: "12345678".to_string(),
            fleet_path: None,
            parking_garages_path: None,
            parking_spots_path: None,
            charging_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            flat_fee: parse_var("CARSHARE_FLAT_FEE", 4)?,
            currency: env::var("CARSHARE_CURRENCY").unwrap_or_else(|_| "kr.-".to_string()),
            ride_tick_ms: parse_var("CARSHARE_RIDE_TICK_MS", 500)?,
            countdown_tick_ms: parse_var("CARSHARE_COUNTDOWN_TICK_MS", 1000)?,
            fallback_phone: env::var("CARSHARE_FALLBACK_PHONE")
                .unwrap_or_else(|_| "12345678".to_string()),
            fleet_path: env::var("CARSHARE_FLEET_PATH").ok(),
            parking_garages_path: env::var("CARSHARE_PARKING_GARAGES_PATH").ok(),
            parking_spots_path: env::var("CARSHARE_PARKING_SPOTS_PATH").ok(),
            charging_path: env::var("CARSHARE_CHARGING_PATH").ok(),
        })
    }
}

/// Parse an optional numeric env var, falling back to `default`.
fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
