//! # Settings
//!
//! Connection settings are layered, lowest precedence first:
//!
//! 1. built-in defaults (`mongodb://localhost:27017`, database `restaurant`, 10 seconds)
//! 2. `MONGODB_URL`, then `DATABASE_URL`, for the address
//! 3. `RESTAURANT_ADDRESS`, `RESTAURANT_DATABASE` and `RESTAURANT_CONNECT_TIMEOUT`
//!
//! Command-line flags are applied on top by [`crate::cli::Invocation::apply`].

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ConfigError;

pub const DEFAULT_ADDRESS: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "restaurant";
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(deserialize_with = "scalar_string")]
    pub address: String,
    #[serde(deserialize_with = "scalar_string")]
    pub database: String,
    /// Bounded wait for the initial connection, in seconds.
    pub connect_timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl Settings {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Env::raw().only(&["MONGODB_URL"]).map(|_| "address".into()))
            .merge(Env::raw().only(&["DATABASE_URL"]).map(|_| "address".into()))
            .merge(Env::prefixed("RESTAURANT_"))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let settings: Settings = figment.extract()?;
        settings.validate()
    }

    /// Reads the environment layers without validating them, so that
    /// command-line flags can still replace a bad value before
    /// [`Settings::validate`] runs.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::figment().extract()?)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.connect_timeout == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(self)
    }
}

/// Env values are parsed before extraction, so `RESTAURANT_DATABASE=2024`
/// arrives as a number. Any scalar is taken back as text.
fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Flag(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(text) => text,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Flag(b) => b.to_string(),
    })
}
