//! Runtime configuration read from the environment.

use std::net::SocketAddr;

use crate::server::{error::config::ConfigError, service::password::DEFAULT_HASH_COST};

/// Address the HTTP server binds when `BIND_ADDRESS` is unset
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Days of inactivity before a session expires when `SESSION_INACTIVITY_DAYS` is unset
pub const DEFAULT_SESSION_INACTIVITY_DAYS: i64 = 7;
/// Valid bcrypt cost range (mirrors the private constants in the `bcrypt` crate)
const BCRYPT_MIN_COST: u32 = 4;
const BCRYPT_MAX_COST: u32 = 31;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// SeaORM connection string for the user database
    pub database_url: String,
    /// Valkey/Redis URL for the session store
    pub valkey_url: String,
    /// Socket address the HTTP server binds
    pub bind_address: SocketAddr,
    /// bcrypt cost factor used when hashing passwords
    pub bcrypt_cost: u32,
    /// Days of inactivity after which a session expires
    pub session_inactivity_days: i64,
}

impl Config {
    /// Reads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and all values valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `VALKEY_URL` is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - An optional variable could not be parsed or is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through an arbitrary variable lookup.
    ///
    /// Split out from [`Config::from_env`] so parsing can be exercised without touching the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let bcrypt_cost = match lookup("BCRYPT_COST") {
            None => DEFAULT_HASH_COST,
            Some(value) => {
                let cost = value
                    .parse::<u32>()
                    .map_err(|e| ConfigError::InvalidEnvValue {
                        var: "BCRYPT_COST".to_string(),
                        reason: e.to_string(),
                    })?;

                if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&cost) {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "BCRYPT_COST".to_string(),
                        reason: format!(
                            "cost must be between {} and {}",
                            BCRYPT_MIN_COST,
                            BCRYPT_MAX_COST
                        ),
                    });
                }

                cost
            }
        };

        let session_inactivity_days = match lookup("SESSION_INACTIVITY_DAYS") {
            None => DEFAULT_SESSION_INACTIVITY_DAYS,
            Some(value) => match value.parse::<i64>() {
                Ok(days) if days > 0 => days,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "SESSION_INACTIVITY_DAYS".to_string(),
                        reason: "expected a positive number of days".to_string(),
                    })
                }
            },
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address,
            bcrypt_cost,
            session_inactivity_days,
        })
    }
}
