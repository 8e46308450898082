//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CATALOG_ACTOR_BUFFER` - Request channel capacity per actor (default: 32, must be > 0)
//! - `CATALOG_SEED_SAMPLE_DATA` - Start the catalog with the two sample products
//!   (`true`/`false`/`1`/`0`, default: false)

use thiserror::Error;

pub const DEFAULT_ACTOR_BUFFER: usize = 32;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Runtime settings for a [`CatalogSystem`](crate::lifecycle::CatalogSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Capacity of each actor's request channel.
    pub actor_buffer: usize,
    /// Preload [`sample_products`](crate::model::sample_products) into the product store.
    pub seed_sample_data: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            actor_buffer: DEFAULT_ACTOR_BUFFER,
            seed_sample_data: false,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let actor_buffer = match lookup("CATALOG_ACTOR_BUFFER") {
            Some(raw) => parse_buffer("CATALOG_ACTOR_BUFFER", &raw)?,
            None => DEFAULT_ACTOR_BUFFER,
        };
        let seed_sample_data = match lookup("CATALOG_SEED_SAMPLE_DATA") {
            Some(raw) => parse_bool("CATALOG_SEED_SAMPLE_DATA", &raw)?,
            None => false,
        };

        Ok(Self {
            actor_buffer,
            seed_sample_data,
        })
    }
}

fn parse_buffer(key: &str, raw: &str) -> Result<usize, ConfigError> {
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if value == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(value)
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected true/false, got '{other}'"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CatalogConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = CatalogConfig::from_lookup(lookup(&[
            ("CATALOG_ACTOR_BUFFER", " 8 "),
            ("CATALOG_SEED_SAMPLE_DATA", "TRUE"),
        ]))
        .unwrap();
        assert_eq!(config.actor_buffer, 8);
        assert!(config.seed_sample_data);
    }

    #[test]
    fn test_zero_buffer_rejected() {
        let err = CatalogConfig::from_lookup(lookup(&[("CATALOG_ACTOR_BUFFER", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "CATALOG_ACTOR_BUFFER"));
    }

    #[test]
    fn test_bad_bool_rejected() {
        let err =
            CatalogConfig::from_lookup(lookup(&[("CATALOG_SEED_SAMPLE_DATA", "yes")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidEnvVar(
                "CATALOG_SEED_SAMPLE_DATA".into(),
                "expected true/false, got 'yes'".into()
            )
        );
    }
}
