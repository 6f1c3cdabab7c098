//! # Configuration Management for Bookhaus
//!
//! This crate provides centralized configuration structures for all Bookhaus
//! components, including the distributed cache and request-correlation settings.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{CacheConfig, CorrelationConfig};
//!
//! // Cache configuration
//! let cache_config = CacheConfig::new(
//!     "redis://localhost:6379".to_string(),
//!     10, 5000, 3000,
//! );
//!
//! // Correlation configuration
//! let correlation_config = CorrelationConfig::new("X-Correlation-Id".to_string());
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [cache]
//! redis_url = "redis://localhost:6379"
//! default_ttl_minutes = 10
//! response_timeout_ms = 5000
//! connection_timeout_ms = 3000
//!
//! [correlation]
//! header_name = "X-Correlation-Id"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from bookhaus.toml
//! let config = AppConfig::load().unwrap();
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml").unwrap();
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./bookhaus.toml";

/// Default header a correlation identifier travels under.
pub const DEFAULT_CORRELATION_HEADER: &str = "X-Correlation-Id";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub cache: CacheConfig,
    pub correlation: CorrelationConfig,
}

/// Distributed cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Redis connection string (redis://localhost:6379)
    pub redis_url: String,
    /// Default TTL for cache entries, in whole minutes
    pub default_ttl_minutes: u64,
    /// How long to wait for a single command before treating the store as unreachable
    pub response_timeout_ms: u64,
    /// Connection establishment timeout in milliseconds
    pub connection_timeout_ms: u64,
}

/// Request-correlation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationConfig {
    /// Header the correlation identifier is read from and forwarded under
    pub header_name: String,
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = {
            dotenvy::dotenv()?;

            // Try to load .env file for BOOKHAUS_CONFIG path
            if let Ok(config_path) = env::var("BOOKHAUS_CONFIG") {
                Self::from_file(&config_path)
            }
            // Try to load config from DEFAULT_CONFIG_PATH
            else if Path::new(DEFAULT_CONFIG_PATH).exists() {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            // Return error if neither .env file nor default config file exists
            else {
                Err(ConfigError::Invalid(format!(
                    "Config path must be specified in .env file as BOOKHAUS_CONFIG or in {} file",
                    DEFAULT_CONFIG_PATH
                )))
            }
        }?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        // Cache validations
        if self.cache.redis_url.is_empty() {
            return Err(ConfigError::Invalid(
                "Redis URL cannot be empty".to_string(),
            ));
        }
        if self.cache.response_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "Cache response_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.cache.connection_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "Cache connection_timeout_ms must be greater than 0".to_string(),
            ));
        }

        // Correlation validations
        if self.correlation.header_name.is_empty() {
            return Err(ConfigError::Invalid(
                "Correlation header_name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl CacheConfig {
    /// Create a new cache configuration
    pub fn new(
        redis_url: String,
        default_ttl_minutes: u64,
        response_timeout_ms: u64,
        connection_timeout_ms: u64,
    ) -> Self {
        Self {
            redis_url,
            default_ttl_minutes,
            response_timeout_ms,
            connection_timeout_ms,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://localhost:6379".to_string(),
            default_ttl_minutes: 10,
            response_timeout_ms: 5000,
            connection_timeout_ms: 3000,
        }
    }
}

impl CorrelationConfig {
    /// Create a new correlation configuration
    pub fn new(header_name: String) -> Self {
        Self { header_name }
    }
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            header_name: DEFAULT_CORRELATION_HEADER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        AppConfig {
            cache: CacheConfig::default(),
            correlation: CorrelationConfig::default(),
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn empty_redis_url_is_rejected() {
        let mut config = valid_config();
        config.cache.redis_url = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn zero_timeouts_are_rejected() {
        let mut config = valid_config();
        config.cache.response_timeout_ms = 0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.cache.connection_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_header_name_is_rejected() {
        let mut config = valid_config();
        config.correlation.header_name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_toml_sections() {
        let toml_str = r#"
            [cache]
            redis_url = "redis://cache.internal:6379"
            default_ttl_minutes = 30
            response_timeout_ms = 2000
            connection_timeout_ms = 1000

            [correlation]
            header_name = "X-Request-Id"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.cache.redis_url, "redis://cache.internal:6379");
        assert_eq!(config.cache.default_ttl_minutes, 30);
        assert_eq!(config.correlation.header_name, "X-Request-Id");
    }
}
