//! Client configuration.
//!
//! Configuration is normally sourced from the environment:
//!
//! - `ANTISNIPER_API_KEY` (required): the key sent in the `Apikey` header
//! - `ANTISNIPER_BASE_URL` (optional): overrides the production endpoint
//!
//! A `.env` file in the working directory is loaded first if present.

use std::env;
use std::fmt;

use tracing::debug;

use crate::error::ConfigError;

/// Production endpoint of the Antisniper API.
pub const DEFAULT_BASE_URL: &str = "https://api.antisniper.net/v2";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ANTISNIPER_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "ANTISNIPER_BASE_URL";

/// Settings needed to construct an [`AntisniperClient`](crate::AntisniperClient).
#[derive(Clone, PartialEq, Eq)]
pub struct AntisniperConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// Base URL that endpoint paths are appended to.
    pub base_url: String,
}

impl AntisniperConfig {
    /// Creates a configuration for the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Sets a custom base URL (useful for testing).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if `ANTISNIPER_API_KEY` is unset
    /// or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolves configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated as unset.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no API key is found.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = non_blank(API_KEY_ENV).ok_or(ConfigError::MissingApiKey {
            env_var: API_KEY_ENV,
        })?;

        let config = Self::new(api_key);
        Ok(match non_blank(BASE_URL_ENV) {
            Some(base_url) => config.with_base_url(base_url),
            None => config,
        })
    }
}

impl fmt::Debug for AntisniperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AntisniperConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
