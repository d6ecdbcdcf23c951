//! Client construction and configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These occur while building a client or loading its configuration,
/// before any request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API key environment variable is unset or blank.
    #[error("Missing API key: set the {env_var} environment variable")]
    MissingApiKey {
        /// The environment variable that was consulted.
        env_var: &'static str,
    },

    /// An empty API key was passed explicitly.
    #[error("API key must not be empty")]
    EmptyApiKey,

    /// The base URL failed to parse.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL uses a scheme other than `http` or `https`.
    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The scheme that was rejected.
        scheme: String,
    },

    /// A header name or value could not be encoded.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// The header name as supplied.
        name: String,
        /// Why it was rejected.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.to_string(),
        }
    }
}
