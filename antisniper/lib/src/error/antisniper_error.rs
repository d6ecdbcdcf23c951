//! Top-level client error type.

use super::{ClientError, ConfigError, StatusError, ValidationError};
use thiserror::Error;

/// Top-level error type for all client operations.
///
/// Every call either returns the parsed JSON body or exactly one of these.
/// Match on the layer to branch on rate limiting, permissions, or bad input:
///
/// ```rust
/// use antisniper::{AntisniperError, StatusError};
///
/// fn describe(err: &AntisniperError) -> &'static str {
///     match err {
///         AntisniperError::Status(StatusError::RateLimited { .. }) => "slow down",
///         AntisniperError::Status(StatusError::Forbidden { .. }) => "check your key",
///         AntisniperError::Validation(e) if e.is_invalid_argument() => "fix the input",
///         AntisniperError::Client(_) => "network trouble",
///         _ => "something else",
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum AntisniperError {
    /// Transport failures and calls made after close.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Non-200 responses.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// Local argument checks and response parsing.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Client construction and configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AntisniperError {
    /// Returns `true` for an HTTP 429 response.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Status(StatusError::RateLimited { .. }))
    }

    /// Returns `true` for an HTTP 403 response.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Status(StatusError::Forbidden { .. }))
    }

    /// Returns `true` if the call was rejected locally without a request.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::Validation(e) if e.is_invalid_argument())
    }

    /// Returns `true` for transport-level failures.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Client(ClientError::Connection(_)))
    }

    /// Returns the HTTP status code if the service answered with a non-200.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(e) => Some(e.status_code()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_error() {
        let err: AntisniperError = StatusError::from_status(429, "slow down").into();
        assert!(err.is_rate_limited());
        assert!(!err.is_forbidden());
        assert_eq!(err.status_code(), Some(429));
    }

    #[test]
    fn test_from_validation_error() {
        let err: AntisniperError = ValidationError::TooManyPlayers {
            count: 150,
            limit: 100,
        }
        .into();
        assert!(err.is_invalid_argument());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_closed_is_not_connection() {
        let err: AntisniperError = ClientError::Closed.into();
        assert!(!err.is_connection());
        assert_eq!(err.to_string(), "Client is closed");
    }

    #[test]
    fn test_error_display_is_transparent() {
        let err = AntisniperError::Config(ConfigError::EmptyApiKey);
        assert_eq!(err.to_string(), "API key must not be empty");
    }
}
