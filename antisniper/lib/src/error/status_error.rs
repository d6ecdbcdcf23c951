//! Errors derived from the HTTP status of a response.

use thiserror::Error;

/// A non-200 response from the Antisniper API.
///
/// Every variant carries the response body text so callers can see what the
/// service said. Only `Unknown` carries the status, since the others each map
/// to exactly one code.
#[derive(Debug, Error)]
pub enum StatusError {
    /// HTTP 403: the API key is invalid or banned.
    #[error("Forbidden: API key is invalid or banned: {message}")]
    Forbidden {
        /// Response body text.
        message: String,
    },

    /// HTTP 422: the request was well-formed but semantically invalid.
    #[error("Unprocessable entity: {message}")]
    UnprocessableEntity {
        /// Response body text.
        message: String,
    },

    /// HTTP 429: the key's request quota is exhausted.
    #[error("Rate limited: request quota exceeded: {message}")]
    RateLimited {
        /// Response body text.
        message: String,
    },

    /// Any other non-200 status.
    #[error("Unexpected HTTP {status}: {message}")]
    Unknown {
        /// The HTTP status code returned.
        status: u16,
        /// Response body text.
        message: String,
    },
}

impl StatusError {
    /// Maps a non-200 status and its body to the matching variant.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            403 => Self::Forbidden { message },
            422 => Self::UnprocessableEntity { message },
            429 => Self::RateLimited { message },
            status => Self::Unknown { status, message },
        }
    }

    /// Returns the HTTP status code this error was produced from.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Forbidden { .. } => 403,
            Self::UnprocessableEntity { .. } => 422,
            Self::RateLimited { .. } => 429,
            Self::Unknown { status, .. } => *status,
        }
    }

    /// Returns the response body text.
    pub fn message(&self) -> &str {
        match self {
            Self::Forbidden { message }
            | Self::UnprocessableEntity { message }
            | Self::RateLimited { message }
            | Self::Unknown { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses() {
        assert!(matches!(
            StatusError::from_status(403, "banned"),
            StatusError::Forbidden { .. }
        ));
        assert!(matches!(
            StatusError::from_status(422, ""),
            StatusError::UnprocessableEntity { .. }
        ));
        assert!(matches!(
            StatusError::from_status(429, ""),
            StatusError::RateLimited { .. }
        ));
    }

    #[test]
    fn test_other_statuses_are_unknown() {
        for status in [201, 204, 400, 401, 404, 500, 502, 503] {
            let err = StatusError::from_status(status, "nope");
            assert!(
                matches!(err, StatusError::Unknown { status: s, .. } if s == status),
                "status {status} should map to Unknown"
            );
            assert_eq!(err.status_code(), status);
        }
    }

    #[test]
    fn test_status_code_round_trips() {
        for status in [403, 422, 429] {
            assert_eq!(StatusError::from_status(status, "").status_code(), status);
        }
    }

    #[test]
    fn test_message_and_display() {
        let err = StatusError::from_status(500, "Internal Server Error");
        assert_eq!(err.message(), "Internal Server Error");
        assert_eq!(err.to_string(), "Unexpected HTTP 500: Internal Server Error");
    }
}
