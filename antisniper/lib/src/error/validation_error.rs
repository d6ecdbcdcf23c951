//! Argument validation and response parsing errors.

use thiserror::Error;

/// Errors raised while checking arguments or parsing a response body.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A bulk call was given more players than the service accepts.
    ///
    /// Raised before any request is sent.
    #[error("Invalid argument: you can only check up to {limit} players at a time (got {count})")]
    TooManyPlayers {
        /// Number of players supplied.
        count: usize,
        /// Maximum allowed per call.
        limit: usize,
    },

    /// A 200 response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl ValidationError {
    /// Returns `true` for local argument violations (nothing was sent).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::TooManyPlayers { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_players_display() {
        let err = ValidationError::TooManyPlayers {
            count: 101,
            limit: 100,
        };
        let display = err.to_string();
        assert!(display.contains("up to 100 players"));
        assert!(display.contains("got 101"));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_json_parse_is_not_invalid_argument() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = ValidationError::JsonParse(json_err);
        assert!(!err.is_invalid_argument());
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
