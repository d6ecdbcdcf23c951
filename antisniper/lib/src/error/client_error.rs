//! Transport errors.

use thiserror::Error;

/// Errors from the HTTP transport layer.
///
/// Anything that prevents a response from being received (connection
/// refused, DNS failure, timeout, a body that cannot be read) is reported as
/// [`ClientError::Connection`] with the underlying `reqwest` error kept as
/// the source.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a readable response.
    #[error("Connection to the Antisniper API failed")]
    Connection(#[source] reqwest::Error),

    /// The client was closed before the call was made.
    #[error("Client is closed")]
    Closed,
}

impl ClientError {
    /// Returns `true` if the underlying transport error was a timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Connection(e) => e.is_timeout(),
            Self::Closed => false,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Connection(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_display() {
        assert_eq!(ClientError::Closed.to_string(), "Client is closed");
        assert!(!ClientError::Closed.is_timeout());
    }

    #[test]
    fn test_connection_keeps_source() {
        // An unparseable URL fails inside reqwest before any I/O happens.
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let client_err = ClientError::from(err);

        assert!(matches!(client_err, ClientError::Connection(_)));
        assert!(std::error::Error::source(&client_err).is_some());
    }
}
