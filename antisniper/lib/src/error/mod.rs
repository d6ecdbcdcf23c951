//! Layered error types for the Antisniper client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`AntisniperError`] - Top-level error type for all client operations
//! - [`ClientError`] - Transport failures and use-after-close
//! - [`StatusError`] - Non-200 responses from the service
//! - [`ValidationError`] - Local argument checks and response parsing
//! - [`ConfigError`] - Client construction and configuration errors

mod antisniper_error;
mod client_error;
mod config_error;
mod status_error;
mod validation_error;

pub use antisniper_error::AntisniperError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use status_error::StatusError;
pub use validation_error::ValidationError;
