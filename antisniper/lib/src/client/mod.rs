//! HTTP session management for the Antisniper API.
//!
//! This module provides the [`AntisniperClient`] struct, which owns the
//! connection pool and API key header, and the builder that configures it.

mod builder;
mod executor;

pub use builder::AntisniperClientBuilder;
pub use executor::AntisniperClient;

/// Header carrying the API key on every request.
///
/// Header names are case-insensitive on the wire; `http` stores them
/// lowercased.
pub const API_KEY_HEADER: &str = "apikey";
