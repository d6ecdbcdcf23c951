//! Async client for the Antisniper Minecraft player API.
//!
//! The `antisniper` crate wraps `https://api.antisniper.net/v2` for UUID/IGN
//! conversion, Mojang account data, online-status checks and account usage
//! statistics.
//!
//! ## Features
//!
//! - **One session**: a single pooled `reqwest` client that sends the
//!   `Apikey` header with every request
//! - **Untyped responses**: every 200 body is returned as a
//!   [`serde_json::Value`], exactly as the service sent it
//! - **Layered errors**: [`StatusError`] for 403/422/429/other,
//!   [`ClientError`] for transport failures, [`ValidationError`] for the
//!   100-player bulk limit
//! - **Scoped lifecycle**: [`AntisniperClient::scoped`] closes the pool when
//!   the body finishes; later calls fail with [`ClientError::Closed`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use antisniper::{AntisniperClient, AntisniperConfig, PingOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AntisniperClient::from_config(&AntisniperConfig::from_env()?)?;
//!
//! client
//!     .scoped(async |api: &AntisniperClient| {
//!         let notch = api.convert("Notch").await?;
//!         let online = api.online_check(&["MonsterGG", "Seeecret"], "stats bot").await?;
//!         let ping = api.player().get_ping("Notch", PingOptions::default()).await?;
//!         let usage = api.user().get_usage().await?;
//!         println!("{notch}\n{online}\n{ping}\n{usage}");
//!         Ok::<(), antisniper::AntisniperError>(())
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod collection;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod params;

// Re-exports for convenience
pub use client::{AntisniperClient, AntisniperClientBuilder, API_KEY_HEADER};
pub use collection::Collection;
pub use config::{AntisniperConfig, DEFAULT_BASE_URL};
pub use endpoints::{PingOptions, PlayerEndpoints, UserEndpoints, MAX_BULK_PLAYERS};
pub use error::{AntisniperError, ClientError, ConfigError, StatusError, ValidationError};
pub use params::QueryParams;
