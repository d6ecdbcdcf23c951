//! Per-player endpoints under `/player`.
//!
//! These are premium-gated by the service; the client does not check the
//! account tier and simply reports whatever status comes back.

use serde_json::Value;

use crate::client::AntisniperClient;
use crate::error::AntisniperError;
use crate::params::QueryParams;

/// Options for [`PlayerEndpoints::get_ping`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PingOptions {
    /// Use the legacy ping data source. Always sent, `false` by default.
    pub legacy: bool,
    /// How many days of history to include. Omitted when `None`.
    pub lookback: Option<u32>,
}

impl PingOptions {
    /// Sets the legacy flag.
    #[must_use]
    pub fn legacy(mut self, legacy: bool) -> Self {
        self.legacy = legacy;
        self
    }

    /// Sets the lookback window in days.
    #[must_use]
    pub fn lookback(mut self, days: u32) -> Self {
        self.lookback = Some(days);
        self
    }
}

/// Borrowed view over a client for the `/player` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct PlayerEndpoints<'a> {
    client: &'a AntisniperClient,
    prefix: &'static str,
}

impl AntisniperClient {
    /// Returns the `/player` endpoint group.
    pub fn player(&self) -> PlayerEndpoints<'_> {
        PlayerEndpoints {
            client: self,
            prefix: "/player",
        }
    }
}

impl PlayerEndpoints<'_> {
    fn path(&self, suffix: &str) -> String {
        format!("{}{}", self.prefix, suffix)
    }

    /// Returns ping history for a player.
    ///
    /// ## Errors
    ///
    /// See [`AntisniperClient::get`].
    pub async fn get_ping(
        &self,
        player: &str,
        options: PingOptions,
    ) -> Result<Value, AntisniperError> {
        let params = QueryParams::new()
            .with("player", player)
            .with("legacy", options.legacy)
            .with_opt("lookback", options.lookback);
        self.client.get(&self.path("/ping"), &params).await
    }

    /// Returns QuickShop data for a player.
    ///
    /// ## Errors
    ///
    /// See [`AntisniperClient::get`].
    pub async fn quickshop(&self, player: &str) -> Result<Value, AntisniperError> {
        let params = QueryParams::new().with("player", player);
        self.client.get(&self.path("/quickshop"), &params).await
    }

    /// Returns chat history for a player.
    ///
    /// A negative `limit` returns the newest messages first.
    ///
    /// ## Errors
    ///
    /// See [`AntisniperClient::get`].
    pub async fn chat_history(
        &self,
        player: &str,
        limit: Option<i64>,
    ) -> Result<Value, AntisniperError> {
        let params = QueryParams::new()
            .with("player", player)
            .with_opt("limit", limit);
        self.client.get(&self.path("/chat"), &params).await
    }
}
