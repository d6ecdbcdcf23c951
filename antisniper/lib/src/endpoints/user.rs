//! Account endpoints under `/user`, describing the key's owner and usage.

use serde_json::Value;

use crate::client::AntisniperClient;
use crate::error::AntisniperError;
use crate::params::QueryParams;

/// Borrowed view over a client for the `/user` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct UserEndpoints<'a> {
    client: &'a AntisniperClient,
    prefix: &'static str,
}

impl AntisniperClient {
    /// Returns the `/user` endpoint group.
    pub fn user(&self) -> UserEndpoints<'_> {
        UserEndpoints {
            client: self,
            prefix: "/user",
        }
    }
}

impl UserEndpoints<'_> {
    async fn fetch(&self, suffix: &str) -> Result<Value, AntisniperError> {
        let path = format!("{}{}", self.prefix, suffix);
        self.client.get(&path, &QueryParams::new()).await
    }

    /// Everything the service stores about the current user.
    ///
    /// ## Errors
    ///
    /// See [`AntisniperClient::get`].
    pub async fn get(&self) -> Result<Value, AntisniperError> {
        self.fetch("").await
    }

    /// Recent requests made with this key.
    ///
    /// ## Errors
    ///
    /// See [`AntisniperClient::get`].
    pub async fn get_requests(&self) -> Result<Value, AntisniperError> {
        self.fetch("/requests").await
    }

    /// Older request history.
    ///
    /// ## Errors
    ///
    /// See [`AntisniperClient::get`].
    pub async fn get_old_requests(&self) -> Result<Value, AntisniperError> {
        self.fetch("/requests/old").await
    }

    /// Products owned by the current user.
    ///
    /// ## Errors
    ///
    /// See [`AntisniperClient::get`].
    pub async fn get_products(&self) -> Result<Value, AntisniperError> {
        self.fetch("/products").await
    }

    /// Usage totals for this key.
    ///
    /// ## Errors
    ///
    /// See [`AntisniperClient::get`].
    pub async fn get_usage(&self) -> Result<Value, AntisniperError> {
        self.fetch("/usage").await
    }

    /// Usage broken down per endpoint path.
    ///
    /// ## Errors
    ///
    /// See [`AntisniperClient::get`].
    pub async fn get_endpoint_usage(&self) -> Result<Value, AntisniperError> {
        self.fetch("/usage/paths").await
    }
}
