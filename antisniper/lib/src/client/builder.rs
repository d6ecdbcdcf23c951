//! Builder for [`AntisniperClient`].

use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;
use url::Url;

use super::API_KEY_HEADER;
use super::executor::AntisniperClient;
use crate::config::{AntisniperConfig, DEFAULT_BASE_URL};
use crate::error::{AntisniperError, ClientError, ConfigError};

/// Builder for configuring an [`AntisniperClient`].
pub struct AntisniperClientBuilder {
    api_key: String,
    base_url: String,
    extra_headers: Vec<(String, String)>,
}

impl AntisniperClientBuilder {
    pub(super) fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            extra_headers: Vec::new(),
        }
    }

    /// Overrides the base URL that endpoint paths are appended to.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let client = AntisniperClient::builder("key")
    ///     .base_url("http://localhost:8080/v2")
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Adds a fixed header sent with every request.
    ///
    /// An `Apikey` header given here is ignored; the key always comes from
    /// the builder's API key.
    #[must_use]
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }

    /// Builds the [`AntisniperClient`], opening its connection pool.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The API key is empty or cannot be sent as a header value
    /// - The base URL is not an absolute `http`/`https` URL
    /// - A default header is invalid
    /// - The HTTP client cannot be constructed
    pub fn build(self) -> Result<AntisniperClient, AntisniperError> {
        let base_url = normalize_base_url(&self.base_url)?;
        let default_headers = self.header_map()?;

        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Connection)?;

        debug!(base_url = %base_url, "Antisniper client opened");

        Ok(AntisniperClient::from_parts(http, base_url, default_headers))
    }

    fn header_map(&self) -> Result<HeaderMap, ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        let mut headers = HeaderMap::new();
        for (name, value) in &self.extra_headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| ConfigError::invalid_header(name, e))?;
            if header_name.as_str() == API_KEY_HEADER {
                continue;
            }
            let header_value = HeaderValue::try_from(value.as_str())
                .map_err(|e| ConfigError::invalid_header(name, e))?;
            headers.insert(header_name, header_value);
        }

        let mut key = HeaderValue::try_from(self.api_key.as_str())
            .map_err(|e| ConfigError::invalid_header(API_KEY_HEADER, e))?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

        Ok(headers)
    }
}

impl fmt::Debug for AntisniperClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AntisniperClientBuilder")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("extra_headers", &self.extra_headers)
            .finish()
    }
}

impl From<&AntisniperConfig> for AntisniperClientBuilder {
    fn from(config: &AntisniperConfig) -> Self {
        Self::new(config.api_key.clone()).base_url(config.base_url.clone())
    }
}

/// Validates the base URL and strips any trailing `/`.
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = Url::parse(raw.trim())?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme {
            scheme: parsed.scheme().to_string(),
        });
    }
    Ok(raw.trim().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://api.antisniper.net/v2/").unwrap(),
            "https://api.antisniper.net/v2"
        );
        assert_eq!(
            normalize_base_url("http://127.0.0.1:8080").unwrap(),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn test_normalize_rejects_relative_url() {
        assert!(matches!(
            normalize_base_url("/v2"),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_normalize_rejects_other_schemes() {
        assert!(matches!(
            normalize_base_url("ftp://api.antisniper.net"),
            Err(ConfigError::UnsupportedScheme { scheme }) if scheme == "ftp"
        ));
    }

    #[test]
    fn test_empty_key_rejected() {
        let result = AntisniperClientBuilder::new("").build();
        assert!(matches!(
            result,
            Err(AntisniperError::Config(ConfigError::EmptyApiKey))
        ));
    }

    #[test]
    fn test_key_with_newline_rejected() {
        let result = AntisniperClientBuilder::new("bad\nkey").build();
        assert!(matches!(
            result,
            Err(AntisniperError::Config(ConfigError::InvalidHeader { .. }))
        ));
    }

    #[test]
    fn test_header_map_marks_key_sensitive() {
        let headers = AntisniperClientBuilder::new("secret")
            .default_header("X-Client", "tests")
            .header_map()
            .unwrap();

        let key = headers.get(API_KEY_HEADER).unwrap();
        assert_eq!(key, "secret");
        assert!(key.is_sensitive());
        assert_eq!(headers.get("x-client").unwrap(), "tests");
    }

    #[test]
    fn test_default_header_cannot_replace_key() {
        let headers = AntisniperClientBuilder::new("secret")
            .default_header("APIKEY", "other")
            .header_map()
            .unwrap();

        assert_eq!(headers.get_all(API_KEY_HEADER).iter().count(), 1);
        assert_eq!(headers.get(API_KEY_HEADER).unwrap(), "secret");
    }

    #[test]
    fn test_from_config() {
        let config = AntisniperConfig::new("k").with_base_url("http://localhost:9999/");
        let client = AntisniperClientBuilder::from(&config).build().unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");
    }
}
