//! Request execution with tracing instrumentation.

use std::fmt;
use std::sync::{PoisonError, RwLock};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn, Span};

use super::API_KEY_HEADER;
use super::builder::AntisniperClientBuilder;
use crate::config::AntisniperConfig;
use crate::error::{AntisniperError, ClientError, ConfigError, StatusError, ValidationError};
use crate::params::QueryParams;

/// Async client for the Antisniper API.
///
/// Owns one `reqwest` connection pool, shared by every call made through
/// this client, and sends the `Apikey` header with each request. Calls may
/// run concurrently from the same `&AntisniperClient`.
///
/// The pool is released by [`close`](Self::close), at the end of
/// [`scoped`](Self::scoped), or when the client is dropped. Any call made
/// after close fails with [`ClientError::Closed`].
///
/// ## Examples
///
/// ```rust,no_run
/// use antisniper::AntisniperClient;
///
/// # async fn example() -> Result<(), antisniper::AntisniperError> {
/// let client = AntisniperClient::new("my-api-key")?;
///
/// let player = client
///     .scoped(async |api: &AntisniperClient| api.convert("Notch").await)
///     .await?;
/// println!("{player}");
/// # Ok(())
/// # }
/// ```
pub struct AntisniperClient {
    http: RwLock<Option<reqwest::Client>>,
    base_url: String,
    default_headers: HeaderMap,
}

impl AntisniperClient {
    /// Creates a new builder for the given API key.
    pub fn builder(api_key: impl Into<String>) -> AntisniperClientBuilder {
        AntisniperClientBuilder::new(api_key)
    }

    /// Creates a client for the production endpoint.
    ///
    /// ## Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be
    /// constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AntisniperError> {
        Self::builder(api_key).build()
    }

    /// Creates a client from loaded configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the configuration holds an invalid key or URL.
    pub fn from_config(config: &AntisniperConfig) -> Result<Self, AntisniperError> {
        AntisniperClientBuilder::from(config).build()
    }

    pub(super) fn from_parts(
        http: reqwest::Client,
        base_url: String,
        default_headers: HeaderMap,
    ) -> Self {
        Self {
            http: RwLock::new(Some(http)),
            base_url,
            default_headers,
        }
    }

    /// Returns the base URL, without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns `true` once the connection pool has been released.
    pub fn is_closed(&self) -> bool {
        self.http
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Releases the connection pool.
    ///
    /// Returns `true` on the call that actually released it and `false` on
    /// every later call. Requests already in flight run to completion.
    pub fn close(&self) -> bool {
        let released = self
            .http
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match released {
            Some(_) => {
                debug!(base_url = %self.base_url, "Antisniper client closed");
                true
            }
            None => false,
        }
    }

    /// Runs `body` with this client, then closes it.
    ///
    /// The client is closed whether `body` succeeds or fails, and its result
    /// is passed through unchanged.
    pub async fn scoped<T>(self, body: impl AsyncFnOnce(&Self) -> T) -> T {
        let output = body(&self).await;
        self.close();
        output
    }

    /// Sends a GET request to `endpoint` with URL-encoded `params`.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The client has been closed
    /// - The request fails at the transport level
    /// - The service answers with anything other than 200
    /// - A 200 body is not valid JSON
    #[instrument(
        name = "antisniper_request",
        skip(self, params),
        fields(
            http.method = "GET",
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn get(&self, endpoint: &str, params: &QueryParams) -> Result<Value, AntisniperError> {
        let http = self.session()?;
        let url = self.url_for(endpoint);
        Span::current().record("http.url", url.as_str());

        let request = http
            .get(&url)
            .headers(self.default_headers.clone())
            .query(params);

        self.dispatch(request).await
    }

    /// Sends a POST request to `endpoint` with `body` encoded as JSON.
    ///
    /// `headers` are layered over the client's default headers, replacing
    /// any with the same name. An `Apikey` entry is ignored with a warning.
    ///
    /// ## Errors
    ///
    /// Same as [`get`](Self::get), plus a configuration error if a header
    /// name or value is invalid.
    #[instrument(
        name = "antisniper_request",
        skip(self, body, headers),
        fields(
            http.method = "POST",
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn post<B>(
        &self,
        endpoint: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> Result<Value, AntisniperError>
    where
        B: Serialize + ?Sized,
    {
        let http = self.session()?;
        let merged = self.merge_headers(headers)?;
        let url = self.url_for(endpoint);
        Span::current().record("http.url", url.as_str());

        let request = http.post(&url).headers(merged).json(body);

        self.dispatch(request).await
    }

    /// Returns a handle to the pool, or `Closed` once it has been released.
    fn session(&self) -> Result<reqwest::Client, ClientError> {
        self.http
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(ClientError::Closed)
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Merges caller headers over the defaults. The caller wins on
    /// collisions, except for the API key.
    fn merge_headers(&self, headers: &[(&str, &str)]) -> Result<HeaderMap, ConfigError> {
        let mut merged = self.default_headers.clone();

        for &(name, value) in headers {
            let header_name =
                HeaderName::try_from(name).map_err(|e| ConfigError::invalid_header(name, e))?;
            if header_name.as_str() == API_KEY_HEADER {
                warn!(header = name, "Ignoring caller-supplied API key header");
                continue;
            }
            let header_value =
                HeaderValue::try_from(value).map_err(|e| ConfigError::invalid_header(name, e))?;
            merged.insert(header_name, header_value);
        }

        Ok(merged)
    }

    async fn dispatch(&self, request: reqwest::RequestBuilder) -> Result<Value, AntisniperError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Antisniper request failed");
            ClientError::Connection(e)
        })?;

        Self::handle_response(response).await
    }

    /// Maps the response status to a result: 200 is parsed as JSON, all
    /// other statuses become a [`StatusError`].
    async fn handle_response(response: reqwest::Response) -> Result<Value, AntisniperError> {
        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if status_code != 200 {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            warn!(status = status_code, %message, "Antisniper API returned an error");
            return Err(StatusError::from_status(status_code, message).into());
        }

        Span::current().record("otel.status_code", "OK");

        let body = response.bytes().await.map_err(ClientError::Connection)?;
        let value = serde_json::from_slice::<Value>(&body).map_err(ValidationError::JsonParse)?;
        debug!(bytes = body.len(), "Antisniper response received");

        Ok(value)
    }
}

impl fmt::Debug for AntisniperClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AntisniperClient")
            .field("base_url", &self.base_url)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AntisniperClient {
        AntisniperClient::builder("test-key")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_sends_key_and_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/mojang"))
            .and(header("apikey", "test-key"))
            .and(query_param("uuid", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let params = QueryParams::new().with("uuid", "abc");
        let result = client.get("/mojang", &params).await.unwrap();

        assert_eq!(result, json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/echo"))
            .and(header("apikey", "test-key"))
            .and(body_json(json!({"players": ["a", "b"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client
            .post("/echo", &json!({"players": ["a", "b"]}), &[])
            .await
            .unwrap();

        assert_eq!(result, json!([1, 2]));
    }

    #[tokio::test]
    async fn test_post_caller_headers_override_defaults() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/headers"))
            .and(header("x-mode", "caller"))
            .and(header("reason", "testing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let client = AntisniperClient::builder("test-key")
            .base_url(mock_server.uri())
            .default_header("X-Mode", "default")
            .build()
            .unwrap();

        let result = client
            .post("/headers", &json!({}), &[("X-Mode", "caller"), ("reason", "testing")])
            .await;

        assert!(result.is_ok(), "Request failed: {:?}", result.err());
    }

    #[test]
    fn test_merge_headers_keeps_api_key() {
        let client = AntisniperClient::builder("real-key")
            .base_url("http://localhost")
            .build()
            .unwrap();

        let merged = client
            .merge_headers(&[("Apikey", "spoofed"), ("reason", "why")])
            .unwrap();

        assert_eq!(merged.get(API_KEY_HEADER).unwrap(), "real-key");
        assert_eq!(merged.get("reason").unwrap(), "why");
    }

    #[test]
    fn test_merge_headers_rejects_invalid_name() {
        let client = AntisniperClient::builder("k")
            .base_url("http://localhost")
            .build()
            .unwrap();

        let result = client.merge_headers(&[("bad header", "v")]);
        assert!(matches!(result, Err(ConfigError::InvalidHeader { .. })));
    }

    #[tokio::test]
    async fn test_non_json_200_is_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/capes"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.get("/capes", &QueryParams::new()).await;

        assert!(matches!(
            result,
            Err(AntisniperError::Validation(ValidationError::JsonParse(_)))
        ));
    }

    #[tokio::test]
    async fn test_other_2xx_is_unknown() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/capes"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.get("/capes", &QueryParams::new()).await;

        assert!(matches!(
            result,
            Err(AntisniperError::Status(StatusError::Unknown { status: 204, .. }))
        ));
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let client = AntisniperClient::builder("k")
            .base_url("http://localhost")
            .build()
            .unwrap();

        assert!(!client.is_closed());
        assert!(client.close());
        assert!(!client.close());
        assert!(client.is_closed());
    }

    #[tokio::test]
    async fn test_get_after_close_fails_without_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        client.close();

        let result = client.get("/capes", &QueryParams::new()).await;
        assert!(matches!(
            result,
            Err(AntisniperError::Client(ClientError::Closed))
        ));
    }

    #[tokio::test]
    async fn test_scoped_closes_after_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/capes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"capes": []})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let (result, closed_inside) = client
            .scoped(async |api: &AntisniperClient| {
                let result = api.get("/capes", &QueryParams::new()).await;
                (result, api.is_closed())
            })
            .await;

        assert!(!closed_inside);
        assert_eq!(result.unwrap(), json!({"capes": []}));
    }

    #[test]
    fn test_debug_hides_key() {
        let client = AntisniperClient::builder("very-secret")
            .base_url("http://localhost")
            .build()
            .unwrap();

        let debug = format!("{client:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("http://localhost"));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_request_is_traced() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let _ = client.get("/user", &QueryParams::new()).await;

        assert!(logs_contain("antisniper_request"));
        assert!(logs_contain("Antisniper API returned an error"));
        assert!(!logs_contain("test-key"));
    }
}
