//! Komfyrvakt HTTP Client
//!
//! A typed client for the Komfyrvakt logging and analysis API.
//!
//! Every method performs exactly one authenticated request: it builds the URL
//! from the configured base URL, attaches the caller's API key as a bearer
//! token, and decodes the JSON response (unwrapping the service's
//! `{"status": ..., "<payload>": ...}` envelopes where the endpoint uses them).
//! The client keeps no state between calls and never retries.
//!
//! # Example
//!
//! ```no_run
//! use komfyr_client::KomfyrClient;
//! use komfyr_core::dto::log::{LogQuery, NewLog};
//! use komfyr_core::domain::log::LogLevel;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = KomfyrClient::new("http://localhost:8080/api");
//!     let key = "kmf_example";
//!
//!     client
//!         .create_log(key, &NewLog::new("Temperature too high").with_level(LogLevel::Warning))
//!         .await?;
//!
//!     let warnings = client
//!         .list_logs(key, &LogQuery::new().level(LogLevel::Warning).limit(20))
//!         .await?;
//!     println!("{} warning(s)", warnings.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod analysis;
mod logs;
mod service;
mod stats;

#[cfg(test)]
mod mock;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use reqwest::{Method, StatusCode};
pub use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// HTTP client for the Komfyrvakt API
///
/// Cheap to clone; clones share the underlying connection pool. Calls made
/// concurrently are fully independent.
#[derive(Debug, Clone)]
pub struct KomfyrClient {
    /// Base URL of the API, including the `/api` root (e.g. "http://localhost:8080/api")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl Default for KomfyrClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl KomfyrClient {
    /// Create a client for the API at `base_url`
    ///
    /// `base_url` must include the `/api` root, since endpoint paths such as
    /// `/logs` are appended to it verbatim. A trailing `/` is dropped. The
    /// default `reqwest` client applies no request timeout.
    ///
    /// ```
    /// use komfyr_client::{DEFAULT_BASE_URL, KomfyrClient};
    ///
    /// let client = KomfyrClient::new("https://logs.example.com/api/");
    /// assert_eq!(client.base_url(), "https://logs.example.com/api");
    /// assert_eq!(KomfyrClient::default().base_url(), DEFAULT_BASE_URL);
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client that sends through a caller-configured `reqwest::Client`
    ///
    /// Use this to bound how long a call may take: the executor itself never
    /// times out or retries, so a deadline has to live on the transport.
    ///
    /// ```
    /// use komfyr_client::KomfyrClient;
    /// use std::time::Duration;
    ///
    /// # fn main() -> Result<(), reqwest::Error> {
    /// let transport = reqwest::Client::builder()
    ///     .connect_timeout(Duration::from_secs(5))
    ///     .timeout(Duration::from_secs(20))
    ///     .build()?;
    /// let client = KomfyrClient::with_client("http://localhost:8080/api", transport);
    /// # let _ = client;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Executor
    // =============================================================================

    /// Build an authenticated request without sending it
    ///
    /// The URL is the base URL followed by `path`, plus the form-encoded query
    /// pairs when there are any. `Authorization: Bearer <api_key>` and
    /// `Content-Type: application/json` are set last, so extra headers in
    /// `options` can add new names but never replace these two.
    pub fn build_request(
        &self,
        api_key: &str,
        path: &str,
        options: RequestOptions,
    ) -> Result<reqwest::Request> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ClientError::InvalidRequest(format!("invalid URL for '{}': {}", path, e)))?;

        if !options.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&options.query);
        }

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
            ClientError::InvalidRequest("API key contains characters not allowed in a header".into())
        })?;
        bearer.set_sensitive(true);

        let mut headers = options.headers;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = self.client.request(options.method, url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        Ok(builder.build()?)
    }

    /// Send one authenticated request and decode the JSON response as `T`
    ///
    /// Non-success responses become [`ClientError::Api`]; see
    /// [`error_message`] for how the message is chosen.
    pub async fn request<T: DeserializeOwned>(
        &self,
        api_key: &str,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let request = self.build_request(api_key, path, options)?;
        debug!(method = %request.method(), path, "sending request");

        let response = self.client.execute(request).await?;
        self.handle_response(response).await
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize the body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            let message = match response.bytes().await {
                Ok(body) => error_message(status, &body),
                Err(_) => fallback_message(status),
            };
            warn!(status = status.as_u16(), %message, "request rejected by service");
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| ClientError::Decode(format!("Failed to parse JSON response: {}", e)))
    }
}

/// Options for a single request
///
/// Defaults to a GET with no query, no body and no extra headers.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub query: Vec<(String, String)>,
    /// Already-serialized JSON body
    pub body: Option<String>,
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            query: Vec::new(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// Append query parameters
    pub fn query<K, V, I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set an already-serialized JSON body
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON body
    pub fn json<T: serde::Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let body = serde_json::to_string(value)
            .map_err(|e| ClientError::InvalidRequest(format!("Failed to serialize body: {}", e)))?;
        Ok(self.body(body))
    }

    /// Add an extra header
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Message for a non-success response body
///
/// Uses the `detail` field of a JSON object body when it is a non-empty
/// string. Any other non-null `detail` (such as a list of validation errors)
/// is rendered as compact JSON. Bodies that are not JSON objects, or carry no
/// usable `detail`, yield `HTTP <status>`.
pub fn error_message(status: StatusCode, body: &[u8]) -> String {
    let body: Option<serde_json::Value> = serde_json::from_slice(body).ok();
    let detail = body
        .as_ref()
        .and_then(serde_json::Value::as_object)
        .and_then(|object| object.get("detail"));

    match detail {
        Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
        Some(serde_json::Value::String(_)) | Some(serde_json::Value::Null) | None => {
            fallback_message(status)
        }
        Some(other) => other.to_string(),
    }
}

fn fallback_message(status: StatusCode) -> String {
    format!("HTTP {}", status.as_u16())
}

/// Take `key` out of an envelope object and decode it
///
/// A missing or null key is a [`ClientError::MissingField`]; the payload is
/// never defaulted.
pub(crate) fn unwrap_envelope<T: DeserializeOwned>(
    mut envelope: serde_json::Value,
    key: &str,
) -> Result<T> {
    let payload = envelope
        .get_mut(key)
        .map(serde_json::Value::take)
        .filter(|v| !v.is_null())
        .ok_or_else(|| ClientError::MissingField(key.to_string()))?;

    serde_json::from_value(payload)
        .map_err(|e| ClientError::Decode(format!("Invalid '{}' field: {}", key, e)))
}
