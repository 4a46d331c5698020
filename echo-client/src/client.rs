//! HTTP client for the EchoOS backend.

use std::time::Duration;

use echo_types::{ChatStream, ClientError};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{map_http_status, map_reqwest_error};
use crate::streaming::stream_events;
use crate::types::ChatRequestBody;

/// Default EchoOS API base URL.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable consulted by [`EchoClient::from_env`].
const BASE_URL_ENV: &str = "ECHO_API_URL";

/// Client for the EchoOS HTTP API.
///
/// Covers the streaming chat endpoint plus the REST endpoints for tasks,
/// memories, agents, and the twin profile.
///
/// # Example
///
/// ```no_run
/// use echo_client::EchoClient;
///
/// let client = EchoClient::new()
///     .base_url("http://localhost:8000")
///     .timeout(std::time::Duration::from_secs(30));
/// ```
pub struct EchoClient {
    /// API base URL (override for testing or a remote deployment).
    pub(crate) base_url: String,
    /// Optional per-request timeout. When unset, requests wait indefinitely,
    /// which is what an open-ended response stream needs.
    pub(crate) timeout: Option<Duration>,
    /// Shared HTTP client.
    pub(crate) client: reqwest::Client,
}

impl EchoClient {
    /// Create a new client with sensible defaults.
    ///
    /// Default base URL: `http://localhost:8000`.
    /// No authentication required (the backend is local-first).
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: None,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from the environment.
    ///
    /// Reads the base URL from `ECHO_API_URL`, falling back to the default
    /// when the variable is not set.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new().base_url(base_url)
    }

    /// Override the API base URL.
    ///
    /// Useful for testing with a local mock server.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a per-request timeout.
    ///
    /// Applies to every request, including the streaming chat request, where
    /// it bounds the whole response rather than individual chunks.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the chat endpoint URL.
    pub(crate) fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    /// Build the URL for a non-chat endpoint path.
    pub(crate) fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a chat message and open the response stream.
    ///
    /// The returned [`ChatStream`] yields one event per protocol frame. The
    /// input is sent exactly as given; callers decide what counts as empty.
    pub async fn chat_stream(&self, input: &str) -> Result<ChatStream, ClientError> {
        let url = self.chat_url();
        tracing::debug!(url = %url, "sending chat request");

        let request = self.client.post(&url).json(&ChatRequestBody { input });
        let response = self.execute(request).await?;
        Ok(stream_events(response))
    }

    /// GET a JSON resource.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ClientError> {
        let url = self.endpoint_url(path);
        tracing::debug!(url = %url, "sending GET request");

        let response = self.execute(self.client.get(&url)).await?;
        decode_json(response).await
    }

    /// GET a JSON resource with query parameters.
    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = self.endpoint_url(path);
        tracing::debug!(url = %url, "sending GET request");

        let response = self.execute(self.client.get(&url).query(query)).await?;
        decode_json(response).await
    }

    /// POST a JSON body and decode the JSON response.
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ClientError> {
        let url = self.endpoint_url(path);
        tracing::debug!(url = %url, "sending POST request");

        let response = self.execute(self.client.post(&url).json(body)).await?;
        decode_json(response).await
    }

    /// PUT a JSON body and decode the JSON response.
    pub(crate) async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ClientError> {
        let url = self.endpoint_url(path);
        tracing::debug!(url = %url, "sending PUT request");

        let response = self.execute(self.client.put(&url).json(body)).await?;
        decode_json(response).await
    }

    /// Apply the configured timeout, send, and check the HTTP status.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let request = match self.timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.map_err(map_reqwest_error)?;
            return Err(map_http_status(status, &body_text));
        }
        Ok(response)
    }
}

impl Default for EchoClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a successful response body as JSON.
async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
