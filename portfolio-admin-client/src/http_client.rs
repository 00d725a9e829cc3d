//! HTTP transport
//!
//! The client talks to the network only through [`HttpTransport`], so tests
//! can replace the wire with an in-memory stub.
//!
//! # design principles
//! - **One attempt per call** - no retry, no backoff, no timeout
//! - **Status is data** - non-2xx responses are returned, not raised; the
//!   unification layer decides what a status means
//! - **Only connection failures are errors** here

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::utils::log_sanitizer::{mask_secret, truncate_for_log};

/// HTTP verbs used by the administration API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Upper-case verb, for logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Absolute URL.
    pub url: String,
    /// Endpoint name, used in errors and logs.
    pub endpoint: String,
    /// Value of the `ApiKey` header.
    pub api_key: String,
    /// JSON body, already serialized.
    pub body: Option<String>,
}

/// Status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one request and returns whatever the server answered.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute `request` once.
    ///
    /// Returns `Err(ApiError::NetworkError)` only when no response was
    /// received or its body could not be read.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// [`HttpTransport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with a fresh `reqwest::Client`.
    pub fn new() -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::InvalidConfig {
                detail: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let ApiRequest {
            method,
            url,
            endpoint,
            api_key,
            body,
        } = request;

        log::debug!(
            "[{endpoint}] {method} {url} (ApiKey: {})",
            mask_secret(&api_key)
        );

        let builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        }
        .header("ApiKey", api_key)
        .header(reqwest::header::CONTENT_TYPE, "application/json");

        let builder = match body {
            Some(body) => {
                log::debug!("[{endpoint}] Request Body: {}", truncate_for_log(&body));
                builder.body(body)
            }
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::NetworkError {
                endpoint: endpoint.clone(),
                detail: e.to_string(),
            })?;

        let status = response.status().as_u16();
        log::debug!("[{endpoint}] Response Status: {status}");

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                endpoint: endpoint.clone(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[{endpoint}] Response Body: {}", truncate_for_log(&body));

        Ok(RawResponse { status, body })
    }
}

/// Parse a JSON response body into `T`.
pub(crate) fn parse_json<T>(response_text: &str, endpoint: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(response_text).map_err(|e| {
        log::error!("[{endpoint}] JSON parse failed: {e}");
        log::error!("[{endpoint}] Raw response: {}", truncate_for_log(response_text));
        ApiError::ParseError {
            endpoint: endpoint.to_string(),
            detail: e.to_string(),
        }
    })
}
