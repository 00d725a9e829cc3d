//! # portfolio-admin-client
//!
//! Typed client for the portfolio administration API.
//!
//! Every endpoint answers with the same envelope:
//!
//! ```json
//! { "isSuccess": true, "statusCode": 200, "message": null, "data": [] }
//! ```
//!
//! The client hides the two ways the API can fail behind a single
//! [`Result<T, ApiError>`](ApiError):
//!
//! - **transport failures**: no response, or a non-2xx status
//!   ([`ApiError::NetworkError`], [`ApiError::HttpStatus`])
//! - **business failures**: a 2xx envelope with `isSuccess: false`
//!   ([`ApiError::Business`])
//!
//! Each failed call also publishes its message to a [`NotificationSink`],
//! exactly once.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use portfolio_admin_client::{ApiClient, ClientConfig, Envelope, LogOnlySink};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("https://api.example.com", "my-api-key")?;
//!     let client = ApiClient::new(config, Arc::new(LogOnlySink))?;
//!
//!     let groups: Envelope<Vec<serde_json::Value>> =
//!         client.get_all("portfolio/url-grps").await?;
//!     for group in groups.data_or_default() {
//!         println!("{group}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Requests
//!
//! | Method | HTTP | Path |
//! |--------|------|------|
//! | [`ApiClient::get_all`] | `GET` | `{base}/{endpoint}` |
//! | [`ApiClient::get_by_id`] | `GET` | `{base}/{endpoint}/{id}` |
//! | [`ApiClient::create`] | `POST` | `{base}/{endpoint}` |
//! | [`ApiClient::update`] | `PUT` | `{base}/{endpoint}` |
//! | [`ApiClient::delete`] | `DELETE` | `{base}/{endpoint}/{id}` |
//!
//! All requests carry `ApiKey` and `Content-Type: application/json` headers
//! and are attempted once: there is no retry and no timeout.

mod client;
mod config;
mod envelope;
mod error;
mod http_client;
mod notify;
mod unify;
mod utils;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use envelope::Envelope;
pub use error::{
    ApiError, CONNECTION_ERROR_MESSAGE, DEFAULT_BUSINESS_MESSAGE, DEFAULT_BUSINESS_STATUS,
    Result, UNEXPECTED_ERROR_MESSAGE,
};
pub use http_client::{ApiRequest, HttpMethod, HttpTransport, RawResponse, ReqwestTransport};
pub use notify::{LogOnlySink, NotificationSink};
pub use unify::{Inspection, check_response, inspect_body};

// Re-export log sanitizer for downstream crates
pub use utils::log_sanitizer;
