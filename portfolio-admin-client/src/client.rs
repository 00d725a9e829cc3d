//! Typed API client

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http_client::{
    ApiRequest, HttpMethod, HttpTransport, RawResponse, ReqwestTransport, parse_json,
};
use crate::notify::NotificationSink;
use crate::unify::check_response;

/// Generic CRUD client for the administration API.
///
/// Every method performs one HTTP exchange, runs the body through the
/// failure-unification layer, and decodes it into `R` (normally
/// [`Envelope<_>`](crate::Envelope)). A failed call returns `Err` and has
/// already published its message to the [`NotificationSink`], exactly once.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    notifier: Arc<dyn NotificationSink>,
}

impl ApiClient {
    /// Client over the default `reqwest` transport.
    pub fn new(config: ClientConfig, notifier: Arc<dyn NotificationSink>) -> Result<Self> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport), notifier))
    }

    /// Client over a caller supplied transport.
    #[must_use]
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            config,
            transport,
            notifier,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET {base}/{endpoint}`
    pub async fn get_all<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send(HttpMethod::Get, endpoint, None, None).await
    }

    /// `GET {base}/{endpoint}/{id}`
    pub async fn get_by_id<R>(&self, endpoint: &str, id: i64) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send(HttpMethod::Get, endpoint, Some(id), None).await
    }

    /// `POST {base}/{endpoint}` with `body` as JSON.
    pub async fn create<T, R>(&self, endpoint: &str, body: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = self.encode(endpoint, body)?;
        self.send(HttpMethod::Post, endpoint, None, Some(body)).await
    }

    /// `PUT {base}/{endpoint}` with the whole entity as JSON.
    ///
    /// The API identifies the entity by the `id` inside the body, not by path.
    pub async fn update<T, R>(&self, endpoint: &str, body: &T) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = self.encode(endpoint, body)?;
        self.send(HttpMethod::Put, endpoint, None, Some(body)).await
    }

    /// `DELETE {base}/{endpoint}/{id}`
    pub async fn delete<R>(&self, endpoint: &str, id: i64) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send(HttpMethod::Delete, endpoint, Some(id), None).await
    }

    fn encode<T>(&self, endpoint: &str, body: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_string(body).map_err(|e| {
            self.report(ApiError::SerializationError {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            })
        })
    }

    async fn send<R>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        id: Option<i64>,
        body: Option<String>,
    ) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = ApiRequest {
            method,
            url: self.config.url_for(endpoint, id),
            endpoint: endpoint.to_string(),
            api_key: self.config.api_key().to_string(),
            body,
        };

        self.exchange(request).await.map_err(|e| self.report(e))
    }

    async fn exchange<R>(&self, request: ApiRequest) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let endpoint = request.endpoint.clone();
        let RawResponse { status, body } = self.transport.execute(request).await?;
        check_response(&endpoint, status, &body)?;
        parse_json(&body, &endpoint)
    }

    /// Log a failure and publish it. Every error leaving this client passes
    /// through here exactly once.
    fn report(&self, error: ApiError) -> ApiError {
        if error.is_expected() {
            log::warn!("{error}");
        } else {
            log::error!("{error}");
        }
        self.notifier.notify_error(&error.user_message());
        error
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
