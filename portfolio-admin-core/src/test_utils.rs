//! 测试辅助模块
//!
//! 提供内存中的假后端和便捷的测试工厂方法。

#![allow(clippy::panic)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use portfolio_admin_client::{ApiClient, ApiRequest, ClientConfig, HttpTransport, RawResponse};
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};

use crate::error::{ApiError, CoreError, CoreResult};
use crate::notification::NotificationCenter;
use crate::services::{Resource, ResourceApi, ServiceContext};
use crate::types::{Envelope, Url, UrlGrp};

pub fn group(id: i64, name: &str) -> UrlGrp {
    UrlGrp {
        id,
        name: name.to_string(),
        is_enable: true,
    }
}

pub fn url(id: i64, name: &str, id_url_grp: i64) -> Url {
    Url {
        id,
        name: name.to_string(),
        link: format!("https://example.com/{id}"),
        is_enable: true,
        id_url_grp,
    }
}

// ===== EchoBackend =====

/// In-memory API: stores what it is given and echoes it back in envelopes.
pub struct EchoBackend {
    groups: RwLock<Vec<UrlGrp>>,
    urls: RwLock<Vec<Url>>,
    next_id: AtomicI64,
    /// 如果 Some，下一次调用返回此业务错误
    fail_next: RwLock<Option<String>>,
    calls: AtomicUsize,
    get_all_calls: AtomicUsize,
}

impl EchoBackend {
    pub fn with_groups(groups: Vec<UrlGrp>) -> Self {
        Self {
            groups: RwLock::new(groups),
            urls: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(100),
            fail_next: RwLock::new(None),
            calls: AtomicUsize::new(0),
            get_all_calls: AtomicUsize::new(0),
        }
    }

    pub async fn seed_urls(&self, urls: Vec<Url>) {
        *self.urls.write().await = urls;
    }

    pub async fn fail_next(&self, message: &str) {
        *self.fail_next.write().await = Some(message.to_string());
    }

    pub async fn groups(&self) -> Vec<UrlGrp> {
        self.groups.read().await.clone()
    }

    pub async fn urls(&self) -> Vec<Url> {
        self.urls.read().await.clone()
    }

    /// Requests received, of any kind.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn get_all_calls(&self) -> usize {
        self.get_all_calls.load(Ordering::SeqCst)
    }

    async fn enter<T: Resource>(&self) -> CoreResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_next.write().await.take() {
            Some(message) => Err(CoreError::Api(ApiError::Business {
                endpoint: T::ENDPOINT.to_string(),
                status_code: 400,
                message,
            })),
            None => Ok(()),
        }
    }

    fn not_found<T: Resource>(id: i64) -> CoreError {
        CoreError::Api(ApiError::Business {
            endpoint: T::ENDPOINT.to_string(),
            status_code: 404,
            message: format!("No existe el registro {id}"),
        })
    }
}

fn echo<T: Resource>(item: &T) -> Envelope<Value> {
    Envelope::success(serde_json::to_value(item).unwrap_or(Value::Null))
}

async fn get_all_in<T: Resource>(
    backend: &EchoBackend,
    store: &RwLock<Vec<T>>,
) -> CoreResult<Envelope<Vec<T>>> {
    backend.enter::<T>().await?;
    backend.get_all_calls.fetch_add(1, Ordering::SeqCst);
    Ok(Envelope::success(store.read().await.clone()))
}

async fn get_by_id_in<T: Resource>(
    backend: &EchoBackend,
    store: &RwLock<Vec<T>>,
    id: i64,
) -> CoreResult<Envelope<T>> {
    backend.enter::<T>().await?;
    store
        .read()
        .await
        .iter()
        .find(|item| item.id() == id)
        .cloned()
        .map(Envelope::success)
        .ok_or_else(|| EchoBackend::not_found::<T>(id))
}

async fn delete_in<T: Resource>(
    backend: &EchoBackend,
    store: &RwLock<Vec<T>>,
    id: i64,
) -> CoreResult<Envelope<Value>> {
    backend.enter::<T>().await?;
    let mut items = store.write().await;
    let before = items.len();
    items.retain(|item| item.id() != id);
    if items.len() == before {
        return Err(EchoBackend::not_found::<T>(id));
    }
    Ok(Envelope::success(Value::Bool(true)))
}

#[async_trait]
impl ResourceApi<UrlGrp> for EchoBackend {
    async fn get_all(&self) -> CoreResult<Envelope<Vec<UrlGrp>>> {
        get_all_in(self, &self.groups).await
    }

    async fn get_by_id(&self, id: i64) -> CoreResult<Envelope<UrlGrp>> {
        get_by_id_in(self, &self.groups, id).await
    }

    async fn create(&self, item: &UrlGrp) -> CoreResult<Envelope<Value>> {
        self.enter::<UrlGrp>().await?;
        let created = UrlGrp {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            ..item.clone()
        };
        let echoed = echo(&created);
        self.groups.write().await.push(created);
        Ok(echoed)
    }

    async fn update(&self, item: &UrlGrp) -> CoreResult<Envelope<Value>> {
        self.enter::<UrlGrp>().await?;
        let mut groups = self.groups.write().await;
        let slot = groups
            .iter_mut()
            .find(|g| g.id == item.id)
            .ok_or_else(|| Self::not_found::<UrlGrp>(item.id))?;
        *slot = item.clone();
        Ok(echo(item))
    }

    async fn delete(&self, id: i64) -> CoreResult<Envelope<Value>> {
        delete_in(self, &self.groups, id).await
    }
}

#[async_trait]
impl ResourceApi<Url> for EchoBackend {
    async fn get_all(&self) -> CoreResult<Envelope<Vec<Url>>> {
        get_all_in(self, &self.urls).await
    }

    async fn get_by_id(&self, id: i64) -> CoreResult<Envelope<Url>> {
        get_by_id_in(self, &self.urls, id).await
    }

    async fn create(&self, item: &Url) -> CoreResult<Envelope<Value>> {
        self.enter::<Url>().await?;
        let created = Url {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            ..item.clone()
        };
        let echoed = echo(&created);
        self.urls.write().await.push(created);
        Ok(echoed)
    }

    async fn update(&self, item: &Url) -> CoreResult<Envelope<Value>> {
        self.enter::<Url>().await?;
        let mut urls = self.urls.write().await;
        let slot = urls
            .iter_mut()
            .find(|u| u.id == item.id)
            .ok_or_else(|| Self::not_found::<Url>(item.id))?;
        *slot = item.clone();
        Ok(echo(item))
    }

    async fn delete(&self, id: i64) -> CoreResult<Envelope<Value>> {
        delete_in(self, &self.urls, id).await
    }
}

// ===== StubTransport =====

/// Transport replaying canned `(status, body)` pairs and recording requests.
#[derive(Default)]
pub struct StubTransport {
    responses: Mutex<VecDeque<(u16, String)>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub async fn respond(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .await
            .push_back((status, body.to_string()));
    }

    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let endpoint = request.endpoint.clone();
        self.requests.lock().await.push(request);
        match self.responses.lock().await.pop_front() {
            Some((status, body)) => Ok(RawResponse { status, body }),
            None => Err(ApiError::NetworkError {
                endpoint,
                detail: "no canned response".to_string(),
            }),
        }
    }
}

/// Service context over a stub transport, wired to a fresh notification center.
pub fn stub_context() -> (Arc<ServiceContext>, Arc<StubTransport>, NotificationCenter) {
    let transport = Arc::new(StubTransport::default());
    let notifications = NotificationCenter::new();
    let config = ClientConfig::new("http://localhost:5000/api", "test-key")
        .unwrap_or_else(|e| panic!("invalid test config: {e}"));
    let client = ApiClient::with_transport(
        config,
        transport.clone(),
        Arc::new(notifications.clone()),
    );
    (
        Arc::new(ServiceContext::new(client, notifications.clone())),
        transport,
        notifications,
    )
}
