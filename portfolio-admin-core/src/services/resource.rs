//! 通用资源服务

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{Envelope, Url, UrlGrp};

/// An entity exposed by the API as a CRUD collection.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection path relative to the base URL.
    const ENDPOINT: &'static str;

    fn id(&self) -> i64;
}

impl Resource for UrlGrp {
    const ENDPOINT: &'static str = "portfolio/url-grps";

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Url {
    const ENDPOINT: &'static str = "portfolio/urls";

    fn id(&self) -> i64 {
        self.id
    }
}

/// CRUD operations on one resource collection.
///
/// Every method is a single request; a failed call has already been
/// published to the notification center by the client.
#[async_trait]
pub trait ResourceApi<T>: Send + Sync
where
    T: Send + Sync + 'static,
{
    async fn get_all(&self) -> CoreResult<Envelope<Vec<T>>>;

    async fn get_by_id(&self, id: i64) -> CoreResult<Envelope<T>>;

    /// `data` of the answer is left undecoded: only `isSuccess` counts, and
    /// the API is free to echo the entity, an id, or nothing.
    async fn create(&self, item: &T) -> CoreResult<Envelope<Value>>;

    /// Sends the whole entity; the API matches it by the `id` it carries.
    async fn update(&self, item: &T) -> CoreResult<Envelope<Value>>;

    async fn delete(&self, id: i64) -> CoreResult<Envelope<Value>>;
}

/// [`ResourceApi`] over the shared [`ApiClient`](portfolio_admin_client::ApiClient).
pub struct ResourceService<T> {
    ctx: Arc<ServiceContext>,
    _resource: PhantomData<fn() -> T>,
}

impl<T: Resource> ResourceService<T> {
    /// 创建资源服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            ctx,
            _resource: PhantomData,
        }
    }
}

impl<T> Clone for ResourceService<T> {
    fn clone(&self) -> Self {
        Self {
            ctx: Arc::clone(&self.ctx),
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Resource> ResourceApi<T> for ResourceService<T> {
    async fn get_all(&self) -> CoreResult<Envelope<Vec<T>>> {
        Ok(self.ctx.client.get_all(T::ENDPOINT).await?)
    }

    async fn get_by_id(&self, id: i64) -> CoreResult<Envelope<T>> {
        Ok(self.ctx.client.get_by_id(T::ENDPOINT, id).await?)
    }

    async fn create(&self, item: &T) -> CoreResult<Envelope<Value>> {
        Ok(self.ctx.client.create(T::ENDPOINT, item).await?)
    }

    async fn update(&self, item: &T) -> CoreResult<Envelope<Value>> {
        Ok(self.ctx.client.update(T::ENDPOINT, item).await?)
    }

    async fn delete(&self, id: i64) -> CoreResult<Envelope<Value>> {
        Ok(self.ctx.client.delete(T::ENDPOINT, id).await?)
    }
}

/// URL 分组服务
pub type UrlGrpService = ResourceService<UrlGrp>;

/// URL 服务
pub type UrlService = ResourceService<Url>;
