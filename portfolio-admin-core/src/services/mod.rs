//! 业务逻辑服务层

mod portfolio_service;
mod resource;

pub use portfolio_service::PortfolioService;
pub use resource::{Resource, ResourceApi, ResourceService, UrlGrpService, UrlService};

use std::sync::Arc;

use portfolio_admin_client::{ApiClient, ClientConfig};

use crate::error::CoreResult;
use crate::notification::NotificationCenter;

/// 服务上下文 - 持有所有依赖
///
/// 平台层创建此上下文，所有服务共享同一个 `ApiClient`。
pub struct ServiceContext {
    /// API 客户端
    pub client: ApiClient,
    /// 全局通知状态（客户端失败时写入）
    pub notifications: NotificationCenter,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(client: ApiClient, notifications: NotificationCenter) -> Self {
        Self {
            client,
            notifications,
        }
    }

    /// Build the reqwest-backed client, wired to publish failures into `notifications`.
    pub fn connect(config: ClientConfig, notifications: NotificationCenter) -> CoreResult<Self> {
        let client = ApiClient::new(config, Arc::new(notifications.clone()))?;
        Ok(Self::new(client, notifications))
    }
}
