//! 公开项目服务（只读）

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::PublicProject;

const ENDPOINT: &str = "portfolio/public-projects";

/// Read-only access to the public project list.
///
/// Unlike the CRUD endpoints this one answers with a bare JSON array, which
/// the failure-unification layer passes through untouched.
#[derive(Clone)]
pub struct PortfolioService {
    ctx: Arc<ServiceContext>,
}

impl PortfolioService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn get_all(&self) -> CoreResult<Vec<PublicProject>> {
        Ok(self.ctx.client.get_all(ENDPOINT).await?)
    }
}
