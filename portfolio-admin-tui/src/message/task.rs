//! 后台任务结果

use serde_json::Value;

use portfolio_admin_core::CoreResult;
use portfolio_admin_core::controllers::RequestToken;
use portfolio_admin_core::types::{Envelope, PublicProject, Url, UrlGrp};

use crate::model::Page;

/// Backend 任务的返回值，携带发起时的 token
#[derive(Debug, Clone)]
pub enum TaskResult {
    UrlGrpsLoaded(RequestToken, CoreResult<Vec<UrlGrp>>),
    UrlsLoaded(RequestToken, CoreResult<Vec<Url>>),
    /// URL 列表页的分组
    UrlListGroupsLoaded(RequestToken, CoreResult<Vec<UrlGrp>>),
    GroupOptionsLoaded(RequestToken, CoreResult<Vec<UrlGrp>>),
    ProjectsLoaded(RequestToken, CoreResult<Vec<PublicProject>>),
    UrlGrpDeleted(RequestToken, CoreResult<Envelope<Value>>),
    UrlDeleted(RequestToken, CoreResult<Envelope<Value>>),
    UrlGrpSubmitted(RequestToken, CoreResult<Envelope<Value>>),
    UrlSubmitted(RequestToken, CoreResult<Envelope<Value>>),
    /// 延迟返回的时间到了
    RedirectDue { from: Page, token: RequestToken },
}
