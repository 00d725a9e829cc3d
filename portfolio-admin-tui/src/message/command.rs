//! 副作用请求
//!
//! Update 层不直接做 I/O，而是把要做的事记录为 [`Command`]，
//! 主循环再交给 Backend 执行。

use std::time::Duration;

use portfolio_admin_core::controllers::{RequestToken, Submission};
use portfolio_admin_core::types::{Url, UrlGrp};

use crate::model::Page;

/// 需要 Backend 执行的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadUrlGrps(RequestToken),
    /// URL 和分组并行加载，共用一个 token
    LoadUrls(RequestToken),
    /// URL 表单的分组选择器
    LoadGroupOptions(RequestToken),
    LoadProjects(RequestToken),
    DeleteUrlGrp { token: RequestToken, id: i64 },
    DeleteUrl { token: RequestToken, id: i64 },
    SubmitUrlGrp(Submission<UrlGrp>),
    SubmitUrl(Submission<Url>),
    /// `delay` 之后从表单页 `from` 返回列表
    Redirect {
        from: Page,
        token: RequestToken,
        delay: Duration,
    },
}
