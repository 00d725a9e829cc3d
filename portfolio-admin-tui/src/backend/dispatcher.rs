//! 副作用执行器
//!
//! 每个 [`Command`] 在 tokio 运行时上起一个任务，
//! 结果通过 channel 以 [`TaskResult`] 的形式送回主循环。

use std::future::Future;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use portfolio_admin_core::ServiceContext;
use portfolio_admin_core::controllers::fetch_list;
use portfolio_admin_core::services::{PortfolioService, ResourceApi, UrlGrpService, UrlService};

use crate::message::{Command, TaskResult};

/// 后台服务
pub struct Backend {
    url_grps: UrlGrpService,
    urls: UrlService,
    projects: PortfolioService,
    tx: UnboundedSender<TaskResult>,
    runtime: Handle,
}

impl Backend {
    pub fn new(ctx: Arc<ServiceContext>, tx: UnboundedSender<TaskResult>, runtime: Handle) -> Self {
        Self {
            url_grps: UrlGrpService::new(ctx.clone()),
            urls: UrlService::new(ctx.clone()),
            projects: PortfolioService::new(ctx),
            tx,
            runtime,
        }
    }

    /// 执行一个副作用，不等待结果
    pub fn dispatch(&self, command: Command) {
        match command {
            Command::LoadUrlGrps(token) => {
                let api = self.url_grps.clone();
                self.spawn(async move { TaskResult::UrlGrpsLoaded(token, fetch_list(&api).await) });
            }
            Command::LoadUrls(token) => {
                let urls = self.urls.clone();
                self.spawn(async move { TaskResult::UrlsLoaded(token, fetch_list(&urls).await) });
                let groups = self.url_grps.clone();
                self.spawn(async move {
                    TaskResult::UrlListGroupsLoaded(token, fetch_list(&groups).await)
                });
            }
            Command::LoadGroupOptions(token) => {
                let api = self.url_grps.clone();
                self.spawn(async move {
                    TaskResult::GroupOptionsLoaded(token, fetch_list(&api).await)
                });
            }
            Command::LoadProjects(token) => {
                let api = self.projects.clone();
                self.spawn(async move { TaskResult::ProjectsLoaded(token, api.get_all().await) });
            }
            Command::DeleteUrlGrp { token, id } => {
                let api = self.url_grps.clone();
                self.spawn(async move { TaskResult::UrlGrpDeleted(token, api.delete(id).await) });
            }
            Command::DeleteUrl { token, id } => {
                let api = self.urls.clone();
                self.spawn(async move { TaskResult::UrlDeleted(token, api.delete(id).await) });
            }
            Command::SubmitUrlGrp(submission) => {
                let api = self.url_grps.clone();
                self.spawn(async move {
                    let result = submission.dispatch(&api).await;
                    TaskResult::UrlGrpSubmitted(submission.token, result)
                });
            }
            Command::SubmitUrl(submission) => {
                let api = self.urls.clone();
                self.spawn(async move {
                    let result = submission.dispatch(&api).await;
                    TaskResult::UrlSubmitted(submission.token, result)
                });
            }
            Command::Redirect { from, token, delay } => {
                self.spawn(async move {
                    tokio::time::sleep(delay).await;
                    TaskResult::RedirectDue { from, token }
                });
            }
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = TaskResult> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            // 主循环已退出时接收端被丢弃，结果无人处理
            if tx.send(task.await).is_err() {
                log::debug!("task finished after the UI closed");
            }
        });
    }
}
