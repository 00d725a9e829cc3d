//! 应用主状态

use portfolio_admin_core::NotificationCenter;
use portfolio_admin_core::controllers::{GroupOptions, ListController, UrlListController};
use portfolio_admin_core::types::{PublicProject, Url, UrlGrp};

use super::{FocusPanel, FormState, ModalState, NavigationState, Page};
use crate::message::Command;

/// 应用主状态
#[derive(Debug)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 首页显示的 API 地址
    pub api_url: String,

    // === 各页面状态 ===
    /// 分组列表
    pub url_grps: ListController<UrlGrp>,
    /// URL 列表
    pub urls: UrlListController,
    /// 分组表单
    pub url_grp_form: FormState<UrlGrp>,
    /// URL 表单
    pub url_form: FormState<Url>,
    /// URL 表单的分组选择器
    pub group_options: GroupOptions,
    /// 公开项目
    pub projects: ListController<PublicProject>,

    /// 弹窗状态
    pub modal: ModalState,

    /// 全局通知（API 失败、保存成功）
    pub notifications: NotificationCenter,

    /// 待执行的副作用
    commands: Vec<Command>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(notifications: NotificationCenter, api_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            api_url: api_url.into(),
            url_grps: ListController::new(),
            urls: UrlListController::new(),
            url_grp_form: FormState::default(),
            url_form: FormState::default(),
            group_options: GroupOptions::new(),
            projects: ListController::new(),
            modal: ModalState::new(),
            notifications,
            commands: Vec::new(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 记录一个副作用，由主循环交给 Backend
    pub fn dispatch(&mut self, command: Command) {
        log::debug!("dispatch {command:?}");
        self.commands.push(command);
    }

    /// 取出所有待执行的副作用
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}
