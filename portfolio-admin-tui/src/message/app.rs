//! 应用主消息

use super::{ContentMessage, FormMessage, ModalMessage, NavigationMessage, TaskResult};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 列表页相关消息
    Content(ContentMessage),

    /// 表单页相关消息
    Form(FormMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务完成
    Task(TaskResult),

    /// 返回上一页
    GoBack,

    /// 重新加载当前页面
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 关闭全局通知
    DismissNotification,

    /// 无操作
    Noop,
}
