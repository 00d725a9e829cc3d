//! 翻译键定义
//!
//! ## 分类标准
//!
//! 1. 文本归属于它出现的 UI 组件
//! 2. 所有弹窗的内容放在 `modal.*` 下
//! 3. 表单页共用 `form.*`
//! 4. 跨组件复用归 `common.*`，键盘提示归 `hints.*`

/// 所有翻译文本的根结构
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub nav: NavTexts,
    pub home: HomeTexts,
    pub url_grps: UrlGrpsTexts,
    pub urls: UrlsTexts,
    pub projects: ProjectsTexts,
    pub form: FormTexts,
    pub modal: ModalTexts,
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub save: &'static str,
}

// ============================================================================
// 键盘提示（状态栏）
// ============================================================================

pub struct HintTexts {
    pub switch_panel: &'static str,
    pub navigate: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub reload: &'static str,
    pub filter: &'static str,
    pub back: &'static str,
    pub quit: &'static str,
    pub next_field: &'static str,
    pub toggle: &'static str,
    pub change_group: &'static str,
    pub submit: &'static str,
    pub close: &'static str,
    pub help: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub url_grps: &'static str,
    pub urls: &'static str,
    pub projects: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

pub struct HomeTexts {
    pub welcome: &'static str,
    pub welcome_desc: &'static str,
    pub api_url: &'static str,
    pub get_started: &'static str,
}

pub struct UrlGrpsTexts {
    pub title: &'static str,
    pub empty: &'static str,
    pub col_id: &'static str,
    pub col_name: &'static str,
    pub col_status: &'static str,
}

pub struct UrlsTexts {
    pub title: &'static str,
    pub empty: &'static str,
    pub col_name: &'static str,
    pub col_link: &'static str,
    pub col_group: &'static str,
    pub col_status: &'static str,
    pub filter: &'static str,
    pub all_groups: &'static str,
    pub unknown_group: &'static str,
}

pub struct ProjectsTexts {
    pub title: &'static str,
    pub empty: &'static str,
    pub count: &'static str,
}

pub struct FormTexts {
    pub new_group: &'static str,
    pub edit_group: &'static str,
    pub new_url: &'static str,
    pub edit_url: &'static str,
    pub name: &'static str,
    pub link: &'static str,
    pub group: &'static str,
    pub enabled: &'static str,
    pub select_group: &'static str,
    pub loading_groups: &'static str,
    pub submitting: &'static str,
    pub redirecting: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

pub struct ModalTexts {
    pub confirm_delete_title: &'static str,
    pub confirm_delete_group: &'static str,
    pub confirm_delete_url: &'static str,
    pub notification_error: &'static str,
    pub notification_success: &'static str,
    pub press_to_close: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    /// (按键, 说明)
    pub lines: &'static [(&'static str, &'static str)],
}
