//! 页面路由

use super::NavItemId;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// URL 分组列表
    UrlGrps,
    /// 新建 / 编辑分组
    UrlGrpForm,
    /// URL 列表
    Urls,
    /// 新建 / 编辑 URL
    UrlForm,
    /// 公开项目（只读）
    Projects,
}

impl Page {
    /// 是否是表单页面
    pub fn is_form(self) -> bool {
        matches!(self, Page::UrlGrpForm | Page::UrlForm)
    }

    /// 表单页返回的列表页
    pub fn parent(self) -> Option<Page> {
        match self {
            Page::UrlGrpForm => Some(Page::UrlGrps),
            Page::UrlForm => Some(Page::Urls),
            _ => None,
        }
    }

    /// 页面所属的导航项
    pub fn nav_id(self) -> NavItemId {
        match self {
            Page::Home => NavItemId::Home,
            Page::UrlGrps | Page::UrlGrpForm => NavItemId::UrlGrps,
            Page::Urls | Page::UrlForm => NavItemId::Urls,
            Page::Projects => NavItemId::Projects,
        }
    }
}
