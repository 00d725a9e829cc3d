//! 导航栏状态

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Home,
    UrlGrps,
    Urls,
    Projects,
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

/// 导航状态
#[derive(Debug)]
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Home,
                    icon: "⌂",
                },
                NavItem {
                    id: NavItemId::UrlGrps,
                    icon: "▦",
                },
                NavItem {
                    id: NavItemId::Urls,
                    icon: "⇗",
                },
                NavItem {
                    id: NavItemId::Projects,
                    icon: "★",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
    }

    /// 高亮指定导航项（页面跳转后同步导航栏）
    pub fn select_id(&mut self, id: NavItemId) {
        if let Some(index) = self.items.iter().position(|item| item.id == id) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut nav = NavigationState::new();
        nav.select_previous();
        assert_eq!(nav.current_id(), Some(NavItemId::Home));
        nav.select_last();
        nav.select_next();
        assert_eq!(nav.current_id(), Some(NavItemId::Projects));
        nav.select_first();
        assert_eq!(nav.selected, 0);
    }

    #[test]
    fn select_id_follows_page() {
        let mut nav = NavigationState::new();
        nav.select_id(NavItemId::Urls);
        assert_eq!(nav.current_id(), Some(NavItemId::Urls));
    }
}
