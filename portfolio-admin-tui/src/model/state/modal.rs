//! 弹窗状态

/// 待删除的对象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    UrlGrp { id: i64 },
    Url { id: i64 },
}

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 删除确认
    ConfirmDelete {
        target: DeleteTarget,
        /// 显示给用户的名称
        item_name: String,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 帮助
    Help,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示删除确认弹窗，焦点默认在“取消”
    pub fn show_confirm_delete(&mut self, target: DeleteTarget, item_name: &str) {
        self.active = Some(Modal::ConfirmDelete {
            target,
            item_name: item_name.to_string(),
            focus: 0,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
