//! 弹窗消息

/// 弹窗相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,
    /// 在确认删除弹窗中切换焦点
    ToggleDeleteFocus,
    /// 确认
    Confirm,
}
