//! 列表页消息

/// 列表页消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Enter：打开选中项
    Confirm,

    // ========== CRUD 操作 ==========
    Add,
    Edit,
    Delete,

    /// URL 列表：切换分组过滤
    CycleFilter,
}
