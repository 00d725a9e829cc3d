//! 表单页消息

/// 表单页消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    NextField,
    PrevField,
    /// 输入字符（空格在开关字段上切换状态）
    Input(char),
    Backspace,
    /// ← → 切换选项
    CycleOption { backwards: bool },
    /// 提交
    Submit,
}
