//! URL 分组类型定义

use serde::{Deserialize, Serialize};

/// URL group (`UrlGrpModel`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlGrp {
    /// 分组 ID（0 表示尚未保存）
    pub id: i64,
    /// 分组名称
    pub name: String,
    /// 是否启用
    pub is_enable: bool,
}

impl UrlGrp {
    /// Placeholder for a group id that is not in the loaded group list.
    #[must_use]
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            name: String::new(),
            is_enable: false,
        }
    }
}

impl Default for UrlGrp {
    /// Blank create-mode group: enabled, unsaved.
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            is_enable: true,
        }
    }
}
