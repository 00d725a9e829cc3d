//! URL 类型定义

use serde::{Deserialize, Serialize};

use super::UrlGrp;

/// URL entry (`UrlModel`) as stored by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Url {
    /// URL ID（0 表示尚未保存）
    pub id: i64,
    /// 名称
    pub name: String,
    /// 链接
    pub link: String,
    /// 是否启用
    pub is_enable: bool,
    /// 所属分组 ID（0 表示未选择）
    #[serde(rename = "id_UrlGrp")]
    pub id_url_grp: i64,
}

impl Default for Url {
    /// Blank create-mode URL: enabled, no group selected.
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            link: String::new(),
            is_enable: true,
            id_url_grp: 0,
        }
    }
}

/// URL joined with its resolved group (`UrlUrlgrpModel`), built client side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlWithGroup {
    pub id: i64,
    pub name: String,
    pub link: String,
    pub is_enable: bool,
    /// 关联的分组
    #[serde(rename = "UrlGrp")]
    pub group: UrlGrp,
}

impl UrlWithGroup {
    /// Join `url` with `group`.
    #[must_use]
    pub fn new(url: &Url, group: UrlGrp) -> Self {
        Self {
            id: url.id,
            name: url.name.clone(),
            link: url.link.clone(),
            is_enable: url.is_enable,
            group,
        }
    }

    /// Back to the stored shape, taking the group id from the embedded group.
    #[must_use]
    pub fn to_url(&self) -> Url {
        Url {
            id: self.id,
            name: self.name.clone(),
            link: self.link.clone(),
            is_enable: self.is_enable,
            id_url_grp: self.group.id,
        }
    }
}
