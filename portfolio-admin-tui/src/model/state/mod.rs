//! 页面数据状态
//!
//! 列表页的数据和加载状态由 `portfolio-admin-core` 的控制器持有，
//! 这里只补充终端界面特有的部分：弹窗和表单字段焦点。

mod form;
mod modal;

pub use form::{FieldKind, FormFields, FormState};
pub use modal::{DeleteTarget, Modal, ModalState};
