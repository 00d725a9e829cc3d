//! 类型定义模块

mod project;
mod url;
mod url_grp;

pub use project::{PublicProject, project_label};
pub use url::{Url, UrlWithGroup};
pub use url_grp::UrlGrp;

// Re-export client 库的公共类型
pub use portfolio_admin_client::Envelope;
