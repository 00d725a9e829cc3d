//! View 层：根据 App 状态渲染界面
//!
//!     src/view/mod.rs
//!         mod components;     // 导航栏、状态栏、弹窗、全局通知
//!         mod layout;         // 主布局
//!         mod pages;          // 各页面
//!         pub mod theme;      // 颜色和样式
//!
//!     渲染是纯函数，只读 App：
//!
//!         terminal.draw(|frame| view::render(app, frame))?;

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
