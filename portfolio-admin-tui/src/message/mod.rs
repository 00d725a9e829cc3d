//! Message 层：事件消息定义
//!
//! 作为 Event / Backend 与 Update 之间的桥梁。
//!
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod command;        // Update → Backend 的副作用请求
//!         mod content;        // 列表页消息
//!         mod form;           // 表单页消息
//!         mod modal;          // 弹窗消息
//!         mod navigation;     // 导航栏消息
//!         mod task;           // Backend → Update 的异步结果
//!
//!     两个方向：
//!
//!         按键 ──handle_event──▶ AppMessage ──update──▶ Model
//!                                                        │ app.dispatch(Command)
//!                                                        ▼
//!         AppMessage::Task ◀── mpsc ── tokio task ◀── Backend::dispatch
//!
//!     每个 Command 都带着发起时拿到的 RequestToken，结果原样带回，
//!     Update 层据此丢弃过期的结果。

mod app;
mod command;
mod content;
mod form;
mod modal;
mod navigation;
mod task;

pub use app::AppMessage;
pub use command::Command;
pub use content::ContentMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
pub use task::TaskResult;
