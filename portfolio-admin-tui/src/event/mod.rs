//! Event 层：把终端事件翻译成 AppMessage
//!
//!     src/event/mod.rs
//!         mod handler;        // poll_event / handle_event
//!         mod keymap;         // 快捷键定义
//!
//!     按键的优先级从高到低：
//!
//!         Ctrl+c                    → Quit
//!         全局通知打开时            → 只接受 Enter / Esc（关闭通知）
//!         弹窗打开时                → 弹窗按键
//!         Alt+q / Alt+h / Alt+r / Esc
//!         表单页且焦点在内容区      → 表单按键（Tab 切换字段）
//!         Tab                       → 切换面板
//!         导航栏 / 列表页按键
//!
//!     handle_event 只读 App，不修改；修改交给 update 层：
//!
//!         let msg = event::handle_event(event, app);
//!         update::update(app, msg);

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
