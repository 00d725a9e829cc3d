//! Util 层：终端初始化和恢复
//!
//! 与业务无关的基础设施代码。
//!
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化、恢复、panic 钩子
//!
//!     在 src/main.rs 中：
//!
//!         let mut terminal = init_terminal()?;      // raw mode + 备用屏幕
//!         let result = app::run(&mut terminal, ...);
//!         restore_terminal(&mut terminal)?;         // 无论 run 成功与否都执行
//!         result
//!
//!     init_terminal 同时安装 panic 钩子：panic 时先恢复终端再打印信息，
//!     否则终端会停留在 raw mode。

mod terminal;

pub use terminal::{Term, init_terminal, restore_terminal};
