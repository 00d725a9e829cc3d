//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: NavigationState{
//!         items: [Home , UrlGrps , Urls , Projects],
//!         selected = 0                                    // 当前选中第几项，默认为 0
//!     },
//!     current_page = Page::Home,                      // 当前应该显示哪个页面，默认为 Home
//!     status_message = None,                          // 状态栏消息
//!     url_grps / urls / projects = Loading            // 各列表在进入页面时才加载
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     while let Ok(result) = results.try_recv() {     // 先应用已完成的后台任务
//!         update::update(&mut app , AppMessage::Task(result))
//!     }
//!     for command in app.take_commands() {            // 再把 Update 层记录的副作用交给 Backend
//!         backend.dispatch(command)
//!     }
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::Backend;
use crate::event;
use crate::message::{AppMessage, TaskResult};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔，也是后台结果最长的等待时间
const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &Backend,
    results: &mut UnboundedReceiver<TaskResult>,
) -> Result<()> {
    loop {
        // 1. 应用已完成的后台任务
        while let Ok(result) = results.try_recv() {
            update::update(app, AppMessage::Task(result));
        }

        // 2. 执行副作用
        for command in app.take_commands() {
            backend.dispatch(command);
        }

        // 3. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 4. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 5. 轮询事件
        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
