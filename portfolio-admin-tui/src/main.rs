//! Portfolio Admin TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置和异步副作用 (`backend/`)
//!
//!
//! main.rs
//! Portfolio Admin TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     load_config()           // 读取配置文件和环境变量
//!     init_logging()          // 日志写入文件（终端被 TUI 占用）
//!     tokio Runtime           // 后台任务的运行时
//!     ServiceContext          // API 客户端 + 全局通知
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use portfolio_admin_core::{NotificationCenter, ServiceContext};

use backend::{AppConfig, Backend, ConfigService, LocalConfigService};
use i18n::Language;
use util::{init_terminal, restore_terminal};

/// 日志级别环境变量，语法同 `RUST_LOG`
const LOG_ENV: &str = "PORTFOLIO_ADMIN_LOG";

fn main() -> Result<()> {
    // 1. 加载配置，首次运行时写出默认配置
    let config_service = LocalConfigService::new();
    let config = load_config(&config_service)?;

    // 2. 初始化日志（guard 存活期间日志才会落盘）
    let _log_guard = init_logging()?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_url = %config.api_url,
        "portfolio-admin starting"
    );

    // 3. 语言和主题
    let language = Language::from_code(&config.language).unwrap_or_default();
    i18n::set_language(language);
    view::theme::set_theme(config.theme);
    tracing::debug!(language = i18n::current_language().code(), theme = ?config.theme);

    // 4. 后台运行时和服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;

    let notifications = NotificationCenter::new();
    let ctx = ServiceContext::connect(config.client_config()?, notifications.clone())?;
    let (tx, mut results) = mpsc::unbounded_channel();
    let backend = Backend::new(Arc::new(ctx), tx, runtime.handle().clone());

    // 5. 初始化终端
    let mut terminal = init_terminal()?;

    // 6. 创建应用实例并运行主循环
    let mut app = model::App::new(notifications, config.api_url.clone());
    let result = app::run(&mut terminal, &mut app, &backend, &mut results);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        tracing::error!("main loop failed: {e:#}");
    }
    tracing::info!("portfolio-admin stopped");
    result
}

/// 读取配置；文件不存在时保存一份默认配置供用户编辑
fn load_config(service: &LocalConfigService) -> Result<AppConfig> {
    let first_run = !service.exists();
    let config = service.load()?;
    if first_run {
        // 写出的是文件默认值，不含环境变量覆盖
        if let Err(e) = service.save(&AppConfig::default()) {
            eprintln!(
                "warning: could not write {}: {e:#}",
                service.path().display()
            );
        }
    }
    Ok(config)
}

/// 日志写入 `<data_local_dir>/portfolio-admin/logs/portfolio-admin.log.<date>`
fn init_logging() -> Result<WorkerGuard> {
    let dir = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("portfolio-admin")
        .join("logs");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, "portfolio-admin.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .finish()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(guard)
}
