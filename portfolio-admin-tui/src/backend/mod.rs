//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          └───────────┘          └────┬─────┘         │   │
//！│  │        ▲                     ▲                     │ 修改 / 记录    │   │
//！│  │   ┌─────────┐                │ TaskResult     ┌──────────┐         │   │
//！│  │   │  View   │ ◀──── 读取 ────│─────────────── │  Model   │         │   │
//！│  │   │   层    │                │                └────┬─────┘         │   │
//！│  │   └─────────┘                │                     │ Command       │   │
//！│  └──────────────────────────────│─────────────────────│───────────────┘   │
//！│                                 │                     ▼                   │
//！│                                 │               ┌──────────┐              │
//！│                                 └────────────── │ Backend  │              │
//！│                                   mpsc channel  │    层    │              │
//！│                                                 └────┬─────┘              │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │portfolio-admin-   │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：配置和异步副作用
//!
//! Backend 层与 UI 解耦。Update 层只记录 [`Command`](crate::message::Command)，
//! 主循环把它们交给 [`Backend::dispatch`]。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件 + 环境变量
//!         mod dispatcher;         // Command → tokio 任务 → TaskResult
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：~/.config/portfolio-admin/config.json
//!
//!     字段：apiUrl / apiKey / language / theme
//!     文件不存在时使用默认值（并在启动时写出一份）。
//!     PORTFOLIO_ADMIN_API_URL / PORTFOLIO_ADMIN_API_KEY 覆盖文件中的值。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、执行器（Backend）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     持有 portfolio-admin-core 的服务：
//!         - UrlGrpService     分组 CRUD
//!         - UrlService        URL CRUD
//!         - PortfolioService  公开项目（只读）
//!
//!     每个 Command 起一个 tokio 任务，完成后发送 TaskResult。
//!     结果带着发起时的 RequestToken，页面已离开或已重新加载时由
//!     控制器丢弃。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在删除确认弹窗中选择"删除"
//!         ↓
//!     Update 层处理 ModalMessage::Confirm，记录 Command::DeleteUrl
//!         ↓
//!     主循环调用 Backend::dispatch
//!         ↓
//!     UrlService 通过 ApiClient 发出 DELETE 请求
//!         ↓
//!     TaskResult::UrlDeleted 进入 channel
//!         ↓
//!     主循环把它作为 AppMessage::Task 交给 Update 层
//!         ↓
//!     删除成功 → 重新加载列表；失败 → 全局通知已由客户端写入
//!

mod config_service;
mod dispatcher;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use dispatcher::Backend;
