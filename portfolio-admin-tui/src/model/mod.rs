//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │ AppMessage│          └────┬─────┘         │   │
//！│  │        ▲               │ ContentMsg│               │ 修改          │   │
//！│  │        │               │ FormMsg   │               ▼               │   │
//！│  │   ┌─────────┐          │ ModalMsg  │          ┌──────────┐         │   │
//！│  │   │  View   │          │ TaskResult│ ◀──┐     │  Model   │         │   │
//！│  │   │   层    │          └───────────┘    │     │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ───────────┼──── └────┬─────┘         │   │
//！│  │        │                                │          │ Command       │   │
//！│  └────────│────────────────────────────────│──────────│───────────────┘   │
//！│           │                                │ mpsc     │                   │
//！│           ▼                                │          ▼                   │
//！│      ┌─────────┐                        ┌──┴───────────────┐              │
//！│      │  终端   │                        │  Backend (tokio) │              │
//！│      │ (Util)  │                        └────────┬─────────┘              │
//！│      └─────────┘                                 │                        │
//！│                                                  ▼                        │
//！│                                       ┌─────────────────────┐             │
//！│                                       │ portfolio-admin-core│             │
//！│                                       └─────────────────────┘             │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的唯一来源，所有变更都经由 Update 层。
//!
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点（Navigation / Content）
//!         mod navigation;     // 导航栏
//!         mod page;           // 页面路由
//!         pub mod state;      // 弹窗、表单字段焦点
//!
//!     Page 只是门牌号；列表数据、加载状态、选中项都在 core 的控制器里：
//!
//!         App {
//!             url_grps:      ListController<UrlGrp>,
//!             urls:          UrlListController,      // URL ⋈ 分组 + 过滤
//!             url_grp_form:  FormState<UrlGrp>,
//!             url_form:      FormState<Url>,
//!             group_options: GroupOptions,           // URL 表单的分组选择器
//!             projects:      ListController<PublicProject>,
//!             notifications: NotificationCenter,     // 根部唯一的通知弹窗
//!             ...
//!         }

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
pub use state::{DeleteTarget, FieldKind, FormFields, FormState, Modal, ModalState};
