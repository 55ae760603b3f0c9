//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod cursor;         // 键盘光标（高亮项）
//!         mod modal;          // 弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、光标与选中
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     两者是不同的东西：
//!         - 光标（CursorState）只属于终端界面，表示键盘当前停在哪张卡片上；
//!         - 选中（Selection）保存在共享的 SelectionStore 中，
//!             表示用户确认过的配送地址，其他组件也能读取。
//!
//!     数据流：
//!         用户按 ↑ / ↓
//!             ↓
//!         update/content.rs 移动 app.cursor
//!
//!         用户按 Enter
//!             ↓
//!         update/content.rs 调用 app.address_list.select(cursor)
//!             ↓
//!         SelectionStore 发布新快照，app.selection_rx 收到通知
//!             ↓
//!         app.rs 产生 AppMessage::SelectionChanged，状态栏显示所选地址
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、弹窗状态（Modal）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     目前只有帮助弹窗。打开时所有按键都交给弹窗处理。
//!

mod app;
mod cursor;
mod modal;

pub use app::App;
pub use cursor::CursorState;
pub use modal::{Modal, ModalState};
