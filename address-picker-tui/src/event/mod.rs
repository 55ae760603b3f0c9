//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!     · poll_event      事件轮询，受 app.rs 调用，最长等待 timeout
//!     · handle_event    事件分发
//!
//!         判断：
//!             - 有弹窗打开时，交给弹窗按键处理
//!             - 全局快捷键，就地处理
//!             - 其余交给地址列表按键处理
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
