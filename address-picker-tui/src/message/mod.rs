//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages，
//! Update 层根据 Message 来更新 Model。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod content;        // 地址列表中的子消息
//!
//! 除了按键，共享的 SelectionStore 发生变化时，
//! 主循环也会产生一条 AppMessage::SelectionChanged。
//!

mod app;
mod content;

pub use app::AppMessage;
pub use content::ContentMessage;
