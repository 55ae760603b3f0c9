//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，从不修改。
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 标题栏 + 内容区 + 状态栏
//!         mod pages;          // 地址列表页面
//!         mod components;     // 地址卡片、状态栏、帮助弹窗
//!         pub mod theme;      // 颜色方案
//!
//! 每次绘制都会重新调用 AddressList::cards()，
//! 因此 SelectionStore 中的变化在下一帧立即可见。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
