//! 可复用的界面组件

pub mod address_card;
pub mod help;
pub mod statusbar;
