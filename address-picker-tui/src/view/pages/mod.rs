//! 页面视图

pub mod address_list;
