//! 应用主状态结构

use std::sync::Arc;

use address_picker_core::adapters::StaticAddressSource;
use address_picker_core::{
    Address, AddressList, AddressListOptions, AddressSource, Selection, SelectionStore,
};
use tokio::sync::watch;

use super::{CursorState, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 地址列表组件
    pub address_list: AddressList,

    /// 地址来源（重新加载时使用）
    pub source: Box<dyn AddressSource>,

    /// 键盘光标
    pub cursor: CursorState,

    /// 选择状态订阅
    pub selection_rx: watch::Receiver<Selection>,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,
}

impl App {
    /// 创建新的应用实例
    pub fn new(
        addresses: Vec<Address>,
        store: Arc<dyn SelectionStore>,
        options: AddressListOptions,
    ) -> Self {
        let selection_rx = store.subscribe();
        let source = Box::new(StaticAddressSource::new(addresses.clone()));
        let address_list = AddressList::new(addresses, store, options);

        // 已有选中项时，光标从选中项开始
        let mut cursor = CursorState::new();
        if let Some(index) = address_list.selected_card_index() {
            cursor.jump_to(index, address_list.len());
        }

        Self {
            should_quit: false,
            address_list,
            source,
            cursor,
            selection_rx,
            status_message: None,
            modal: ModalState::new(),
        }
    }

    /// 替换地址来源（默认是构造时的列表）
    #[must_use]
    pub fn with_source(mut self, source: Box<dyn AddressSource>) -> Self {
        self.source = source;
        self
    }

    /// 取出尚未处理的选择变更
    pub fn take_selection_change(&mut self) -> Option<Selection> {
        match self.selection_rx.has_changed() {
            Ok(true) => Some(self.selection_rx.borrow_and_update().clone()),
            _ => None,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
