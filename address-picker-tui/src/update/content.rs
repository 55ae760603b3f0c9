//! 地址列表更新逻辑

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::App;

/// 处理地址列表消息
pub fn update(app: &mut App, msg: ContentMessage) {
    let len = app.address_list.len();

    match msg {
        // ========== 光标移动 ==========
        ContentMessage::SelectPrevious => {
            app.cursor.select_previous();
        }
        ContentMessage::SelectNext => {
            app.cursor.select_next(len);
        }
        ContentMessage::SelectFirst => {
            app.cursor.select_first();
        }
        ContentMessage::SelectLast => {
            app.cursor.select_last(len);
        }

        // ========== 选择 ==========
        ContentMessage::Confirm => {
            handle_confirm(app);
        }
        ContentMessage::ClearSelection => {
            app.address_list.clear_selection();
        }

        // ========== 列表 ==========
        ContentMessage::Reload => {
            handle_reload(app);
        }
    }
}

fn handle_confirm(app: &mut App) {
    if app.address_list.is_empty() {
        return;
    }

    if let Err(e) = app.address_list.select(app.cursor.position) {
        log::warn!("Failed to select address at {}: {e}", app.cursor.position);
        app.set_status(format!("{}: {e}", t().status.select_failed));
    }
}

fn handle_reload(app: &mut App) {
    let texts = t();

    let addresses = match app.source.load() {
        Ok(addresses) => addresses,
        Err(e) => {
            log::warn!("Failed to reload addresses: {e}");
            app.set_status(format!("{}: {e}", texts.status.reload_failed));
            return;
        }
    };

    let count = addresses.len();
    if !app.address_list.receive_list_data(addresses) {
        app.set_status(texts.status.reload_ignored);
        return;
    }

    log::info!("Reloaded {count} addresses");
    let len = app.address_list.len();
    let position = app.cursor.position;
    app.cursor.jump_to(position, len);

    if app.address_list.selection_drifted() {
        app.set_status(texts.status.drifted);
    } else {
        app.set_status(format!("{} ({count})", texts.status.reloaded));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use address_picker_core::adapters::{JsonFileAddressSource, StaticAddressSource};
    use address_picker_core::{
        Address, AddressListOptions, InMemorySelectionStore, ListSyncMode, SelectionStore,
    };

    use super::*;

    fn three() -> Vec<Address> {
        vec![
            Address::new(1, "Home"),
            Address::new(2, "Work"),
            Address::new(3, "Parents"),
        ]
    }

    /// 来源里只剩 Work 一条
    fn app_reloading_to_work(sync_mode: ListSyncMode) -> (App, Arc<dyn SelectionStore>) {
        let store: Arc<dyn SelectionStore> = Arc::new(InMemorySelectionStore::new());
        let options = AddressListOptions {
            sync_mode,
            ..AddressListOptions::default()
        };
        let app = App::new(three(), Arc::clone(&store), options).with_source(Box::new(
            StaticAddressSource::new(vec![Address::new(2, "Work")]),
        ));
        (app, store)
    }

    #[test]
    fn reload_replaces_list_and_clamps_cursor() {
        let (mut app, _) = app_reloading_to_work(ListSyncMode::SyncOnChange);
        update(&mut app, ContentMessage::SelectLast);
        assert_eq!(app.cursor.position, 2);

        update(&mut app, ContentMessage::Reload);

        assert_eq!(app.address_list.len(), 1);
        assert_eq!(app.address_list.data()[0].name, "Work");
        assert_eq!(app.cursor.position, 0);
        assert!(app.status_message.as_deref().unwrap().starts_with(t().status.reloaded));
    }

    #[test]
    fn reload_on_frozen_list_keeps_data() {
        let (mut app, _) = app_reloading_to_work(ListSyncMode::Frozen);
        update(&mut app, ContentMessage::SelectLast);

        update(&mut app, ContentMessage::Reload);

        assert_eq!(app.address_list.len(), 3);
        assert_eq!(app.cursor.position, 2);
        assert_eq!(app.status_message.as_deref(), Some(t().status.reload_ignored));
    }

    #[test]
    fn reload_reports_drift_of_index_selection() {
        let (mut app, store) = app_reloading_to_work(ListSyncMode::SyncOnChange);
        update(&mut app, ContentMessage::Confirm);
        assert_eq!(store.selected_address().unwrap().name, "Home");

        update(&mut app, ContentMessage::Reload);

        assert!(app.address_list.selection_drifted());
        assert_eq!(app.status_message.as_deref(), Some(t().status.drifted));
    }

    #[test]
    fn failed_reload_keeps_list() {
        let store: Arc<dyn SelectionStore> = Arc::new(InMemorySelectionStore::new());
        let missing = std::env::temp_dir().join("address-picker-missing").join("none.json");
        let mut app = App::new(three(), store, AddressListOptions::default())
            .with_source(Box::new(JsonFileAddressSource::new(missing)));

        update(&mut app, ContentMessage::Reload);

        assert_eq!(app.address_list.len(), 3);
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .starts_with(t().status.reload_failed));
    }

    #[test]
    fn confirm_on_empty_list_does_nothing() {
        let store: Arc<dyn SelectionStore> = Arc::new(InMemorySelectionStore::new());
        let mut app = App::new(Vec::new(), Arc::clone(&store), AddressListOptions::default());

        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::Confirm);

        assert_eq!(app.cursor.position, 0);
        assert!(store.snapshot().is_empty());
        assert_eq!(app.status_message, None);
    }
}
