//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize 等事件由下一轮绘制自动处理
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，避免 Windows 终端上的按键重复
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_ALT.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    handle_list_keys(key)
}

/// 弹窗打开时的按键：只能关闭
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key)
        || DefaultKeymap::QUIT.matches(&key)
        || DefaultKeymap::SELECT.matches(&key)
    {
        AppMessage::GoBack
    } else {
        AppMessage::Noop
    }
}

/// 地址列表按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SELECT.matches(&key) || DefaultKeymap::SELECT_ALT.matches(&key) {
        return AppMessage::Content(ContentMessage::Confirm);
    }
    if DefaultKeymap::CLEAR_SELECTION.matches(&key) {
        return AppMessage::Content(ContentMessage::ClearSelection);
    }
    if DefaultKeymap::RELOAD.matches(&key) {
        return AppMessage::Content(ContentMessage::Reload);
    }
    if !key.modifiers.is_empty() {
        return AppMessage::Noop;
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use address_picker_core::adapters::StaticAddressSource;
    use address_picker_core::{AddressListOptions, AddressSource, InMemorySelectionStore};
    use crossterm::event::{KeyEventState, KeyModifiers};

    use super::*;

    fn app() -> App {
        let addresses = StaticAddressSource::sample().load().unwrap();
        App::new(
            addresses,
            Arc::new(InMemorySelectionStore::new()),
            AddressListOptions::default(),
        )
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn content(app: &App, code: KeyCode) -> Option<ContentMessage> {
        match handle_event(press(code, KeyModifiers::NONE), app) {
            AppMessage::Content(msg) => Some(msg),
            _ => None,
        }
    }

    #[test]
    fn list_keys_map_to_content_messages() {
        let app = app();
        assert_eq!(content(&app, KeyCode::Up), Some(ContentMessage::SelectPrevious));
        assert_eq!(content(&app, KeyCode::Char('j')), Some(ContentMessage::SelectNext));
        assert_eq!(content(&app, KeyCode::Home), Some(ContentMessage::SelectFirst));
        assert_eq!(content(&app, KeyCode::End), Some(ContentMessage::SelectLast));
        assert_eq!(content(&app, KeyCode::Enter), Some(ContentMessage::Confirm));
        assert_eq!(content(&app, KeyCode::Char(' ')), Some(ContentMessage::Confirm));
        assert_eq!(content(&app, KeyCode::Char('r')), Some(ContentMessage::Reload));
        assert_eq!(content(&app, KeyCode::Char('x')), None);
    }

    #[test]
    fn alt_c_clears_selection() {
        let app = app();
        let msg = handle_event(press(KeyCode::Char('c'), KeyModifiers::ALT), &app);
        assert!(matches!(msg, AppMessage::Content(ContentMessage::ClearSelection)));
    }

    #[test]
    fn quit_and_help_shortcuts() {
        let app = app();
        assert!(matches!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('?'), KeyModifiers::NONE), &app),
            AppMessage::ShowHelp
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = app();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(release, &app), AppMessage::Noop));
    }

    #[test]
    fn open_modal_swallows_list_keys() {
        let mut app = app();
        app.modal.show_help();
        assert!(matches!(
            handle_event(press(KeyCode::Down, KeyModifiers::NONE), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::GoBack
        ));
    }
}
