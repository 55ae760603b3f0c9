//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 地址列表子消息处理
//!
//! 注意：选中地址并不保存在 Model 中，而是写入共享的 SelectionStore。
//! 写入后 Store 会通知主循环，主循环再以 AppMessage::SelectionChanged
//! 回到这里，由本层更新状态栏。
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;

use address_picker_core::Selection;

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::SelectionChanged(selection) => {
            handle_selection_changed(app, &selection);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::GoBack => {
            // 有弹窗时先关闭弹窗
            if app.modal.is_open() {
                app.modal.close();
            } else {
                app.clear_status();
            }
        }

        AppMessage::Noop => {}
    }
}

/// 共享选择状态变化后更新状态栏
fn handle_selection_changed(app: &mut App, selection: &Selection) {
    let texts = t();

    match &selection.address {
        None => app.set_status(texts.status.cleared),
        Some(_) if app.address_list.selection_drifted() => {
            log::warn!(
                "Selection drifted: index {:?} no longer holds the selected address",
                selection.index
            );
            app.set_status(texts.status.drifted);
        }
        Some(address) => {
            log::info!("Selected address {:?} ({})", address.id, address.name);
            app.set_status(format!(
                "{}: {} · {}",
                texts.status.selected, address.name, address.default_addr
            ));
        }
    }

    if let Some(index) = app.address_list.selected_card_index() {
        app.cursor.jump_to(index, app.address_list.len());
    }
}
