//! Fundingift Address Picker TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与地址加载 (`backend/`)
//!
//! 选中的地址保存在 `address-picker-core` 的 `SelectionStore` 中，
//! 由 main 创建并注入 App，而不是全局变量。
//!
//! 用法：
//!     address-picker-tui [addresses.json]

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use address_picker_core::{InMemorySelectionStore, SelectionStore};
use anyhow::Result;

use backend::{ConfigService, JsonConfigService};
use i18n::Language;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 加载配置
    let config_service = JsonConfigService::from_default_location();
    let config = config_service.load()?;

    // 2. 初始化日志（写入文件）
    let log_path = init_logging(&config.log_level)?;
    log::info!(
        "Starting address picker, config: {}, log: {}",
        config_service.path().display(),
        log_path.display()
    );

    // 首次运行时写出默认配置，方便用户修改
    if !config_service.path().exists() {
        if let Err(e) = config_service.save(&config) {
            log::warn!("Failed to write default config: {e:#}");
        }
    }

    // 3. 语言和主题
    match Language::from_code(&config.language) {
        Some(lang) => {
            log::debug!("Using language {}", lang.code());
            i18n::set_language(lang);
        }
        None => log::warn!("Unknown language {:?}, falling back to en-US", config.language),
    }
    view::theme::set_theme(config.theme);

    // 4. 加载地址列表
    let cli_path = std::env::args_os().nth(1).map(PathBuf::from);
    let source = backend::address_source(&config, cli_path);
    let addresses = backend::load_addresses(source.as_ref())?;

    // 5. 创建共享选择状态和应用实例
    let store: Arc<dyn SelectionStore> = Arc::new(InMemorySelectionStore::new());
    let mut app = model::App::new(addresses, store, config.list).with_source(source);

    // 6. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Some(selection) = app.address_list.store().selected_address() {
        log::info!("Exiting with address {:?} ({}) selected", selection.id, selection.name);
    }

    result
}
