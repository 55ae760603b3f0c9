//!
//! src/backend/mod.rs
//! Backend 层：配置与数据加载
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod address_service;    // 选择地址来源并读取地址列表（JSON 文件或演示数据）
//!         mod config_service;     // 读取 / 保存应用配置
//!
//! main.rs 在进入主循环之前调用本层：
//!     1. JsonConfigService::load()        获得 AppConfig
//!     2. address_source(&config, arg)     获得地址来源
//!     3. load_addresses(source)           获得 Vec<Address>
//!
//! 地址来源随后交给 App，按 `r` 重新加载时再次调用 load_addresses。
//!

mod address_service;
mod config_service;

pub use address_service::{address_source, load_addresses};
pub use config_service::{AppConfig, ConfigService, JsonConfigService, ThemeChoice};
