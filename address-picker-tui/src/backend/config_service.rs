//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use address_picker_core::AddressListOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const APP_DIR: &str = "address-picker";
const CONFIG_FILE: &str = "config.json";

/// 主题选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub theme: ThemeChoice,
    /// BCP 47 语言代码
    pub language: String,
    /// 未设置 `RUST_LOG` 时使用的日志级别
    pub log_level: String,
    /// 地址列表 JSON 文件
    pub addresses_file: Option<PathBuf>,
    /// 地址列表组件选项
    pub list: AddressListOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::Dark,
            language: "en-US".to_string(),
            log_level: "info".to_string(),
            addresses_file: None,
            list: AddressListOptions::default(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// JSON 文件配置服务
///
/// 文件不存在时返回默认配置。
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 使用平台配置目录（`~/.config/address-picker/config.json` 等）
    pub fn from_default_location() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file {}", self.path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
