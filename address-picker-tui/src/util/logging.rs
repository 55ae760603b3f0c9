//! 日志初始化
//!
//! stdout 被终端界面占用，日志写入缓存目录下的文件。
//! 核心库使用 `log` 门面，由 tracing-subscriber 桥接。

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE: &str = "tui.log";

/// 日志文件路径（`~/.cache/address-picker/tui.log` 等）
pub fn log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("address-picker")
        .join(LOG_FILE)
}

/// 初始化日志
///
/// `RUST_LOG` 优先，否则使用 `default_level`（如 "info"、"debug"）。
pub fn init_logging(default_level: &str) -> Result<PathBuf> {
    let path = log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("invalid log level")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(path)
}
