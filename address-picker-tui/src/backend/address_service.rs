//! 地址列表加载

use std::path::PathBuf;

use address_picker_core::adapters::{JsonFileAddressSource, StaticAddressSource};
use address_picker_core::{Address, AddressSource};
use anyhow::{Context, Result};

use super::AppConfig;

/// 选择地址来源
///
/// 优先级：命令行参数 > 配置中的 `addressesFile` > 演示数据
pub fn address_source(config: &AppConfig, cli_path: Option<PathBuf>) -> Box<dyn AddressSource> {
    match cli_path.or_else(|| config.addresses_file.clone()) {
        Some(path) => Box::new(JsonFileAddressSource::new(path)),
        None => {
            log::info!("No address file configured, using sample addresses");
            Box::new(StaticAddressSource::sample())
        }
    }
}

/// 从来源加载地址列表
pub fn load_addresses(source: &dyn AddressSource) -> Result<Vec<Address>> {
    source.load().context("failed to load addresses")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_sample_data() {
        let source = address_source(&AppConfig::default(), None);
        let list = load_addresses(source.as_ref()).unwrap();
        assert!(!list.is_empty());
    }

    #[test]
    fn cli_path_wins_over_config() {
        let tmp = tempfile::tempdir().unwrap();
        let from_cli = tmp.path().join("cli.json");
        let from_config = tmp.path().join("config.json");
        std::fs::write(&from_cli, r#"[{"id": 1, "name": "Cli"}]"#).unwrap();
        std::fs::write(&from_config, r#"[{"id": 2, "name": "Config"}]"#).unwrap();

        let config = AppConfig {
            addresses_file: Some(from_config),
            ..AppConfig::default()
        };
        let source = address_source(&config, Some(from_cli));
        let list = load_addresses(source.as_ref()).unwrap();
        assert_eq!(list[0].name, "Cli");
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let config = AppConfig {
            addresses_file: Some(PathBuf::from("/definitely/not/here.json")),
            ..AppConfig::default()
        };
        let source = address_source(&config, None);
        assert!(load_addresses(source.as_ref()).is_err());
    }

    #[test]
    fn record_without_id_does_not_fail_the_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("addresses.json");
        std::fs::write(&path, r#"[{"id": 1, "name": "Home"}, {"name": "Work"}]"#).unwrap();

        let source = address_source(&AppConfig::default(), Some(path));
        let list = load_addresses(source.as_ref()).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id, None);
    }
}
