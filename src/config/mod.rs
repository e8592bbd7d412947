//! # 配置管理模块
//!
//! 处理应用配置加载与验证

mod app_config;
mod database;

pub use app_config::{AppConfig, ServerConfig};
pub use database::DatabaseConfig;

use std::env;
use std::path::Path;

use crate::config_error;
use crate::error::Result;

/// 加载配置文件
///
/// 按 `RUST_ENV` 选择 `config/config.{env}.toml`，默认 `dev`。
pub fn load_config() -> Result<AppConfig> {
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
    let config_file = format!("config/config.{env}.toml");

    if !Path::new(&config_file).exists() {
        return Err(config_error!("配置文件不存在: {config_file}"));
    }

    let config_content = std::fs::read_to_string(&config_file).map_err(|e| {
        crate::error::ServiceError::config_with_source(
            format!("读取配置文件失败: {config_file}"),
            e,
        )
    })?;

    let config: AppConfig = toml::from_str(&config_content)?;

    // 验证配置的有效性
    validate_config(&config)?;

    Ok(config)
}

/// 验证配置有效性
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(config_error!("无效的服务器端口: {}", config.server.port));
    }

    if config.server.bind_address.trim().is_empty() {
        return Err(config_error!("服务器监听地址不能为空"));
    }

    if config.database.url.trim().is_empty() {
        return Err(config_error!("数据库URL不能为空"));
    }

    if config.database.max_connections == 0 {
        return Err(config_error!("数据库最大连接数必须大于 0"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_table_parses_with_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert!(config.database.url.starts_with("sqlite://"));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn partial_toml_overrides_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9090

            [database]
            url = "sqlite://./data/test.db"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "sqlite://./data/test.db");
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn empty_database_url_is_rejected() {
        let mut config = AppConfig::default();
        config.database.url = String::new();

        assert!(validate_config(&config).is_err());
    }
}
