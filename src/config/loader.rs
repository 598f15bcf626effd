//! Configuration Loader
//!
//! 優先度（高い順）:
//! 1. 環境変数
//! 2. 設定ファイル（config.toml）
//! 3. デフォルト値

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 設定ファイルの探索名
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// アプリケーション設定を読み込む
///
/// # 環境変数の例
/// - `CYGNOS_SERVER__HOST=0.0.0.0`
/// - `CYGNOS_SERVER__PORT=9090`
/// - `CYGNOS_ASSETS__PUBLIC_DIR=/srv/cygnos/public`
/// - `CYGNOS_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 指定パスから設定を読み込む
///
/// `config_path` が None の場合はカレントディレクトリの
/// config.toml / config.local.toml を探索する。
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. デフォルト値（最低優先）
    builder = builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .set_default("assets.public_dir", "public")?
        .set_default("assets.templates_dir", "templates")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 設定ファイル（存在する場合のみ）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 環境変数（最優先）
    // プレフィックス CYGNOS_、階層区切りは __
    builder = builder.add_source(
        Environment::with_prefix("CYGNOS")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 設定の妥当性検証
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.assets.public_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Public asset directory cannot be empty".to_string(),
        ));
    }

    if config.assets.templates_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Templates directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 起動時の設定ダンプ
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Cygnos Gateway Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Base URL: {}", config.server.base_url());
    tracing::info!("Public Assets: {:?}", config.assets.public_dir);
    tracing::info!("Templates: {:?}", config.assets.templates_dir);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("====================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_passes_for_default_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_empty_public_dir() {
        let mut config = AppConfig::default();
        config.assets.public_dir = std::path::PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[server]\nhost = \"0.0.0.0\"\nport = 9001\n\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = load_config_from_path(Some(&path)).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.log.level, "debug");
        // ファイルに無い項目はデフォルトのまま
        assert_eq!(config.assets.public_dir, std::path::PathBuf::from("public"));
    }
}
