//! Configuration Module
//!
//! 多層の設定ソースをサポートする:
//! - 環境変数（最優先）
//! - 設定ファイル（TOML 形式）
//! - デフォルト値（最低優先）

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{AppConfig, AssetsConfig, LogConfig, ServerConfig};
