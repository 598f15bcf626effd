//! Configuration Types

use serde::Deserialize;
use std::path::PathBuf;

/// アプリケーション設定
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// サーバ設定
    #[serde(default)]
    pub server: ServerConfig,

    /// 静的アセット設定
    #[serde(default)]
    pub assets: AssetsConfig,

    /// ログ設定
    #[serde(default)]
    pub log: LogConfig,
}

/// サーバ設定
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 待ち受けアドレス
    #[serde(default = "default_host")]
    pub host: String,

    /// 待ち受けポート
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    // ローカル UI 用サーバなので外部には公開しない
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// バインド先アドレス
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// ブラウザからアクセスする URL
    pub fn base_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            &self.host
        };
        format!("http://{}:{}", host, self.port)
    }
}

/// 静的アセット設定
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// `/public/*` で配信するアセットルート
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// HTML ビュー（index.html / tasks.html / memory.html）の配置ディレクトリ
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            public_dir: default_public_dir(),
            templates_dir: default_templates_dir(),
        }
    }
}

/// ログ設定
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// ログレベル
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON 形式で出力するか
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
