//! Application State
//!
//! 起動時に一度だけ組み立てられるプロセス全体の不変状態。
//! リクエスト間で共有される可変データは存在しない。

use std::path::PathBuf;

use crate::config::AssetsConfig;

/// アプリケーション状態
#[derive(Debug, Clone)]
pub struct AppState {
    /// `/public/*` で配信するアセットルート
    pub public_dir: PathBuf,
    /// HTML ビューの配置ディレクトリ
    pub templates_dir: PathBuf,
}

impl AppState {
    pub fn new(public_dir: impl Into<PathBuf>, templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
            templates_dir: templates_dir.into(),
        }
    }

    pub fn from_assets_config(assets: &AssetsConfig) -> Self {
        Self::new(assets.public_dir.clone(), assets.templates_dir.clone())
    }
}
