//! Cygnos - ローカル AI エージェント UI のゲートウェイサーバ
//!
//! ブラウザベースの Cygnos UI を配信する単一バイナリの Web サーバ:
//! - HTML ビュー (`/`, `/tasks`, `/memory`) と静的アセット (`/public/*`)
//! - REST 風 API (`/api/chat`, `/api/tasks`, `/api/memory`)
//! - ヘルスチェック (`/health`)
//!
//! リクエスト間で共有される可変状態は持たない。すべてのレスポンスは
//! リクエスト単位で組み立てられる。

pub mod config;
pub mod http;

pub use config::{load_config, AppConfig};
