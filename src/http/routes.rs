//! HTTP Routes
//!
//! ルート定義:
//! - /                GET   メインビュー
//! - /tasks           GET   タスクビュー
//! - /memory          GET   メモリビュー
//! - /public/*path    GET   静的アセット配信
//! - /api/chat        POST  チャット（エコーバック）
//! - /api/tasks       GET   タスク一覧 / POST タスク作成
//! - /api/memory      GET   メモリ一覧 / POST メモリ作成
//! - /health          GET   ヘルスチェック
//!
//! 未定義ルートはすべて JSON の 404 エンベロープに落ちる。

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::error::ApiError;
use super::handlers;
use super::state::AppState;

/// 全ルートを構築する
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::home))
        .route("/tasks", get(handlers::tasks_page))
        .route("/memory", get(handlers::memory_page))
        .route("/public/*path", get(handlers::serve_public))
        .route("/health", get(handlers::health))
        .nest("/api", api_routes())
        .fallback(fallback_not_found)
}

/// API ルート
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route(
            "/memory",
            get(handlers::list_memory).post(handlers::create_memory_item),
        )
}

/// ルート不一致時の 404 ハンドラ
async fn fallback_not_found() -> ApiError {
    ApiError::NotFound
}
