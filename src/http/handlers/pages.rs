//! Page Handlers
//!
//! 3 つの HTML ビューを配信する。テンプレートといってもサーバ側変数は無く、
//! 名前付きの静的 HTML をそのまま返すだけ。読み込みに失敗した場合は
//! 500 の JSON エンベロープへ落ちる。

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::http::error::ApiError;
use crate::http::state::AppState;

/// GET / - メインビュー
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render_template(&state, "index.html").await
}

/// GET /tasks - タスクビュー
pub async fn tasks_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render_template(&state, "tasks.html").await
}

/// GET /memory - メモリビュー
pub async fn memory_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render_template(&state, "memory.html").await
}

async fn render_template(state: &AppState, name: &str) -> Result<Html<String>, ApiError> {
    let path = state.templates_dir.join(name);
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!(template = name, error = %e, "Failed to render template");
            Err(ApiError::Internal(format!(
                "template {}: {}",
                name, e
            )))
        }
    }
}
