//! Chat Handler
//!
//! 現状の応答はエコーバック。本物の推論パイプラインが載るまでの
//! プレースホルダとして、固定プレフィックス付きで入力を返す。

use axum::{extract::rejection::JsonRejection, Json};

use crate::http::dto::{ChatRequest, ChatResponse};
use crate::http::error::ApiError;

/// POST /api/chat
pub async fn chat(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload
        .map_err(|_| ApiError::BadRequest("JSONデータが見つかりません".to_string()))?;

    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("メッセージが空です".to_string()));
    }

    Ok(Json(ChatResponse {
        text: format!("あなたの質問に対する回答: {}", req.message),
        sources: Vec::new(),
    }))
}
