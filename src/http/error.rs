//! HTTP エラーハンドリング
//!
//! すべての障害はリクエスト境界でここに集約され、JSON のエラーエンベロープに
//! 変換される。プロセスまで伝播する障害は存在しない。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 統一エラーレスポンス
///
/// `details` はフレームワークレベルの 500、`message` は捕捉した想定外の障害に
/// のみ付与される。未設定のフィールドは JSON に現れない。
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, status: StatusCode) -> Self {
        Self {
            error: error.into(),
            status: status.as_u16(),
            details: None,
            message: None,
        }
    }
}

/// API エラー
///
/// ハンドラはこの型を返すだけでよく、HTTP ステータスとエンベロープへの変換は
/// `IntoResponse` 実装が一手に引き受ける。
#[derive(Debug)]
pub enum ApiError {
    /// リクエスト本文の欠落・不正、空メッセージなど
    BadRequest(String),
    /// ルート不一致・静的ファイル欠落
    NotFound,
    /// テンプレート読み込み失敗などの内部エラー
    Internal(String),
    /// その他の想定外の障害（パニック含む）
    Unhandled(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(msg, StatusCode::BAD_REQUEST),
                )
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(
                    "ページまたはリソースが見つかりません",
                    StatusCode::NOT_FOUND,
                ),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal server error");
                let mut body = ErrorResponse::new(
                    "サーバー内部エラーが発生しました",
                    StatusCode::INTERNAL_SERVER_ERROR,
                );
                body.details = Some(detail);
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            ApiError::Unhandled(detail) => {
                tracing::error!(error = %detail, "Unhandled application error");
                let mut body = ErrorResponse::new(
                    "アプリケーションエラーが発生しました",
                    StatusCode::INTERNAL_SERVER_ERROR,
                );
                body.message = Some(detail);
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// パニックを汎用 500 エンベロープへ変換する
///
/// `CatchPanicLayer::custom` から呼ばれる。ハンドラ内で何が起きてもクライアント
/// には整形済み JSON が返り、スタックトレースは漏れない。
pub fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    ApiError::Unhandled(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_envelope() {
        let response = ApiError::BadRequest("メッセージが空です".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "メッセージが空です");
        assert_eq!(json["status"], 400);
        assert!(json.get("details").is_none());
        assert!(json.get("message").is_none());
    }

    #[tokio::test]
    async fn test_not_found_envelope_is_fixed() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"], "ページまたはリソースが見つかりません");
        assert_eq!(json["status"], 404);
    }

    #[tokio::test]
    async fn test_internal_envelope_carries_details() {
        let response = ApiError::Internal("template missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "サーバー内部エラーが発生しました");
        assert_eq!(json["details"], "template missing");
    }

    #[tokio::test]
    async fn test_panic_response_is_generic_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "アプリケーションエラーが発生しました");
        assert_eq!(json["message"], "boom");
    }
}
