//! Static Asset Handler
//!
//! `/public/*path` でアセットルート配下のファイルを配信する。
//! パスはアセットルートの外へ出てはならない。判定に失敗したパスは
//! 一律 404 とし、存在の有無を区別して漏らさない。

use axum::{
    extract::{Path as UrlPath, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::http::error::ApiError;
use crate::http::state::AppState;

/// GET /public/*path - 静的ファイル配信
pub async fn serve_public(
    State(state): State<Arc<AppState>>,
    UrlPath(path): UrlPath<String>,
) -> Result<Response, ApiError> {
    let Some(relative) = sanitize_path(&path) else {
        tracing::warn!(path = %path, "Rejected asset path outside asset root");
        return Err(ApiError::NotFound);
    };

    let full_path = state.public_dir.join(&relative);
    let bytes = match tokio::fs::read(&full_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(path = %full_path.display(), error = %e, "Asset not found");
            return Err(ApiError::NotFound);
        }
    };

    let mime = mime_guess::from_path(&full_path).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response())
}

/// リクエストパスをアセットルート相対の安全なパスへ正規化する
///
/// 通常のパス要素のみを許可する。`..`、ルート参照、ドライブプレフィックス
/// を含むパスは None を返す。
fn sanitize_path(raw: &str) -> Option<PathBuf> {
    let mut sanitized = PathBuf::new();
    for component in Path::new(raw).components() {
        match component {
            Component::Normal(part) => sanitized.push(part),
            // CurDir は無害だが、それ以外が一つでも混ざれば拒否する
            Component::CurDir => {}
            _ => return None,
        }
    }

    if sanitized.as_os_str().is_empty() {
        None
    } else {
        Some(sanitized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_accepts_nested_path() {
        assert_eq!(
            sanitize_path("js/app.js"),
            Some(PathBuf::from("js/app.js"))
        );
    }

    #[test]
    fn test_sanitize_rejects_parent_traversal() {
        assert_eq!(sanitize_path("../../etc/passwd"), None);
        assert_eq!(sanitize_path("js/../../secret"), None);
    }

    #[test]
    fn test_sanitize_rejects_absolute_path() {
        assert_eq!(sanitize_path("/etc/passwd"), None);
    }

    #[test]
    fn test_sanitize_rejects_empty_path() {
        assert_eq!(sanitize_path(""), None);
        assert_eq!(sanitize_path("./"), None);
    }
}
