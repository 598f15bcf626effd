//! Memory Handlers
//!
//! エージェントの長期記憶 API。タスク API と同じく、データ層が載るまでは
//! 固定のダミーデータとデフォルト埋めエコーバックのみ。

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};

use crate::http::dto::{MemoryItem, NewMemoryItemRequest};
use crate::http::error::ApiError;

/// GET /api/memory - 固定 2 件のメモリ一覧
pub async fn list_memory() -> Json<Vec<MemoryItem>> {
    Json(vec![
        MemoryItem {
            id: 1,
            content: "Memory item 1".to_string(),
        },
        MemoryItem {
            id: 2,
            content: "Memory item 2".to_string(),
        },
    ])
}

/// POST /api/memory - 省略フィールドをデフォルトで埋めてエコーバック
pub async fn create_memory_item(
    payload: Result<Json<NewMemoryItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MemoryItem>), ApiError> {
    let Json(req) = payload
        .map_err(|_| ApiError::BadRequest("JSONデータが見つかりません".to_string()))?;

    Ok((StatusCode::CREATED, Json(req.into_memory_item())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_memory_returns_fixed_dataset() {
        let Json(items) = list_memory().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].content, "Memory item 1");
        assert_eq!(items[1].content, "Memory item 2");
    }

    #[tokio::test]
    async fn test_create_memory_item_keeps_provided_id() {
        let payload = Ok(Json(NewMemoryItemRequest {
            id: Some(42),
            content: None,
        }));

        let (status, Json(item)) = create_memory_item(payload).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(item.id, 42);
        assert_eq!(item.content, "New Memory Item");
    }
}
