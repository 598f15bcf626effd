//! Task Handlers
//!
//! タスク API。データ層が入るまでは固定のダミーデータを返す。
//! 一覧はリクエストごとに組み立て直され、POST で受けた内容も保存されない。

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};

use crate::http::dto::{NewTaskRequest, Task, TaskStatus};
use crate::http::error::ApiError;

/// GET /api/tasks - 固定 2 件のタスク一覧
pub async fn list_tasks() -> Json<Vec<Task>> {
    Json(vec![
        Task {
            id: 1,
            title: "Task 1".to_string(),
            status: TaskStatus::InProgress,
        },
        Task {
            id: 2,
            title: "Task 2".to_string(),
            status: TaskStatus::Completed,
        },
    ])
}

/// POST /api/tasks - 省略フィールドをデフォルトで埋めてエコーバック
pub async fn create_task(
    payload: Result<Json<NewTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(req) = payload
        .map_err(|_| ApiError::BadRequest("JSONデータが見つかりません".to_string()))?;

    Ok((StatusCode::CREATED, Json(req.into_task())))
}
