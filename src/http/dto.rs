//! Data Transfer Objects
//!
//! API のリクエスト／レスポンス構造体。エンティティはすべてリクエスト単位の
//! 一時データで、リクエストをまたいで保持されることはない。

use serde::{Deserialize, Serialize};

// ============================================================================
// Chat
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// 欠落時は空文字として扱い、バリデーションで弾く
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub text: String,
    /// 現状は常に空。将来の検索ソース表示用のプレースホルダ
    pub sources: Vec<String>,
}

// ============================================================================
// Task
// ============================================================================

/// タスク状態（ワイヤ形式はケバブケース: "in-progress" など）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub status: TaskStatus,
}

/// POST /api/tasks の部分指定リクエスト
///
/// 省略されたフィールドは他のフィールドの有無に関わらず常に同じ
/// デフォルト値で埋められる。
#[derive(Debug, Deserialize)]
pub struct NewTaskRequest {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
}

impl NewTaskRequest {
    pub fn into_task(self) -> Task {
        Task {
            id: self.id.unwrap_or(3),
            title: self.title.unwrap_or_else(|| "New Task".to_string()),
            status: self.status.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Memory
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MemoryItem {
    pub id: i64,
    pub content: String,
}

/// POST /api/memory の部分指定リクエスト
#[derive(Debug, Deserialize)]
pub struct NewMemoryItemRequest {
    pub id: Option<i64>,
    pub content: Option<String>,
}

impl NewMemoryItemRequest {
    pub fn into_memory_item(self) -> MemoryItem {
        MemoryItem {
            id: self.id.unwrap_or(3),
            content: self
                .content
                .unwrap_or_else(|| "New Memory Item".to_string()),
        }
    }
}

// ============================================================================
// Health
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// ISO-8601 形式の現在時刻
    pub timestamp: String,
}
