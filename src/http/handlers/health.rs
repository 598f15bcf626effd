//! Health Check Handler

use axum::Json;
use chrono::Local;

use crate::http::dto::HealthResponse;

/// GET /health - 死活監視エンドポイント
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Local::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn test_health_reports_healthy_with_valid_timestamp() {
        let Json(response) = health().await;
        assert_eq!(response.status, "healthy");
        assert!(DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
    }
}
