use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::ValidationIssue;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Validation failed")]
    Validation(Vec<ValidationIssue>),

    #[error("Course catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// Shorthand for a single-issue validation failure
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation(vec![ValidationIssue::new(field, message, None)])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "message": "Validation failed",
                    "errors": errors,
                })),
            )
                .into_response(),
            AppError::CatalogUnavailable(reason) => {
                tracing::error!(reason = %reason, "Rejecting request, course catalog unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Failed to load course data",
                    })),
                )
                    .into_response()
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": message })),
            )
                .into_response(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_lists_issues() {
        let response = AppError::invalid_input("answers", "Answers must be an array").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["errors"][0]["field"], "answers");
        assert_eq!(body["errors"][0]["message"], "Answers must be an array");
    }

    #[tokio::test]
    async fn test_catalog_unavailable_hides_reason() {
        let response =
            AppError::CatalogUnavailable("No such file or directory".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Failed to load course data");
        assert!(body.get("errors").is_none());
    }

    #[tokio::test]
    async fn test_not_found() {
        let response = AppError::NotFound("Route not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Route not found");
    }
}
