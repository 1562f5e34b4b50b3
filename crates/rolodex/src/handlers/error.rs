use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use rolodex_core::storage::{repository_error_to_status_code, RepositoryError};

/// Handler-level error that maps onto an HTTP status and a JSON body.
///
/// Storage errors convert automatically via `?`; input errors are built
/// explicitly in the handlers before any storage call is made.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: i64 },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Repository(err) => {
                let code = repository_error_to_status_code(err);
                let status =
                    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                if status.is_server_error() {
                    // Log the storage failure server-side; the caller only
                    // sees a generic message.
                    tracing::error!(error = %err, "storage failure");
                    (status, "internal server error".to_string())
                } else {
                    (status, err.to_string())
                }
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
