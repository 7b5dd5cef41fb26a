use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use travels_core::TravelsError;

/// Edge translation of the domain error taxonomy into HTTP responses.
/// Field-level validation failures serialize as an array body; every other
/// class carries a single-message object.
#[derive(Debug)]
pub struct AppError(TravelsError);

impl From<TravelsError> for AppError {
    fn from(err: TravelsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            TravelsError::ValidationFailures(violations) => {
                (StatusCode::BAD_REQUEST, Json(violations)).into_response()
            }
            TravelsError::RequestShape(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            err @ TravelsError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": err.to_string() })),
            )
                .into_response(),
            TravelsError::AlreadyExists(message) => {
                (StatusCode::CONFLICT, Json(json!({ "message": message }))).into_response()
            }
            TravelsError::Repository(err) => {
                tracing::error!("Repository error: {}", err);
                internal()
            }
            TravelsError::Internal(cause) => {
                tracing::error!("Internal error: {}", cause);
                internal()
            }
        }
    }
}

// Causes are logged above, never returned to the caller.
fn internal() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Internal Server Error" })),
    )
        .into_response()
}
