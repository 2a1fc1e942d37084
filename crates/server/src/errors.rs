use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// Error body every endpoint shares: `{"error": ..., "detail": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &str, detail: Option<String>) -> Self {
        Self {
            status,
            error: error.to_string(),
            detail,
        }
    }

    /// The one 404 shape used by get, update, and delete alike, so a caller
    /// cannot tell which operation missed.
    pub fn product_not_found(id: i32) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "Product not found",
            Some(format!("no product with id {}", id)),
        )
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.error, "detail": self.detail });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(_) | ServiceError::Model(_) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string()))
            }
            ServiceError::NotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string()))
            }
            ServiceError::Conflict(_) => {
                Self::new(StatusCode::CONFLICT, "Conflict", Some(e.to_string()))
            }
            ServiceError::Db(_) => {
                error!(err = %e, "store failure reached the transport boundary");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    Some(e.to_string()),
                )
            }
        }
    }
}
