use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::{error, warn};

/// Failures raised by the content store and its storage media.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored content is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Errors returned by HTTP handlers. Rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Maps a store failure for `operation`. Validation failures keep their
    /// message; anything else is logged and replaced by `message`.
    pub fn from_store(operation: &'static str, message: &str, err: StoreError) -> Self {
        match err {
            StoreError::Validation(reason) => {
                warn!(operation, %reason, "Rejected invalid input");
                ApiError::BadRequest(reason)
            }
            other => {
                error!(operation, error = %other, "Store operation failed");
                ApiError::Internal(message.to_string())
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized | ApiError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}
