//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Vend POS                               │
//! │                                                                         │
//! │  POST /sales                                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler: Result<Json<T>, ApiError>                              │  │
//! │  │         │                                                        │  │
//! │  │  Bad JSON / bad field? ── ValidationError ──────► 400            │  │
//! │  │         │                                                        │  │
//! │  │  Unknown product? ─────── StoreError::ProductNotFound ─► 400     │  │
//! │  │         │                                                        │  │
//! │  │  Empty catalog on list? ─ ApiError::not_found ──► 404            │  │
//! │  │         │                                                        │  │
//! │  │  Poisoned lock? ───────── StoreError::LockPoisoned ─► 500        │  │
//! │  │         │                                                        │  │
//! │  │  Success ───────────────────────────────────────► 200 + JSON     │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use vend_core::ValidationError;
use vend_store::StoreError;

/// API error returned from handlers.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// {
///   "code": "PRODUCT_NOT_FOUND",
///   "message": "product with id of 6f1c… does not exist in the catalog"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// A sale referenced an unknown product (400)
    ProductNotFound,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError | ErrorCode::ProductNotFound => StatusCode::BAD_REQUEST,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// HTTP status this error is sent with.
    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ProductNotFound { .. } => {
                ApiError::new(ErrorCode::ProductNotFound, err.to_string())
            }
            StoreError::Validation(e) => e.into(),
            StoreError::LockPoisoned => {
                // Log the actual error but return a generic message
                error!("Store operation failed: {}", err);
                ApiError::internal("Catalog unavailable")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(status = %status, code = ?self.code, message = %self.message, "Request failed");
        (status, Json(self)).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::new(ErrorCode::ProductNotFound, "x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_errors_map_to_codes() {
        let err: ApiError = StoreError::ProductNotFound {
            id: Default::default(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ProductNotFound);

        let err: ApiError = StoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");

        let err: ApiError = StoreError::LockPoisoned.into();
        assert_eq!(err.code, ErrorCode::Internal);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::validation("bad")).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "bad");
    }
}
