//! The uniform error envelope shared by every calculator endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use medscore_core::DispatchError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;

/// Wire shape of every error response:
/// `{ "error": ..., "message": ..., "details": { ... } }`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Stable error class: `ValidationError`, `NotFound`,
    /// `CalculationError`, or `InternalServerError`.
    pub error: String,
    pub message: String,
    #[schema(value_type = Object)]
    pub details: Value,
}

/// API-level failure, carrying its HTTP classification.
///
/// - `Validation` → 422: a request field failed schema validation, or a
///   scoring function rejected a cross-field combination.
/// - `NotFound` → 404: an unknown identifier on a catalog lookup.
/// - `Calculation` → 500: a scoring function failed unexpectedly.
/// - `Internal` → 500: a configuration fault, such as a routed calculator
///   with no registry entry.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Calculation(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details: json!({}),
        }
    }

    pub fn validation_with_details(message: impl Into<String>, details: Value) -> Self {
        ApiError::Validation {
            message: message.into(),
            details,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Calculation(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(self) -> ErrorBody {
        match self {
            ApiError::Validation { message, details } => ErrorBody {
                error: "ValidationError".into(),
                message,
                details,
            },
            ApiError::NotFound(message) => ErrorBody {
                error: "NotFound".into(),
                message,
                details: json!({}),
            },
            ApiError::Calculation(message) => ErrorBody {
                error: "CalculationError".into(),
                message,
                details: json!({}),
            },
            ApiError::Internal(message) => ErrorBody {
                error: "InternalServerError".into(),
                message,
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.body())).into_response()
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            // An unroutable identifier is a registration bug, not a user
            // error.
            DispatchError::NotFound(id) => {
                ApiError::Internal(format!("calculator '{id}' is not registered"))
            }
            DispatchError::Validation(message) => ApiError::validation(message),
            DispatchError::Internal(message) => ApiError::Calculation(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_422_envelope() {
        let err = ApiError::validation("age must be between 18 and 120");
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = err.body();
        assert_eq!(body.error, "ValidationError");
        assert_eq!(body.details, json!({}));
    }

    #[test]
    fn test_dispatch_not_found_is_internal_server_error() {
        let err = ApiError::from(DispatchError::NotFound("pesi".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().error, "InternalServerError");
    }

    #[test]
    fn test_dispatch_validation_keeps_message() {
        let err = ApiError::from(DispatchError::Validation("conflicting inputs".into()));
        let body = err.body();
        assert_eq!(body.error, "ValidationError");
        assert_eq!(body.message, "conflicting inputs");
    }
}
