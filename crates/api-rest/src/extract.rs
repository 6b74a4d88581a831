//! Request extraction with schema validation.
//!
//! `ValidJson<T>` decodes the JSON body into the calculator's typed request
//! model and then runs its declared field validation. Any failure — malformed
//! JSON, a missing or mistyped field, an out-of-range value — becomes a
//! structured 422 envelope before the request reaches dispatch.

use api_shared::ApiError;
use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::json;

/// A single-field validation failure.
#[derive(Debug)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        ApiError::validation_with_details(
            format!("{} {}", err.field, err.message),
            json!({ "field": err.field }),
        )
    }
}

/// Field-level checks a request model declares beyond what deserialization
/// enforces, such as numeric bounds.
pub trait ValidateRequest {
    fn validate(&self) -> Result<(), FieldError>;
}

/// JSON extractor that rejects invalid payloads with the uniform 422
/// envelope.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateRequest,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection.body_text()))?;
        value.validate().map_err(ApiError::from)?;
        Ok(ValidJson(value))
    }
}
