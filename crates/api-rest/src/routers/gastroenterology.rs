//! Gastroenterology calculator endpoints.

use super::run;
use crate::extract::ValidJson;
use crate::models::gastroenterology::{ChildPughRequest, ChildPughResponse};
use crate::AppState;
use api_shared::{ApiError, ErrorBody};
use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().route("/child_pugh", post(child_pugh))
}

#[utoipa::path(
    post,
    path = "/child_pugh",
    tag = "gastroenterology",
    operation_id = "child_pugh",
    request_body = ChildPughRequest,
    responses(
        (status = 200, description = "Calculated Child-Pugh score and grade", body = ChildPughResponse),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates the Child-Pugh score for cirrhosis severity.
pub async fn child_pugh(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ChildPughRequest>,
) -> Result<Json<ChildPughResponse>, ApiError> {
    run(&state, "child_pugh", &req)
}
