//! Emergency medicine calculator endpoints.

use super::run;
use crate::extract::ValidJson;
use crate::models::emergency::{EdacsRequest, EdacsResponse};
use crate::AppState;
use api_shared::{ApiError, ErrorBody};
use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new().route("/edacs", post(edacs))
}

#[utoipa::path(
    post,
    path = "/edacs",
    tag = "emergency",
    operation_id = "edacs",
    request_body = EdacsRequest,
    responses(
        (status = 200, description = "Calculated EDACS with risk stratification", body = EdacsResponse),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates the Emergency Department Assessment of Chest Pain Score.
pub async fn edacs(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<EdacsRequest>,
) -> Result<Json<EdacsResponse>, ApiError> {
    run(&state, "edacs", &req)
}
