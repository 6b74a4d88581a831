//! Infectious disease calculator endpoints.

use super::run;
use crate::extract::ValidJson;
use crate::models::infectious_disease::{
    JonesCriteriaRequest, JonesCriteriaResponse, VirstaRequest, VirstaResponse,
};
use crate::AppState;
use api_shared::{ApiError, ErrorBody};
use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/virsta", post(virsta))
        .route("/jones_criteria", post(jones_criteria))
}

#[utoipa::path(
    post,
    path = "/virsta",
    tag = "infectious_disease",
    operation_id = "virsta",
    request_body = VirstaRequest,
    responses(
        (status = 200, description = "Calculated VIRSTA score with endocarditis risk", body = VirstaResponse),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates the VIRSTA infective endocarditis risk score.
pub async fn virsta(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<VirstaRequest>,
) -> Result<Json<VirstaResponse>, ApiError> {
    run(&state, "virsta", &req)
}

#[utoipa::path(
    post,
    path = "/jones_criteria",
    tag = "infectious_disease",
    operation_id = "jones_criteria",
    request_body = JonesCriteriaRequest,
    responses(
        (status = 200, description = "Jones criteria verdict with breakdown", body = JonesCriteriaResponse),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Applies the revised Jones criteria for acute rheumatic fever.
pub async fn jones_criteria(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<JonesCriteriaRequest>,
) -> Result<Json<JonesCriteriaResponse>, ApiError> {
    run(&state, "jones_criteria", &req)
}
