//! Pulmonology calculator endpoints.

use super::run;
use crate::extract::ValidJson;
use crate::models::pulmonology::{
    Curb65Request, Curb65Response, DecafScoreRequest, DecafScoreResponse, PesiRequest,
    PesiResponse,
};
use crate::AppState;
use api_shared::{ApiError, ErrorBody};
use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pesi", post(pesi))
        .route("/curb_65", post(curb_65))
        .route("/decaf_score", post(decaf_score))
}

#[utoipa::path(
    post,
    path = "/pesi",
    tag = "pulmonology",
    operation_id = "pesi",
    request_body = PesiRequest,
    responses(
        (status = 200, description = "Calculated PESI score with risk class", body = PesiResponse),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates the Pulmonary Embolism Severity Index.
pub async fn pesi(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<PesiRequest>,
) -> Result<Json<PesiResponse>, ApiError> {
    run(&state, "pesi", &req)
}

#[utoipa::path(
    post,
    path = "/curb_65",
    tag = "pulmonology",
    operation_id = "curb_65",
    request_body = Curb65Request,
    responses(
        (status = 200, description = "Calculated CURB-65 score", body = Curb65Response),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates the CURB-65 pneumonia severity score.
pub async fn curb_65(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<Curb65Request>,
) -> Result<Json<Curb65Response>, ApiError> {
    run(&state, "curb_65", &req)
}

#[utoipa::path(
    post,
    path = "/decaf_score",
    tag = "pulmonology",
    operation_id = "decaf_score",
    request_body = DecafScoreRequest,
    responses(
        (status = 200, description = "Calculated DECAF score", body = DecafScoreResponse),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates the DECAF score for acute COPD exacerbation.
pub async fn decaf_score(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<DecafScoreRequest>,
) -> Result<Json<DecafScoreResponse>, ApiError> {
    run(&state, "decaf_score", &req)
}
