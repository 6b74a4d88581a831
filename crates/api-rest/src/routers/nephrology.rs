//! Nephrology and acid-base calculator endpoints.

use super::run;
use crate::extract::ValidJson;
use crate::models::nephrology::{
    SerumAnionGapRequest, SerumAnionGapResponse, WintersFormulaRequest, WintersFormulaResponse,
};
use crate::AppState;
use api_shared::{ApiError, ErrorBody};
use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/winters_formula", post(winters_formula))
        .route("/serum_anion_gap", post(serum_anion_gap))
}

#[utoipa::path(
    post,
    path = "/winters_formula",
    tag = "nephrology",
    operation_id = "winters_formula",
    request_body = WintersFormulaRequest,
    responses(
        (status = 200, description = "Expected pCO2 with compensation analysis", body = WintersFormulaResponse),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates expected respiratory compensation via Winters' formula.
pub async fn winters_formula(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<WintersFormulaRequest>,
) -> Result<Json<WintersFormulaResponse>, ApiError> {
    run(&state, "winters_formula", &req)
}

#[utoipa::path(
    post,
    path = "/serum_anion_gap",
    tag = "nephrology",
    operation_id = "serum_anion_gap",
    request_body = SerumAnionGapRequest,
    responses(
        (status = 200, description = "Calculated anion gap", body = SerumAnionGapResponse),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates the serum anion gap with optional albumin correction.
pub async fn serum_anion_gap(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<SerumAnionGapRequest>,
) -> Result<Json<SerumAnionGapResponse>, ApiError> {
    run(&state, "serum_anion_gap", &req)
}
