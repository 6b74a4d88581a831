//! Psychiatry and addiction-medicine calculator endpoints.

use super::run;
use crate::extract::ValidJson;
use crate::models::psychiatry::{
    CiwaArRequest, CiwaArResponse, CowsRequest, CowsResponse, Gad7Request, Gad7Response,
};
use crate::AppState;
use api_shared::{ApiError, ErrorBody};
use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/gad_7", post(gad_7))
        .route("/ciwa_ar", post(ciwa_ar))
        .route("/cows", post(cows))
}

#[utoipa::path(
    post,
    path = "/gad_7",
    tag = "psychiatry",
    operation_id = "gad_7",
    request_body = Gad7Request,
    responses(
        (status = 200, description = "Calculated GAD-7 score with severity band", body = Gad7Response),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates the GAD-7 anxiety screening score.
pub async fn gad_7(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<Gad7Request>,
) -> Result<Json<Gad7Response>, ApiError> {
    run(&state, "gad_7", &req)
}

#[utoipa::path(
    post,
    path = "/ciwa_ar",
    tag = "psychiatry",
    operation_id = "ciwa_ar",
    request_body = CiwaArRequest,
    responses(
        (status = 200, description = "Calculated CIWA-Ar score", body = CiwaArResponse),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates the CIWA-Ar alcohol withdrawal severity score.
pub async fn ciwa_ar(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CiwaArRequest>,
) -> Result<Json<CiwaArResponse>, ApiError> {
    run(&state, "ciwa_ar", &req)
}

#[utoipa::path(
    post,
    path = "/cows",
    tag = "psychiatry",
    operation_id = "cows",
    request_body = CowsRequest,
    responses(
        (status = 200, description = "Calculated COWS score", body = CowsResponse),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates the Clinical Opiate Withdrawal Scale score.
pub async fn cows(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CowsRequest>,
) -> Result<Json<CowsResponse>, ApiError> {
    run(&state, "cows", &req)
}
