//! Neurology calculator endpoints.

use super::run;
use crate::extract::ValidJson;
use crate::models::neurology::{
    CerebralPerfusionPressureRequest, CerebralPerfusionPressureResponse,
    GlasgowComaScaleRequest, GlasgowComaScaleResponse,
};
use crate::AppState;
use api_shared::{ApiError, ErrorBody};
use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/glasgow_coma_scale", post(glasgow_coma_scale))
        .route(
            "/cerebral_perfusion_pressure",
            post(cerebral_perfusion_pressure),
        )
}

#[utoipa::path(
    post,
    path = "/glasgow_coma_scale",
    tag = "neurology",
    operation_id = "glasgow_coma_scale",
    request_body = GlasgowComaScaleRequest,
    responses(
        (status = 200, description = "Calculated GCS with severity grade", body = GlasgowComaScaleResponse),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates the Glasgow Coma Scale total.
pub async fn glasgow_coma_scale(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<GlasgowComaScaleRequest>,
) -> Result<Json<GlasgowComaScaleResponse>, ApiError> {
    run(&state, "glasgow_coma_scale", &req)
}

#[utoipa::path(
    post,
    path = "/cerebral_perfusion_pressure",
    tag = "neurology",
    operation_id = "cerebral_perfusion_pressure",
    request_body = CerebralPerfusionPressureRequest,
    responses(
        (status = 200, description = "Calculated cerebral perfusion pressure", body = CerebralPerfusionPressureResponse),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates cerebral perfusion pressure from MAP and ICP.
pub async fn cerebral_perfusion_pressure(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CerebralPerfusionPressureRequest>,
) -> Result<Json<CerebralPerfusionPressureResponse>, ApiError> {
    run(&state, "cerebral_perfusion_pressure", &req)
}
