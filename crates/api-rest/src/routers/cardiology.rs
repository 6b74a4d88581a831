//! Cardiology calculator endpoints.

use super::run;
use crate::extract::ValidJson;
use crate::models::cardiology::{
    Chads2Request, Chads2Response, EuroScoreIIRequest, EuroScoreIIResponse,
};
use crate::AppState;
use api_shared::{ApiError, ErrorBody};
use axum::extract::State;
use axum::response::Json;
use axum::routing::post;
use axum::Router;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chads2", post(chads2))
        .route("/euroscore_ii", post(euroscore_ii))
}

#[utoipa::path(
    post,
    path = "/chads2",
    tag = "cardiology",
    operation_id = "chads2",
    request_body = Chads2Request,
    responses(
        (status = 200, description = "Calculated CHADS2 score", body = Chads2Response),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates the CHADS2 stroke-risk score for atrial fibrillation.
pub async fn chads2(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<Chads2Request>,
) -> Result<Json<Chads2Response>, ApiError> {
    run(&state, "chads2", &req)
}

#[utoipa::path(
    post,
    path = "/euroscore_ii",
    tag = "cardiology",
    operation_id = "euroscore_ii",
    request_body = EuroScoreIIRequest,
    responses(
        (status = 200, description = "Predicted in-hospital mortality", body = EuroScoreIIResponse),
        (status = 422, description = "Validation failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
/// Calculates EuroSCORE II predicted mortality for cardiac surgery.
pub async fn euroscore_ii(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<EuroScoreIIRequest>,
) -> Result<Json<EuroScoreIIResponse>, ApiError> {
    run(&state, "euroscore_ii", &req)
}
