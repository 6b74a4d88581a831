//! Calculator endpoints, one route per calculator.
//!
//! Every handler follows the same single-shot shape: decode and validate the
//! typed request, hand the parameter mapping to the dispatch service under
//! the calculator's identifier, and re-check the scoring output against the
//! calculator's typed response model.

use crate::AppState;
use api_shared::ApiError;
use axum::response::Json;
use axum::Router;
use medscore_core::{DispatchError, ParameterSet};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod cardiology;
pub mod emergency;
pub mod gastroenterology;
pub mod infectious_disease;
pub mod nephrology;
pub mod neurology;
pub mod psychiatry;
pub mod pulmonology;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(cardiology::router())
        .merge(emergency::router())
        .merge(gastroenterology::router())
        .merge(infectious_disease::router())
        .merge(nephrology::router())
        .merge(neurology::router())
        .merge(psychiatry::router())
        .merge(pulmonology::router())
}

/// Runs one calculator end to end: request model → parameter set → dispatch
/// → typed response model.
pub(crate) fn run<Req, Res>(
    state: &AppState,
    id: &'static str,
    request: &Req,
) -> Result<Json<Res>, ApiError>
where
    Req: Serialize,
    Res: DeserializeOwned,
{
    let params =
        ParameterSet::from_request(request).map_err(|err| ApiError::Internal(err.to_string()))?;

    let output = state.dispatch.calculate(id, &params).map_err(|err| {
        if !matches!(err, DispatchError::Validation(_)) {
            tracing::error!(calculator = id, error = %err, "calculation failed");
        }
        ApiError::from(err)
    })?;

    let value =
        serde_json::to_value(&output).map_err(|err| ApiError::Internal(err.to_string()))?;
    serde_json::from_value(value).map(Json).map_err(|err| {
        tracing::error!(calculator = id, error = %err, "score output did not match response schema");
        ApiError::Internal(format!(
            "calculator '{id}' produced a result that does not match its response schema"
        ))
    })
}
