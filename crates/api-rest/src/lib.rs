//! # API REST
//!
//! REST surface of the medscore service.
//!
//! Handles:
//! - one POST endpoint per registered calculator, with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (schema validation, JSON serialization, CORS)
//!
//! Uses `api-shared` for the error envelope and health types, and
//! `medscore-core` for the registry and dispatch service.

#![warn(rust_2018_idioms)]

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{ErrorBody, HealthRes, HealthService};
use medscore_core::DispatchService;

pub mod catalog;
pub mod extract;
pub mod models;
pub mod routers;
pub mod validation;

/// Shared state for all request handlers.
///
/// The dispatch service wraps the calculator registry behind an `Arc`, so
/// cloning the state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub dispatch: DispatchService,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        catalog::list_scores,
        catalog::get_score_metadata,
        routers::cardiology::chads2,
        routers::cardiology::euroscore_ii,
        routers::emergency::edacs,
        routers::gastroenterology::child_pugh,
        routers::infectious_disease::virsta,
        routers::infectious_disease::jones_criteria,
        routers::nephrology::winters_formula,
        routers::nephrology::serum_anion_gap,
        routers::neurology::glasgow_coma_scale,
        routers::neurology::cerebral_perfusion_pressure,
        routers::psychiatry::gad_7,
        routers::psychiatry::ciwa_ar,
        routers::psychiatry::cows,
        routers::pulmonology::pesi,
        routers::pulmonology::curb_65,
        routers::pulmonology::decaf_score,
    ),
    components(schemas(
        HealthRes,
        ErrorBody,
        catalog::ScoreMetadata,
        catalog::ScoreListRes,
        models::common::YesNo,
        models::common::Sex,
        models::cardiology::Chads2Request,
        models::cardiology::Chads2Response,
        models::cardiology::CreatinineClearance,
        models::cardiology::NyhaClass,
        models::cardiology::LvFunction,
        models::cardiology::SurgeryUrgency,
        models::cardiology::WeightOfIntervention,
        models::cardiology::EuroScoreIIRequest,
        models::cardiology::EuroScoreIIResponse,
        models::emergency::EdacsRequest,
        models::emergency::EdacsResponse,
        models::gastroenterology::Ascites,
        models::gastroenterology::Encephalopathy,
        models::gastroenterology::ChildPughRequest,
        models::gastroenterology::ChildPughResult,
        models::gastroenterology::ChildPughResponse,
        models::infectious_disease::VirstaRequest,
        models::infectious_disease::VirstaResponse,
        models::infectious_disease::JonesCriteriaRequest,
        models::infectious_disease::CriteriaBreakdown,
        models::infectious_disease::JonesCriteriaResponse,
        models::nephrology::WintersFormulaRequest,
        models::nephrology::ExpectedRange,
        models::nephrology::WintersFormulaResponse,
        models::nephrology::SerumAnionGapRequest,
        models::nephrology::SerumAnionGapResponse,
        models::neurology::GlasgowComaScaleRequest,
        models::neurology::GcsComponents,
        models::neurology::GlasgowComaScaleResponse,
        models::neurology::CerebralPerfusionPressureRequest,
        models::neurology::CerebralPerfusionPressureResponse,
        models::psychiatry::Gad7Request,
        models::psychiatry::Gad7Response,
        models::psychiatry::CiwaArRequest,
        models::psychiatry::CiwaArResponse,
        models::psychiatry::CowsRequest,
        models::psychiatry::CowsResponse,
        models::pulmonology::PesiRequest,
        models::pulmonology::PesiResponse,
        models::pulmonology::Curb65Request,
        models::pulmonology::Curb65Response,
        models::pulmonology::EmrcdDyspnea,
        models::pulmonology::DecafScoreRequest,
        models::pulmonology::DecafScoreResponse,
    ))
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

/// Builds the full application router: health, catalog, one route per
/// calculator, and the Swagger UI.
pub fn app(dispatch: DispatchService) -> Router {
    let state = AppState { dispatch };

    Router::new()
        .route("/health", get(health))
        .route("/api/scores", get(catalog::list_scores))
        .route("/api/scores/:score_id", get(catalog::get_score_metadata))
        .merge(routers::router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
