//! Score catalog endpoints.
//!
//! Read-only metadata about the registered calculators, used by clients to
//! discover which scores are available and how they are grouped.

use crate::AppState;
use api_shared::{ApiError, ErrorBody};
use axum::extract::{Path, Query, State};
use axum::response::Json;
use medscore_core::CalculatorEntry;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Metadata describing a single registered calculator.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreMetadata {
    /// Stable identifier, doubles as the POST route segment.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Specialty grouping, e.g. `cardiology`.
    pub category: String,
}

impl From<&CalculatorEntry> for ScoreMetadata {
    fn from(entry: &CalculatorEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title.to_string(),
            description: entry.description.to_string(),
            category: entry.specialty.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ScoreListRes {
    pub scores: Vec<ScoreMetadata>,
    pub total: usize,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ScoreListQuery {
    /// Restrict the listing to one specialty.
    pub category: Option<String>,
    /// Case-insensitive substring match over id, title and description.
    pub search: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/scores",
    tag = "catalog",
    operation_id = "list_scores",
    params(ScoreListQuery),
    responses(
        (status = 200, description = "Registered calculators matching the filters", body = ScoreListRes)
    )
)]
/// Lists registered calculators, optionally filtered by category or search term.
pub async fn list_scores(
    State(state): State<AppState>,
    Query(query): Query<ScoreListQuery>,
) -> Json<ScoreListRes> {
    let needle = query.search.as_deref().map(str::to_lowercase);
    let scores: Vec<ScoreMetadata> = state
        .dispatch
        .registry()
        .entries()
        .filter(|entry| match query.category.as_deref() {
            Some(category) => entry.specialty.as_str() == category,
            None => true,
        })
        .filter(|entry| match needle.as_deref() {
            Some(needle) => {
                entry.id.to_lowercase().contains(needle)
                    || entry.title.to_lowercase().contains(needle)
                    || entry.description.to_lowercase().contains(needle)
            }
            None => true,
        })
        .map(ScoreMetadata::from)
        .collect();
    let total = scores.len();
    Json(ScoreListRes { scores, total })
}

#[utoipa::path(
    get,
    path = "/api/scores/{score_id}",
    tag = "catalog",
    operation_id = "get_score_metadata",
    params(("score_id" = String, Path, description = "Calculator identifier")),
    responses(
        (status = 200, description = "Metadata for the requested calculator", body = ScoreMetadata),
        (status = 404, description = "No calculator registered under this id", body = ErrorBody)
    )
)]
/// Returns metadata for one calculator, or 404 if the id is unknown.
pub async fn get_score_metadata(
    State(state): State<AppState>,
    Path(score_id): Path<String>,
) -> Result<Json<ScoreMetadata>, ApiError> {
    state
        .dispatch
        .registry()
        .resolve(&score_id)
        .map(|entry| Json(ScoreMetadata::from(entry)))
        .ok_or_else(|| ApiError::NotFound(format!("score '{score_id}' not found")))
}
