//! End-to-end HTTP tests against the full application router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use medscore_core::{bootstrap, DispatchService};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let registry = bootstrap().expect("catalog must bootstrap");
    api_rest::app(DispatchService::new(registry))
}

async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(app: Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn pesi_baseline() -> Value {
    json!({
        "age": 65,
        "sex": "male",
        "cancer_history": "no",
        "heart_failure_history": "no",
        "chronic_lung_disease_history": "yes",
        "heart_rate_110_or_higher": "yes",
        "systolic_bp_less_than_100": "no",
        "respiratory_rate_30_or_higher": "no",
        "temperature_less_than_36": "no",
        "altered_mental_status": "no",
        "oxygen_saturation_less_than_90": "no"
    })
}

#[tokio::test]
async fn test_pesi_scores_class_iii() {
    let (status, body) = post_json(app(), "/pesi", pesi_baseline()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 105);
    assert_eq!(body["unit"], "points");
    assert_eq!(body["stage"], "Class III");
}

#[tokio::test]
async fn test_pesi_is_idempotent() {
    let (_, first) = post_json(app(), "/pesi", pesi_baseline()).await;
    let (_, second) = post_json(app(), "/pesi", pesi_baseline()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_pesi_rejects_age_below_lower_bound() {
    let mut body = pesi_baseline();
    body["age"] = json!(17);
    let (status, body) = post_json(app(), "/pesi", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "ValidationError");
    assert_eq!(body["details"]["field"], "age");
}

#[tokio::test]
async fn test_missing_field_yields_validation_envelope() {
    let mut body = pesi_baseline();
    body.as_object_mut().unwrap().remove("sex");
    let (status, body) = post_json(app(), "/pesi", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "ValidationError");
}

#[tokio::test]
async fn test_malformed_json_yields_validation_envelope() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/pesi")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "ValidationError");
}

#[tokio::test]
async fn test_gad_7_scores_mild_anxiety() {
    let body = json!({
        "feeling_nervous": 1,
        "not_able_to_stop_worrying": 1,
        "worrying_too_much": 1,
        "trouble_relaxing": 1,
        "restlessness": 1,
        "easily_annoyed": 2,
        "feeling_afraid": 2
    });
    let (status, body) = post_json(app(), "/gad_7", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 9);
    assert_eq!(body["stage"], "Mild Anxiety");
}

#[tokio::test]
async fn test_virsta_temperature_and_wbc_score_higher_risk() {
    let body = json!({
        "staph_aureus_bacteremia": "yes",
        "cerebral_or_peripheral_emboli": "no",
        "meningitis": "no",
        "permanent_intracardiac_device": "no",
        "iv_drug_use": "no",
        "preexisting_native_valve_disease": "no",
        "persistent_bacteremia_over_48h": "no",
        "community_or_healthcare_acquisition": "no",
        "temperature_over_38c": "yes",
        "wbc_over_11000": "yes",
        "severe_sepsis_or_shock": "no"
    });
    let (status, body) = post_json(app(), "/virsta", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 4);
    assert_eq!(body["stage"], "Higher Risk");
}

#[tokio::test]
async fn test_virsta_without_bacteremia_is_a_validation_error() {
    let body = json!({
        "staph_aureus_bacteremia": "no",
        "cerebral_or_peripheral_emboli": "no",
        "meningitis": "no",
        "permanent_intracardiac_device": "no",
        "iv_drug_use": "no",
        "preexisting_native_valve_disease": "no",
        "persistent_bacteremia_over_48h": "no",
        "community_or_healthcare_acquisition": "no",
        "temperature_over_38c": "no",
        "wbc_over_11000": "no",
        "severe_sepsis_or_shock": "no"
    });
    let (status, body) = post_json(app(), "/virsta", body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "ValidationError");
}

#[tokio::test]
async fn test_winters_formula_at_upper_bicarbonate_bound() {
    let (status, body) = post_json(app(), "/winters_formula", json!({ "bicarbonate": 35.0 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 60.5);
    assert_eq!(body["expected_range"]["lower"], 58.5);
    assert_eq!(body["expected_range"]["upper"], 62.5);
}

#[tokio::test]
async fn test_winters_formula_rejects_bicarbonate_above_bound() {
    let (status, body) = post_json(app(), "/winters_formula", json!({ "bicarbonate": 36.0 })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "ValidationError");
    assert_eq!(body["details"]["field"], "bicarbonate");
}

fn edacs_request(age: i64) -> Value {
    json!({
        "age": age,
        "sex": "male",
        "known_cad_or_three_risk_factors": "no",
        "diaphoresis": "no",
        "radiates_to_arm_or_shoulder": "no",
        "pain_worse_with_inspiration": "no",
        "pain_reproduced_by_palpation": "no"
    })
}

#[tokio::test]
async fn test_edacs_accepts_age_bounds() {
    let (status, body) = post_json(app(), "/edacs", edacs_request(120)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], 26);

    let (status, _) = post_json(app(), "/edacs", edacs_request(18)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_edacs_rejects_age_outside_bounds() {
    let (status, body) = post_json(app(), "/edacs", edacs_request(121)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "ValidationError");

    let (status, _) = post_json(app(), "/edacs", edacs_request(17)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health_reports_alive() {
    let (status, body) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_score_listing_covers_full_catalog() {
    let (status, body) = get_json(app(), "/api/scores").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 16);
    assert_eq!(body["scores"].as_array().unwrap().len(), 16);
}

#[tokio::test]
async fn test_score_listing_filters_by_category() {
    let (status, body) = get_json(app(), "/api/scores?category=pulmonology").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    for score in body["scores"].as_array().unwrap() {
        assert_eq!(score["category"], "pulmonology");
    }
}

#[tokio::test]
async fn test_score_listing_search_is_case_insensitive() {
    let (status, body) = get_json(app(), "/api/scores?search=EMBOLISM").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body["scores"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&"pesi"), "search should match pesi: {ids:?}");
}

#[tokio::test]
async fn test_score_metadata_lookup() {
    let (status, body) = get_json(app(), "/api/scores/pesi").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "pesi");
    assert_eq!(body["category"], "pulmonology");
}

#[tokio::test]
async fn test_unknown_score_metadata_is_not_found() {
    let (status, body) = get_json(app(), "/api/scores/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");
}
