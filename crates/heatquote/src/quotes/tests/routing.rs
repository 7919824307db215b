use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::quotes::domain::QuoteSubmission;
use crate::quotes::recommendation::RecommendationEngine;
use crate::quotes::router::{status_handler, submit_handler};
use crate::quotes::service::QuoteService;

fn submission() -> QuoteSubmission {
    QuoteSubmission {
        property: profile(3, 1, 4, "system"),
        requested_on: Some(request_date()),
    }
}

#[tokio::test]
async fn submit_route_accepts_payloads() {
    let (service, _) = build_service();
    let router = quote_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/quotes")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&submission()).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload.get("quote_id").is_some());
    assert_eq!(payload.get("recommended_system"), Some(&json!("combi")));
    assert_eq!(payload.get("matched_scenario_id"), Some(&json!("4")));
}

#[tokio::test]
async fn submit_route_defaults_the_current_system() {
    let (service, _) = build_service();
    let router = quote_router_with_service(service);

    let body = json!({
        "property": { "bedrooms": 2, "bathrooms": 1, "occupants": 2 }
    });

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/quotes")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn submit_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(QuoteService::new(
        Arc::new(ConflictRepository),
        Arc::new(RecommendationEngine::standard()),
    ));

    let response =
        submit_handler::<ConflictRepository>(State(service), axum::Json(submission())).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(QuoteService::new(
        Arc::new(UnavailableRepository),
        Arc::new(RecommendationEngine::standard()),
    ));

    let response =
        submit_handler::<UnavailableRepository>(State(service), axum::Json(submission())).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn status_handler_returns_found_records() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let record = service
        .quote(profile(4, 2, 5, "regular"), request_date())
        .expect("quote succeeds");

    let response = status_handler::<MemoryRepository>(
        State(service),
        axum::extract::Path(record.quote_id.0.clone()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("quote_id").and_then(serde_json::Value::as_str),
        Some(record.quote_id.0.as_str())
    );
    assert_eq!(payload.get("recommended_system"), Some(&json!("system")));
}

#[tokio::test]
async fn status_handler_returns_not_found_for_unknown_quotes() {
    let (service, _) = build_service();
    let service = Arc::new(service);

    let response = status_handler::<MemoryRepository>(
        State(service),
        axum::extract::Path("quote-unknown".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("error"), Some(&json!("quote not found")));
}
