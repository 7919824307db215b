use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

use heatquote::error::AppError;
use heatquote::quotes::{
    quote_router, CatalogueImporter, PropertyProfile, QuoteRepository, QuoteService,
    RecommendationEngine, RecommendationResult, ScenarioScore,
};

#[derive(Debug, Deserialize)]
pub(crate) struct QuotePreviewRequest {
    pub(crate) property: PropertyProfile,
    #[serde(default)]
    pub(crate) include_scores: bool,
    #[serde(default)]
    pub(crate) catalogue_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuotePreviewResponse {
    pub(crate) property: PropertyProfile,
    pub(crate) catalogue_source: CatalogueSource,
    pub(crate) recommendation: RecommendationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) scores: Option<Vec<ScenarioScore>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum CatalogueSource {
    BuiltIn,
    Imported,
}

pub(crate) fn with_quote_routes<R>(service: Arc<QuoteService<R>>) -> axum::Router
where
    R: QuoteRepository + 'static,
{
    quote_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/quotes/preview",
            axum::routing::post(quote_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Computes a recommendation without storing a quote, optionally against an
/// inline scenario CSV instead of the built-in catalogue.
pub(crate) async fn quote_preview_endpoint(
    Json(payload): Json<QuotePreviewRequest>,
) -> Result<Json<QuotePreviewResponse>, AppError> {
    let QuotePreviewRequest {
        property,
        include_scores,
        catalogue_csv,
    } = payload;

    let (engine, catalogue_source) = match catalogue_csv {
        Some(csv) => {
            let reader = Cursor::new(csv.into_bytes());
            let catalogue = CatalogueImporter::from_reader(reader)?;
            (RecommendationEngine::new(catalogue), CatalogueSource::Imported)
        }
        None => (RecommendationEngine::standard(), CatalogueSource::BuiltIn),
    };

    let recommendation = engine.recommend(&property);
    let scores = if include_scores {
        Some(engine.rank(&property))
    } else {
        None
    };

    Ok(Json(QuotePreviewResponse {
        property,
        catalogue_source,
        recommendation,
        scores,
    }))
}
