use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde_json::json;

use super::domain::{QuoteId, QuoteSubmission};
use super::repository::{QuoteRepository, RepositoryError};
use super::service::{QuoteService, QuoteServiceError};

/// Router builder exposing HTTP endpoints for quote intake and lookup.
pub fn quote_router<R>(service: Arc<QuoteService<R>>) -> Router
where
    R: QuoteRepository + 'static,
{
    Router::new()
        .route("/api/v1/quotes", post(submit_handler::<R>))
        .route("/api/v1/quotes/:quote_id", get(status_handler::<R>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<QuoteService<R>>>,
    axum::Json(submission): axum::Json<QuoteSubmission>,
) -> Response
where
    R: QuoteRepository + 'static,
{
    let QuoteSubmission {
        property,
        requested_on,
    } = submission;
    let requested_on = requested_on.unwrap_or_else(|| Local::now().date_naive());

    match service.quote(property, requested_on) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(QuoteServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "quote already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<QuoteService<R>>>,
    Path(quote_id): Path<String>,
) -> Response
where
    R: QuoteRepository + 'static,
{
    let id = QuoteId(quote_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(QuoteServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "quote_id": id.0,
                "error": "quote not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
