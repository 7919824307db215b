use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::quotes::domain::{ConversionScenario, PropertyProfile, QuoteId};
use crate::quotes::recommendation::RecommendationEngine;
use crate::quotes::repository::{QuoteRecord, QuoteRepository, RepositoryError};
use crate::quotes::scenarios::ScenarioCatalogue;
use crate::quotes::service::QuoteService;
use crate::quotes::quote_router;

pub(super) fn profile(
    bedrooms: u8,
    bathrooms: u8,
    occupants: u8,
    current_system: &str,
) -> PropertyProfile {
    PropertyProfile {
        bedrooms,
        bathrooms,
        occupants,
        current_system: current_system.to_string(),
    }
}

pub(super) fn standard_engine() -> RecommendationEngine {
    RecommendationEngine::standard()
}

pub(super) fn empty_engine() -> RecommendationEngine {
    RecommendationEngine::new(ScenarioCatalogue::from_scenarios(Vec::new()))
}

pub(super) fn scenario(
    id: &str,
    property_description: &str,
    occupants: &str,
    current_system: &str,
    recommendation: &str,
    kw_output: Option<u32>,
    cylinder_size: Option<u32>,
) -> ConversionScenario {
    ConversionScenario {
        id: id.to_string(),
        property_description: property_description.to_string(),
        occupants: occupants.to_string(),
        current_system: current_system.to_string(),
        recommendation: recommendation.to_string(),
        recommended_specification: format!("{recommendation} specification"),
        flow_rate_lpm: None,
        kw_output,
        cylinder_size,
        reasoning: format!("{id} reasoning"),
    }
}

pub(super) fn request_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date")
}

pub(super) fn build_service() -> (QuoteService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let engine = Arc::new(RecommendationEngine::standard());
    let service = QuoteService::new(repository.clone(), engine);
    (service, repository)
}

pub(super) fn quote_router_with_service(
    service: QuoteService<MemoryRepository>,
) -> axum::Router {
    quote_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 8192)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<QuoteRecord>>>,
}

impl QuoteRepository for MemoryRepository {
    fn insert(&self, record: QuoteRecord) -> Result<QuoteRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|stored| stored.quote_id == record.quote_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &QuoteId) -> Result<Option<QuoteRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.quote_id == id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<QuoteRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

pub(super) struct ConflictRepository;

impl QuoteRepository for ConflictRepository {
    fn insert(&self, _record: QuoteRecord) -> Result<QuoteRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &QuoteId) -> Result<Option<QuoteRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<QuoteRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl QuoteRepository for UnavailableRepository {
    fn insert(&self, _record: QuoteRecord) -> Result<QuoteRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &QuoteId) -> Result<Option<QuoteRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<QuoteRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
