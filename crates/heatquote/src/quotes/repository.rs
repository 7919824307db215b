use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{PropertyProfile, QuoteId};
use super::recommendation::RecommendationResult;

/// Repository record pairing a submitted profile with its recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub quote_id: QuoteId,
    pub profile: PropertyProfile,
    pub recommendation: RecommendationResult,
    pub requested_on: NaiveDate,
}

impl QuoteRecord {
    pub fn status_view(&self) -> QuoteStatusView {
        QuoteStatusView {
            quote_id: self.quote_id.clone(),
            recommended_system: self.recommendation.recommended_system.label(),
            boiler_size: self.recommendation.boiler_size,
            cylinder_size: self.recommendation.cylinder_size,
            reasoning: self.recommendation.reasoning.clone(),
            matched_scenario_id: self
                .recommendation
                .matched_scenario
                .as_ref()
                .map(|scenario| scenario.id.clone()),
            requested_on: self.requested_on,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait QuoteRepository: Send + Sync {
    fn insert(&self, record: QuoteRecord) -> Result<QuoteRecord, RepositoryError>;
    fn fetch(&self, id: &QuoteId) -> Result<Option<QuoteRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<QuoteRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("quote already exists")]
    Conflict,
    #[error("quote not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Customer-facing summary of a stored quote.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteStatusView {
    pub quote_id: QuoteId,
    pub recommended_system: &'static str,
    pub boiler_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cylinder_size: Option<u32>,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_scenario_id: Option<String>,
    pub requested_on: NaiveDate,
}
