use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;

use super::domain::{PropertyProfile, QuoteId};
use super::recommendation::RecommendationEngine;
use super::repository::{QuoteRecord, QuoteRepository, RepositoryError};

/// Service composing the recommendation engine with quote storage.
pub struct QuoteService<R> {
    repository: Arc<R>,
    engine: Arc<RecommendationEngine>,
}

static QUOTE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_quote_id() -> QuoteId {
    let id = QUOTE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    QuoteId(format!("quote-{id:06}"))
}

impl<R> QuoteService<R>
where
    R: QuoteRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: Arc<RecommendationEngine>) -> Self {
        Self { repository, engine }
    }

    pub fn engine(&self) -> &RecommendationEngine {
        &self.engine
    }

    /// Compute a recommendation for the profile and persist it as a quote.
    ///
    /// The engine call itself stays pure; the only side effect here is the
    /// repository insert.
    pub fn quote(
        &self,
        profile: PropertyProfile,
        requested_on: NaiveDate,
    ) -> Result<QuoteRecord, QuoteServiceError> {
        let recommendation = self.engine.recommend(&profile);

        let record = QuoteRecord {
            quote_id: next_quote_id(),
            profile,
            recommendation,
            requested_on,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Fetch a stored quote for API responses.
    pub fn get(&self, quote_id: &QuoteId) -> Result<QuoteRecord, QuoteServiceError> {
        let record = self
            .repository
            .fetch(quote_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Latest stored quotes, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<QuoteRecord>, QuoteServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the quote service.
#[derive(Debug, thiserror::Error)]
pub enum QuoteServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
