//! Quote intake and boiler recommendation.
//!
//! The scenario catalogue and matching engine are pure and synchronous; the
//! service and router wrap them with quote storage and the HTTP surface.

pub mod domain;
pub mod recommendation;
pub mod repository;
pub mod router;
pub mod scenarios;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ConversionScenario, PropertyProfile, QuoteId, QuoteSubmission, SystemType};
pub use recommendation::{RecommendationEngine, RecommendationResult, ScenarioScore};
pub use repository::{QuoteRecord, QuoteRepository, QuoteStatusView, RepositoryError};
pub use router::quote_router;
pub use scenarios::{
    CatalogueImportError, CatalogueImporter, NormalizedScenario, ScenarioCatalogue,
};
pub use service::{QuoteService, QuoteServiceError};
