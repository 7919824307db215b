use std::sync::Arc;

use super::common::*;
use crate::quotes::domain::{QuoteId, SystemType};
use crate::quotes::recommendation::RecommendationEngine;
use crate::quotes::repository::{QuoteRepository, RepositoryError};
use crate::quotes::service::{QuoteService, QuoteServiceError};

#[test]
fn quote_persists_the_recommendation() {
    let (service, repository) = build_service();

    let record = service
        .quote(profile(3, 1, 4, "system"), request_date())
        .expect("quote succeeds");

    assert!(record.quote_id.0.starts_with("quote-"));
    assert_eq!(record.recommendation.recommended_system, SystemType::Combi);
    assert_eq!(record.requested_on, request_date());

    let stored = repository
        .fetch(&record.quote_id)
        .expect("repository reachable")
        .expect("record stored");
    assert_eq!(stored, record);
}

#[test]
fn quote_ids_are_unique_across_requests() {
    let (service, _) = build_service();

    let first = service
        .quote(profile(2, 1, 2, "combi"), request_date())
        .expect("first quote succeeds");
    let second = service
        .quote(profile(2, 1, 2, "combi"), request_date())
        .expect("second quote succeeds");

    assert_ne!(first.quote_id, second.quote_id);
}

#[test]
fn get_surfaces_not_found_for_unknown_ids() {
    let (service, _) = build_service();

    let result = service.get(&QuoteId("quote-does-not-exist".to_string()));

    assert!(matches!(
        result,
        Err(QuoteServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn conflicting_repository_surfaces_conflict() {
    let service = QuoteService::new(
        Arc::new(ConflictRepository),
        Arc::new(RecommendationEngine::standard()),
    );

    let result = service.quote(profile(2, 1, 2, "combi"), request_date());

    assert!(matches!(
        result,
        Err(QuoteServiceError::Repository(RepositoryError::Conflict))
    ));
}

#[test]
fn recent_returns_newest_first() {
    let (service, _) = build_service();

    let first = service
        .quote(profile(1, 1, 2, "electric"), request_date())
        .expect("first quote succeeds");
    let second = service
        .quote(profile(4, 2, 5, "regular"), request_date())
        .expect("second quote succeeds");

    let recent = service.recent(2).expect("recent listing succeeds");
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].quote_id, second.quote_id);
    assert_eq!(recent[1].quote_id, first.quote_id);
}

#[test]
fn status_view_summarizes_the_recommendation() {
    let (service, _) = build_service();

    let record = service
        .quote(profile(4, 2, 5, "old"), request_date())
        .expect("quote succeeds");
    let view = record.status_view();

    assert_eq!(view.quote_id, record.quote_id);
    assert_eq!(view.recommended_system, "system");
    assert!(view.cylinder_size.expect("cylinder present") >= 150);
    assert!(view.matched_scenario_id.is_some());
    assert_eq!(view.requested_on, request_date());
}
