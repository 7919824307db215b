mod fallback;
mod rules;

pub use rules::ScenarioScore;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::quotes::domain::{ConversionScenario, PropertyProfile, SystemType};
use crate::quotes::scenarios::ScenarioCatalogue;

/// Boiler output assumed when a matched scenario carries no kW figure.
const DEFAULT_BOILER_KW: u32 = 30;

/// Stateless matcher applying the scenario catalogue to a property profile.
///
/// Scoring touches no shared mutable state and performs no I/O, so a single
/// engine can serve concurrent callers directly.
pub struct RecommendationEngine {
    catalogue: Arc<ScenarioCatalogue>,
}

impl RecommendationEngine {
    pub fn new(catalogue: ScenarioCatalogue) -> Self {
        Self {
            catalogue: Arc::new(catalogue),
        }
    }

    /// Engine backed by the built-in scenario table.
    pub fn standard() -> Self {
        Self {
            catalogue: ScenarioCatalogue::standard(),
        }
    }

    pub fn catalogue(&self) -> &ScenarioCatalogue {
        &self.catalogue
    }

    /// Maps a profile onto the best-scoring catalogue entry, or onto the
    /// threshold rules when the catalogue is empty.
    ///
    /// There is no minimum acceptable score: a non-empty catalogue always
    /// produces a match, however weak, and ties go to the earlier entry.
    pub fn recommend(&self, profile: &PropertyProfile) -> RecommendationResult {
        let mut best: Option<(&ConversionScenario, f64)> = None;

        for entry in self.catalogue.entries() {
            let score = rules::score_scenario(profile, entry);
            if best.map_or(true, |(_, top)| score.total > top) {
                best = Some((entry.scenario(), score.total));
            }
        }

        match best {
            Some((scenario, _)) => result_from_scenario(scenario),
            None => fallback::fallback_recommendation(profile),
        }
    }

    /// Full score breakdown for every catalogue entry, best first.
    ///
    /// Diagnostic companion to [`recommend`](Self::recommend); the first
    /// element is always the entry `recommend` would match.
    pub fn rank(&self, profile: &PropertyProfile) -> Vec<ScenarioScore> {
        let mut scores: Vec<ScenarioScore> = self
            .catalogue
            .entries()
            .iter()
            .map(|entry| rules::score_scenario(profile, entry))
            .collect();

        scores.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scores
    }
}

fn result_from_scenario(scenario: &ConversionScenario) -> RecommendationResult {
    let recommended_system = if scenario.recommendation.contains("System") {
        SystemType::System
    } else if scenario.recommendation.contains("Regular") {
        SystemType::Regular
    } else {
        SystemType::Combi
    };

    RecommendationResult {
        recommended_system,
        boiler_size: scenario.kw_output.unwrap_or(DEFAULT_BOILER_KW),
        cylinder_size: scenario.cylinder_size,
        reasoning: scenario.reasoning.clone(),
        matched_scenario: Some(scenario.clone()),
    }
}

/// Structured recommendation returned for every profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommended_system: SystemType,
    pub boiler_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cylinder_size: Option<u32>,
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_scenario: Option<ConversionScenario>,
}
