use super::RecommendationResult;
use crate::quotes::domain::{PropertyProfile, SystemType};

/// Threshold rules applied when no catalogue is available to score against.
pub(crate) fn fallback_recommendation(profile: &PropertyProfile) -> RecommendationResult {
    if profile.bathrooms >= 3 {
        return RecommendationResult {
            recommended_system: SystemType::System,
            boiler_size: 32,
            cylinder_size: Some(250),
            reasoning: "Three or more bathrooms need stored hot water for simultaneous usage - \
                        a system boiler with a 250L cylinder keeps every outlet supplied."
                .to_string(),
            matched_scenario: None,
        };
    }

    if profile.bathrooms == 2 && (profile.bedrooms >= 4 || profile.occupants >= 4) {
        return RecommendationResult {
            recommended_system: SystemType::System,
            boiler_size: 28,
            cylinder_size: Some(210),
            reasoning: "High occupancy across two bathrooms exceeds what an instantaneous boiler \
                        can serve - a system boiler with a 210L cylinder covers overlapping demand."
                .to_string(),
            matched_scenario: None,
        };
    }

    let boiler_size = if profile.bathrooms == 2 { 35 } else { 30 };

    RecommendationResult {
        recommended_system: SystemType::Combi,
        boiler_size,
        cylinder_size: None,
        reasoning: "Hot water demand is low enough for an instantaneous combi, avoiding the cost \
                    and space of a cylinder."
            .to_string(),
        matched_scenario: None,
    }
}
