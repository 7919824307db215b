use serde::{Deserialize, Serialize};

use crate::quotes::domain::PropertyProfile;
use crate::quotes::scenarios::NormalizedScenario;

/// Per-scenario score breakdown, surfaced for demo output and previews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioScore {
    pub scenario_id: String,
    pub bedroom_points: f64,
    pub bathroom_points: f64,
    pub occupant_points: f64,
    pub affinity_points: f64,
    pub total: f64,
}

/// Scores one catalogue entry against a profile.
///
/// Bathrooms carry the heaviest weight; a field the entry never parsed
/// contributes zero rather than disqualifying it.
pub(crate) fn score_scenario(
    profile: &PropertyProfile,
    entry: &NormalizedScenario,
) -> ScenarioScore {
    let bedroom_points = match entry.bedrooms() {
        Some(count) if count == profile.bedrooms => 30.0,
        Some(count) => {
            let delta = f64::from(count.abs_diff(profile.bedrooms));
            (20.0 - 5.0 * delta).max(0.0)
        }
        None => 0.0,
    };

    let bathroom_points = match entry.bathrooms() {
        Some(count) if count == profile.bathrooms => 40.0,
        Some(count) => {
            let delta = f64::from(count.abs_diff(profile.bathrooms));
            (30.0 - 10.0 * delta).max(0.0)
        }
        None => 0.0,
    };

    let occupant_points = match entry.occupant_estimate() {
        Some(estimate) => {
            let delta = (estimate - f64::from(profile.occupants)).abs();
            if delta < f64::EPSILON {
                20.0
            } else {
                (15.0 - 3.0 * delta).max(0.0)
            }
        }
        None => 0.0,
    };

    let affinity_points = if shares_system_family(
        &profile.current_system,
        &entry.scenario().current_system,
    ) {
        5.0
    } else {
        0.0
    };

    let total = bedroom_points + bathroom_points + occupant_points + affinity_points;

    ScenarioScore {
        scenario_id: entry.scenario().id.clone(),
        bedroom_points,
        bathroom_points,
        occupant_points,
        affinity_points,
        total,
    }
}

fn shares_system_family(profile_system: &str, scenario_system: &str) -> bool {
    let profile_system = profile_system.to_ascii_lowercase();
    let scenario_system = scenario_system.to_ascii_lowercase();

    (profile_system.contains("combi") && scenario_system.contains("combi"))
        || (profile_system.contains("system") && scenario_system.contains("system"))
}
