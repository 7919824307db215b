//! Scenario catalogue: the static table of conversion scenarios plus the
//! load-time normalization that turns free-text survey fields into numbers
//! the scoring rules can compare directly.

mod importer;
pub(crate) mod parser;
mod seed;

pub use importer::{CatalogueImportError, CatalogueImporter};

use std::sync::{Arc, OnceLock};

use crate::quotes::domain::ConversionScenario;

/// Catalogue entry with its free-text fields pre-parsed for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedScenario {
    scenario: ConversionScenario,
    bedrooms: Option<u8>,
    bathrooms: Option<u8>,
    occupant_estimate: Option<f64>,
}

impl NormalizedScenario {
    fn from_scenario(scenario: ConversionScenario) -> Self {
        let bedrooms = parser::bedroom_count(&scenario.property_description);
        let bathrooms = parser::bathroom_count(&scenario.property_description);
        let occupant_estimate = parser::occupant_estimate(&scenario.occupants);

        Self {
            scenario,
            bedrooms,
            bathrooms,
            occupant_estimate,
        }
    }

    pub fn scenario(&self) -> &ConversionScenario {
        &self.scenario
    }

    pub fn bedrooms(&self) -> Option<u8> {
        self.bedrooms
    }

    pub fn bathrooms(&self) -> Option<u8> {
        self.bathrooms
    }

    pub fn occupant_estimate(&self) -> Option<f64> {
        self.occupant_estimate
    }
}

/// Ordered, immutable set of conversion scenarios.
///
/// Entry order matters: the matcher breaks score ties in favor of the
/// earlier entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScenarioCatalogue {
    entries: Vec<NormalizedScenario>,
}

impl ScenarioCatalogue {
    pub fn from_scenarios(scenarios: Vec<ConversionScenario>) -> Self {
        Self {
            entries: scenarios
                .into_iter()
                .map(NormalizedScenario::from_scenario)
                .collect(),
        }
    }

    /// The built-in scenario table, normalized once per process.
    pub fn standard() -> Arc<Self> {
        static STANDARD: OnceLock<Arc<ScenarioCatalogue>> = OnceLock::new();
        STANDARD
            .get_or_init(|| Arc::new(Self::from_scenarios(seed::standard_scenarios())))
            .clone()
    }

    pub fn entries(&self) -> &[NormalizedScenario] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
