use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::ScenarioCatalogue;
use crate::quotes::domain::ConversionScenario;

/// Builds a scenario catalogue from the CSV export the operations team
/// maintains alongside the pricing sheets.
pub struct CatalogueImporter;

#[derive(Debug)]
pub enum CatalogueImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for CatalogueImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogueImportError::Io(err) => {
                write!(f, "failed to read scenario export: {}", err)
            }
            CatalogueImportError::Csv(err) => write!(f, "invalid scenario CSV data: {}", err),
        }
    }
}

impl std::error::Error for CatalogueImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogueImportError::Io(err) => Some(err),
            CatalogueImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogueImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogueImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl CatalogueImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<ScenarioCatalogue, CatalogueImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ScenarioCatalogue, CatalogueImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut scenarios = Vec::new();
        for row in csv_reader.deserialize::<ScenarioRow>() {
            scenarios.push(row?.into_scenario());
        }

        Ok(ScenarioCatalogue::from_scenarios(scenarios))
    }
}

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Property")]
    property: String,
    #[serde(rename = "Occupants")]
    occupants: String,
    #[serde(rename = "Current System")]
    current_system: String,
    #[serde(rename = "Recommendation")]
    recommendation: String,
    #[serde(rename = "Specification", default)]
    specification: String,
    #[serde(rename = "Flow Rate (LPM)", default)]
    flow_rate_lpm: Option<f64>,
    #[serde(rename = "Output (kW)", default)]
    kw_output: Option<u32>,
    #[serde(rename = "Cylinder (L)", default)]
    cylinder_size: Option<u32>,
    #[serde(rename = "Reasoning", default)]
    reasoning: String,
}

impl ScenarioRow {
    fn into_scenario(self) -> ConversionScenario {
        ConversionScenario {
            id: self.id,
            property_description: self.property,
            occupants: self.occupants,
            current_system: self.current_system,
            recommendation: self.recommendation,
            recommended_specification: self.specification,
            flow_rate_lpm: self.flow_rate_lpm,
            kw_output: self.kw_output,
            cylinder_size: self.cylinder_size,
            reasoning: self.reasoning,
        }
    }
}
