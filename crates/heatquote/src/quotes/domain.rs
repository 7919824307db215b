use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteId(pub String);

/// Property attributes collected by the quote wizard for one request.
///
/// Counts are whole numbers; `current_system` is whatever the customer typed
/// or picked, defaulting to "existing" when the wizard leaves it blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyProfile {
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub occupants: u8,
    #[serde(default = "default_current_system")]
    pub current_system: String,
}

fn default_current_system() -> String {
    "existing".to_string()
}

/// Wire payload for submitting a quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSubmission {
    pub property: PropertyProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_on: Option<NaiveDate>,
}

/// Boiler system families a recommendation can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemType {
    Combi,
    System,
    Regular,
}

impl SystemType {
    pub const fn label(self) -> &'static str {
        match self {
            SystemType::Combi => "combi",
            SystemType::System => "system",
            SystemType::Regular => "regular",
        }
    }
}

/// Catalogue entry describing one pre-built conversion scenario.
///
/// The property and occupant fields are free text as captured by surveyors;
/// the catalogue normalizes them into numeric form at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionScenario {
    pub id: String,
    pub property_description: String,
    pub occupants: String,
    pub current_system: String,
    pub recommendation: String,
    pub recommended_specification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_rate_lpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kw_output: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cylinder_size: Option<u32>,
    pub reasoning: String,
}
