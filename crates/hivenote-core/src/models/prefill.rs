//! Inspection form pre-fill shape handed to the host application.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::inspection::{ExperienceLevel, ParsedResult};

/// Observation values of the inspection form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationsPrefill {
    // Population
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population_estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames_of_bees: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperament: Option<String>,

    // Queen status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queen_seen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eggs_seen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub larvae_seen: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capped_brood: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brood_pattern_score: Option<f64>,

    // Stores
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honey_stores: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pollen_stores: Option<String>,

    // Health
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_signs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pest_signs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub varroa_count: Option<f64>,

    // Equipment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_supers: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames_of_brood: Option<f64>,
}

/// Weather conditions during the inspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherPrefill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed_kmh: Option<f64>,
    /// sunny/cloudy/overcast/rainy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}

impl WeatherPrefill {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Pre-filled inspection form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InspectionPrefill {
    /// Simplest template that shows every detected field.
    pub experience_template: ExperienceLevel,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspected_at: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,

    pub observations: ObservationsPrefill,

    #[serde(skip_serializing_if = "WeatherPrefill::is_empty")]
    pub weather: WeatherPrefill,

    /// Overall impression, 1-5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impression: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attention: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Everything the host needs after a scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    /// Raw extraction with confidence and sources.
    pub parsed: ParsedResult,
    /// Form values.
    pub prefill: InspectionPrefill,
    /// Extracted field count, excluding notes.
    pub fields_found: usize,
}
