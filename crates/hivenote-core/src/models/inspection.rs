//! Parsed inspection data models.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of an extractable inspection observation.
///
/// Names match the host's inspection record so values can be copied
/// into the form without a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    InspectedAt,
    QueenSeen,
    EggsSeen,
    LarvaeSeen,
    CappedBrood,
    BroodPatternScore,
    FramesOfBees,
    FramesOfBrood,
    NumSupers,
    VarroaCount,
    PopulationEstimate,
    Temperament,
    HoneyStores,
    PollenStores,
    PestSigns,
    DiseaseSigns,
    Impression,
    Attention,
    TempC,
    HumidityPercent,
    WindSpeedKmh,
    Conditions,
    DurationMinutes,
}

impl FieldId {
    /// The snake_case name used on the wire and in the host form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InspectedAt => "inspected_at",
            Self::QueenSeen => "queen_seen",
            Self::EggsSeen => "eggs_seen",
            Self::LarvaeSeen => "larvae_seen",
            Self::CappedBrood => "capped_brood",
            Self::BroodPatternScore => "brood_pattern_score",
            Self::FramesOfBees => "frames_of_bees",
            Self::FramesOfBrood => "frames_of_brood",
            Self::NumSupers => "num_supers",
            Self::VarroaCount => "varroa_count",
            Self::PopulationEstimate => "population_estimate",
            Self::Temperament => "temperament",
            Self::HoneyStores => "honey_stores",
            Self::PollenStores => "pollen_stores",
            Self::PestSigns => "pest_signs",
            Self::DiseaseSigns => "disease_signs",
            Self::Impression => "impression",
            Self::Attention => "attention",
            Self::TempC => "temp_c",
            Self::HumidityPercent => "humidity_percent",
            Self::WindSpeedKmh => "wind_speed_kmh",
            Self::Conditions => "conditions",
            Self::DurationMinutes => "duration_minutes",
        }
    }

    /// Least experienced inspection template that shows this field.
    pub fn tier(&self) -> ExperienceLevel {
        match self {
            Self::LarvaeSeen
            | Self::CappedBrood
            | Self::BroodPatternScore
            | Self::FramesOfBees
            | Self::FramesOfBrood
            | Self::PollenStores
            | Self::PestSigns => ExperienceLevel::Intermediate,
            Self::NumSupers | Self::VarroaCount | Self::DiseaseSigns => ExperienceLevel::Advanced,
            _ => ExperienceLevel::Beginner,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inspection template experience levels, ordered from simplest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// How literally the matched keyword matched the input key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// The keyword is the whole key.
    High,
    /// The keyword was found inside a longer key, or in free prose.
    Medium,
    Low,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        })
    }
}

/// A typed observation value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    /// Canonical enumeration value, e.g. `adequate`.
    Text(String),
    /// Serialized as `YYYY-MM-DD`.
    Date(NaiveDate),
    List(Vec<String>),
}

impl FieldValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

/// One successfully matched field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedField<T> {
    /// Extracted value.
    pub value: T,
    /// Match confidence.
    pub confidence: Confidence,
    /// Source line(s) the value came from.
    pub source: String,
}

impl<T> ExtractedField<T> {
    pub fn new(value: T, confidence: Confidence, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            source: source.into(),
        }
    }
}

/// Structured result of parsing one set of OCR lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedResult {
    /// Extracted fields, at most one per identifier.
    pub fields: BTreeMap<FieldId, ExtractedField<FieldValue>>,

    /// Every line no field consumed, trimmed and newline-joined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ParsedResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: FieldId) -> Option<&ExtractedField<FieldValue>> {
        self.fields.get(&id)
    }

    pub fn value(&self, id: FieldId) -> Option<&FieldValue> {
        self.fields.get(&id).map(|f| &f.value)
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// Record a field unless it is already set. Returns whether it was inserted.
    pub fn insert_first(&mut self, id: FieldId, field: ExtractedField<FieldValue>) -> bool {
        if self.fields.contains_key(&id) {
            return false;
        }
        self.fields.insert(id, field);
        true
    }

    /// Number of extracted fields, not counting notes.
    pub fn extracted_count(&self) -> usize {
        self.fields.len()
    }

    /// True when nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_first_keeps_earliest() {
        let mut result = ParsedResult::new();
        assert!(result.insert_first(
            FieldId::QueenSeen,
            ExtractedField::new(FieldValue::Bool(true), Confidence::High, "Queen seen: yes"),
        ));
        assert!(!result.insert_first(
            FieldId::QueenSeen,
            ExtractedField::new(FieldValue::Bool(false), Confidence::Medium, "Queen: no"),
        ));

        assert_eq!(result.extracted_count(), 1);
        assert_eq!(result.value(FieldId::QueenSeen), Some(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_tiers() {
        assert_eq!(FieldId::QueenSeen.tier(), ExperienceLevel::Beginner);
        assert_eq!(FieldId::PestSigns.tier(), ExperienceLevel::Intermediate);
        assert_eq!(FieldId::DiseaseSigns.tier(), ExperienceLevel::Advanced);
        assert!(ExperienceLevel::Advanced > ExperienceLevel::Intermediate);
    }

    #[test]
    fn test_serialization() {
        let mut result = ParsedResult::new();
        result.insert_first(
            FieldId::InspectedAt,
            ExtractedField::new(
                FieldValue::Date(NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()),
                Confidence::High,
                "Date: 2/15/2026",
            ),
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["fields"]["inspected_at"]["value"], "2026-02-15");
        assert_eq!(json["fields"]["inspected_at"]["confidence"], "high");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_field_id_names_match_serde() {
        for id in [FieldId::TempC, FieldId::WindSpeedKmh, FieldId::BroodPatternScore] {
            let json = serde_json::to_value(id).unwrap();
            assert_eq!(json, id.as_str());
        }
    }
}
