//! Static catalog of recognized inspection fields.
//!
//! Pure data. Catalog order is matching order, and enumeration synonym
//! lists are checked in declaration order.

use crate::models::inspection::FieldId;

/// Canonical value followed by the synonyms that map to it.
pub type EnumSynonyms = &'static [(&'static str, &'static [&'static str])];

/// How a field's value text is coerced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Boolean,
    Enumeration(EnumSynonyms),
    Number,
    /// Number clamped to `[min, max]`.
    Rating { min: f64, max: f64 },
    /// Number converted to Celsius.
    Temperature,
}

/// A recognized field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDefinition {
    pub id: FieldId,
    pub kind: FieldKind,
    pub keywords: &'static [&'static str],
}

/// A pest or disease category detected in prose.
#[derive(Debug, Clone, Copy)]
pub struct SignCategory {
    pub id: &'static str,
    pub keywords: &'static [&'static str],
}

/// Keywords that route a line to the date detector.
pub const DATE_KEYWORDS: &[&str] = &["inspection date", "inspected", "date"];

pub const TRUE_TOKENS: &[&str] = &[
    "yes", "y", "true", "1", "seen", "present", "spotted", "confirmed", "positive", "checked",
    "x", "ok", "found",
];

pub const FALSE_TOKENS: &[&str] = &[
    "no", "n", "false", "0", "not seen", "absent", "none", "negative", "missing", "not found",
];

const STORES: EnumSynonyms = &[
    ("low", &["low", "light", "poor", "little", "none", "empty"]),
    ("adequate", &["adequate", "good", "ok", "okay", "medium", "moderate", "fair", "some"]),
    ("abundant", &["abundant", "plenty", "lots", "heavy", "full", "excellent", "high"]),
];

const POPULATION: EnumSynonyms = &[
    ("weak", &["weak", "small", "low", "light"]),
    ("moderate", &["moderate", "medium", "average", "ok", "okay", "fair"]),
    ("strong", &["strong", "large", "big", "heavy", "booming", "high"]),
];

const TEMPERAMENT: EnumSynonyms = &[
    ("calm", &["calm", "gentle", "docile", "quiet", "good"]),
    ("nervous", &["nervous", "runny", "flighty", "jumpy", "restless"]),
    ("aggressive", &["aggressive", "defensive", "hot", "angry", "mean", "stingy"]),
];

const CONDITIONS: EnumSynonyms = &[
    ("sunny", &["sunny", "sun", "clear"]),
    ("cloudy", &["partly cloudy", "cloudy", "clouds"]),
    ("overcast", &["overcast", "grey", "gray"]),
    ("rainy", &["rain", "drizzle", "showers", "wet"]),
];

const ONE_TO_FIVE: FieldKind = FieldKind::Rating { min: 1.0, max: 5.0 };

/// Field definitions in matching order.
pub static FIELD_CATALOG: &[FieldDefinition] = &[
    FieldDefinition {
        id: FieldId::QueenSeen,
        kind: FieldKind::Boolean,
        keywords: &["queen seen", "queen spotted", "saw queen", "seen queen", "queen"],
    },
    FieldDefinition {
        id: FieldId::EggsSeen,
        kind: FieldKind::Boolean,
        keywords: &["eggs seen", "eggs present", "saw eggs", "eggs"],
    },
    FieldDefinition {
        id: FieldId::LarvaeSeen,
        kind: FieldKind::Boolean,
        keywords: &["larvae seen", "larvae present", "open brood", "larvae", "larva"],
    },
    FieldDefinition {
        id: FieldId::CappedBrood,
        kind: FieldKind::Boolean,
        keywords: &["capped brood", "sealed brood", "capped"],
    },
    FieldDefinition {
        id: FieldId::BroodPatternScore,
        kind: ONE_TO_FIVE,
        keywords: &["brood pattern", "pattern score", "brood score", "pattern"],
    },
    FieldDefinition {
        id: FieldId::FramesOfBees,
        kind: FieldKind::Number,
        keywords: &["frames of bees", "bee frames", "frames bees", "fob"],
    },
    FieldDefinition {
        id: FieldId::FramesOfBrood,
        kind: FieldKind::Number,
        keywords: &["frames of brood", "brood frames", "frames brood"],
    },
    FieldDefinition {
        id: FieldId::NumSupers,
        kind: FieldKind::Number,
        keywords: &["number of supers", "num supers", "supers"],
    },
    FieldDefinition {
        id: FieldId::VarroaCount,
        kind: FieldKind::Number,
        keywords: &["varroa count", "mite count", "mite drop", "varroa"],
    },
    FieldDefinition {
        id: FieldId::PopulationEstimate,
        kind: FieldKind::Enumeration(POPULATION),
        keywords: &["population", "colony strength", "strength"],
    },
    FieldDefinition {
        id: FieldId::Temperament,
        kind: FieldKind::Enumeration(TEMPERAMENT),
        keywords: &["temperament", "behavior", "behaviour", "mood"],
    },
    FieldDefinition {
        id: FieldId::HoneyStores,
        kind: FieldKind::Enumeration(STORES),
        keywords: &["honey stores", "honey"],
    },
    FieldDefinition {
        id: FieldId::PollenStores,
        kind: FieldKind::Enumeration(STORES),
        keywords: &["pollen stores", "pollen"],
    },
    FieldDefinition {
        id: FieldId::Impression,
        kind: ONE_TO_FIVE,
        keywords: &["overall impression", "impression", "overall", "rating"],
    },
    FieldDefinition {
        id: FieldId::Attention,
        kind: FieldKind::Boolean,
        keywords: &["needs attention", "attention", "follow up"],
    },
    // After temperament: "temp" is a substring of it
    FieldDefinition {
        id: FieldId::TempC,
        kind: FieldKind::Temperature,
        keywords: &["temperature", "temp"],
    },
    FieldDefinition {
        id: FieldId::HumidityPercent,
        kind: FieldKind::Number,
        keywords: &["humidity"],
    },
    FieldDefinition {
        id: FieldId::WindSpeedKmh,
        kind: FieldKind::Number,
        keywords: &["wind speed", "wind"],
    },
    FieldDefinition {
        id: FieldId::Conditions,
        kind: FieldKind::Enumeration(CONDITIONS),
        keywords: &["weather", "conditions", "sky"],
    },
    FieldDefinition {
        id: FieldId::DurationMinutes,
        kind: FieldKind::Number,
        keywords: &["duration", "time spent", "minutes"],
    },
];

pub static PEST_CATEGORIES: &[SignCategory] = &[
    SignCategory {
        id: "varroa",
        keywords: &["varroa", "mites", "mite"],
    },
    SignCategory {
        id: "hive_beetle",
        keywords: &["small hive beetle", "hive beetle", "shb", "beetle"],
    },
    SignCategory {
        id: "wax_moth",
        keywords: &["wax moth", "wax worm", "moth"],
    },
    SignCategory {
        id: "ants",
        keywords: &["ants"],
    },
];

pub static DISEASE_CATEGORIES: &[SignCategory] = &[
    SignCategory {
        id: "afb",
        keywords: &["american foulbrood", "afb", "ropy"],
    },
    SignCategory {
        id: "efb",
        keywords: &["european foulbrood", "efb"],
    },
    SignCategory {
        id: "chalkbrood",
        keywords: &["chalkbrood", "chalk brood", "chalk"],
    },
    SignCategory {
        id: "nosema",
        keywords: &["nosema", "dysentery"],
    },
    SignCategory {
        id: "dwv",
        keywords: &["deformed wing", "dwv", "crumpled wing"],
    },
];

/// Keywords of a definition, longest first. Ties keep declaration order.
pub fn keywords_longest_first(keywords: &[&'static str]) -> Vec<&'static str> {
    let mut sorted = keywords.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));
    sorted
}
