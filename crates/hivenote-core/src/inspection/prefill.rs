//! Mapping parsed results onto the host's inspection form.

use tracing::debug;

use crate::models::inspection::{ExperienceLevel, FieldId, FieldValue, ParsedResult};
use crate::models::prefill::{InspectionPrefill, ScanOutcome};

/// Minimum experience template able to show every extracted field.
pub fn infer_experience_level(result: &ParsedResult) -> ExperienceLevel {
    result
        .fields
        .keys()
        .map(FieldId::tier)
        .max()
        .unwrap_or_default()
}

/// Number of extracted fields, for "N fields found" feedback.
pub fn count_extracted_fields(result: &ParsedResult) -> usize {
    result.extracted_count()
}

/// Copy each extracted value into the matching form property.
pub fn to_prefill(result: &ParsedResult) -> InspectionPrefill {
    let mut form = InspectionPrefill {
        experience_template: infer_experience_level(result),
        notes: result.notes.clone(),
        ..Default::default()
    };

    for (id, field) in &result.fields {
        let value = &field.value;
        let obs = &mut form.observations;
        let weather = &mut form.weather;

        match id {
            FieldId::InspectedAt => form.inspected_at = value.as_date(),
            FieldId::DurationMinutes => form.duration_minutes = value.as_number(),
            FieldId::Impression => form.impression = value.as_number(),
            FieldId::Attention => form.attention = value.as_bool(),

            FieldId::PopulationEstimate => obs.population_estimate = text(value),
            FieldId::FramesOfBees => obs.frames_of_bees = value.as_number(),
            FieldId::Temperament => obs.temperament = text(value),
            FieldId::QueenSeen => obs.queen_seen = value.as_bool(),
            FieldId::EggsSeen => obs.eggs_seen = value.as_bool(),
            FieldId::LarvaeSeen => obs.larvae_seen = value.as_bool(),
            FieldId::CappedBrood => obs.capped_brood = value.as_bool(),
            FieldId::BroodPatternScore => obs.brood_pattern_score = value.as_number(),
            FieldId::HoneyStores => obs.honey_stores = text(value),
            FieldId::PollenStores => obs.pollen_stores = text(value),
            FieldId::DiseaseSigns => obs.disease_signs = list(value),
            FieldId::PestSigns => obs.pest_signs = list(value),
            FieldId::VarroaCount => obs.varroa_count = value.as_number(),
            FieldId::NumSupers => obs.num_supers = value.as_number(),
            FieldId::FramesOfBrood => obs.frames_of_brood = value.as_number(),

            FieldId::TempC => weather.temp_c = value.as_number(),
            FieldId::HumidityPercent => weather.humidity_percent = value.as_number(),
            FieldId::WindSpeedKmh => weather.wind_speed_kmh = value.as_number(),
            FieldId::Conditions => weather.conditions = text(value),
        }
    }

    debug!(
        "Pre-filled {} fields, template {:?}",
        result.extracted_count(),
        form.experience_template
    );

    form
}

/// Bundle a result with its form mapping and field count.
pub fn scan_outcome(parsed: ParsedResult) -> ScanOutcome {
    let prefill = to_prefill(&parsed);
    let fields_found = count_extracted_fields(&parsed);
    ScanOutcome {
        parsed,
        prefill,
        fields_found,
    }
}

fn text(value: &FieldValue) -> Option<String> {
    value.as_text().map(str::to_string)
}

fn list(value: &FieldValue) -> Option<Vec<String>> {
    value.as_list().map(<[String]>::to_vec)
}
