//! End-to-end properties of the inspection notes parser.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use hivenote_core::inspection::rules::normalize_line;
use hivenote_core::{
    scan_outcome, Confidence, FieldId, FieldValue, InspectionParser, ParsedResult,
    RuleBasedParser,
};

fn parser() -> RuleBasedParser {
    RuleBasedParser::new().with_reference_year(2026)
}

fn parse(lines: &[&str]) -> ParsedResult {
    parser().parse(lines)
}

fn number(result: &ParsedResult, id: FieldId) -> Option<f64> {
    result.value(id).and_then(FieldValue::as_number)
}

#[test]
fn test_rating_clamped_to_bounds() {
    assert_eq!(number(&parse(&["Impression: 7"]), FieldId::Impression), Some(5.0));
    assert_eq!(number(&parse(&["Impression: 0"]), FieldId::Impression), Some(1.0));
}

#[test]
fn test_temperature_conversion() {
    assert_eq!(number(&parse(&["Temp: 72F"]), FieldId::TempC), Some(22.0));
    assert_eq!(number(&parse(&["Temperature: 22C"]), FieldId::TempC), Some(22.0));
    assert_eq!(number(&parse(&["Temp: 80"]), FieldId::TempC), Some(27.0));
    assert_eq!(number(&parse(&["Temp: 22"]), FieldId::TempC), Some(22.0));
}

#[test]
fn test_dates() {
    let expected = NaiveDate::from_ymd_opt(2026, 2, 15);

    let result = parse(&["Date: 2/15/2026"]);
    assert_eq!(result.value(FieldId::InspectedAt).and_then(FieldValue::as_date), expected);
    assert_eq!(result.get(FieldId::InspectedAt).unwrap().confidence, Confidence::High);

    let result = parse(&["Inspection Date: 02-15-2026"]);
    assert_eq!(result.value(FieldId::InspectedAt).and_then(FieldValue::as_date), expected);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["fields"]["inspected_at"]["value"], "2026-02-15");
}

#[test]
fn test_first_match_wins() {
    let result = parse(&["Queen Seen: Yes", "Queen: No"]);

    assert_eq!(result.value(FieldId::QueenSeen), Some(&FieldValue::Bool(true)));
    assert_eq!(result.get(FieldId::QueenSeen).unwrap().source, "Queen Seen: Yes");
}

#[test]
fn test_enum_synonym() {
    let result = parse(&["Honey: good"]);

    assert_eq!(
        result.value(FieldId::HoneyStores),
        Some(&FieldValue::Text("adequate".to_string()))
    );
}

#[test]
fn test_empty_input() {
    let lines: Vec<String> = Vec::new();
    let result = parser().parse(lines.as_slice());

    assert_eq!(result.extracted_count(), 0);
    assert_eq!(result.notes, None);
}

#[test]
fn test_garbage_input() {
    let result = parse(&["asdf jkl;", "xyzzy 123"]);

    assert_eq!(result.extracted_count(), 0);
    assert_eq!(result.notes.as_deref(), Some("asdf jkl;\nxyzzy 123"));
}

#[test]
fn test_pest_detection_dedupes() {
    let result = parse(&[
        "There was a wax moth in the box",
        "small hive beetle under the lid",
        "wax moth again on frame 3",
        "another small hive beetle",
    ]);

    assert_eq!(
        result.value(FieldId::PestSigns),
        Some(&FieldValue::List(vec!["wax_moth".to_string(), "hive_beetle".to_string()]))
    );
}

#[test]
fn test_numeric_round_trip() {
    for n in [1.0, 2.0, 3.0, 4.0, 5.0] {
        let line = format!("Brood pattern: {n}");
        assert_eq!(number(&parse(&[line.as_str()]), FieldId::BroodPatternScore), Some(n));
    }
    for n in [0.0, 6.0, 12.5, 40.0] {
        let line = format!("Frames of brood: {n}");
        assert_eq!(number(&parse(&[line.as_str()]), FieldId::FramesOfBrood), Some(n));
    }
}

#[test]
fn test_normalization_idempotent() {
    for line in ["  - Queen Seen : YES", "1) honey = Good", "#  weather -  rain", "x"] {
        let once = normalize_line(line);
        assert_eq!(normalize_line(&once), once);
    }
}

#[test]
fn test_every_line_accounted_for() {
    let lines = [
        "Inspection date: 3/2/2026",
        "- Queen seen: yes",
        "Queen: no",
        "Eggs present: yes",
        "Varroa count: 4",
        "lots of mites on drones",
        "Weather - overcast",
        "",
        "Pollen: ???",
        "Check again next week",
    ];

    let result = parse(&lines);
    let notes: Vec<&str> = result
        .notes
        .as_deref()
        .map(|n| n.lines().collect())
        .unwrap_or_default();

    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        let in_fields = result
            .fields
            .values()
            .any(|f| f.source.split("; ").any(|s| s == line));
        let in_notes = notes.contains(&line);
        assert!(in_fields || in_notes, "line lost: {line:?}");
    }

    assert_eq!(
        notes,
        vec!["Queen: no", "lots of mites on drones", "Pollen: ???", "Check again next week"]
    );
}

#[test]
fn test_scan_outcome_fields_found() {
    let outcome = scan_outcome(parse(&[
        "Queen seen: yes",
        "Frames of bees: 9",
        "Temperament: defensive",
        "bees seemed hungry",
    ]));

    assert_eq!(outcome.fields_found, 3);
    assert_eq!(outcome.prefill.observations.temperament.as_deref(), Some("aggressive"));
    assert_eq!(outcome.prefill.notes.as_deref(), Some("bees seemed hungry"));
}

#[test]
fn test_parse_is_deterministic() {
    let lines = ["Queen seen: yes", "Temp: 65", "wax moth", "misc"];
    assert_eq!(parse(&lines), parse(&lines));
}
