//! Rule-based parser turning OCR lines into inspection fields.

use lazy_static::lazy_static;
use tracing::{debug, trace};

use crate::models::config::ParserConfig;
use crate::models::inspection::{Confidence, ExtractedField, FieldId, FieldValue, ParsedResult};

use super::rules::{
    catalog::keywords_longest_first, coerce_value, date_keyword, normalize_line, split_key_value,
    DateExtractor, FieldExtractor, SignAccumulator, SignScanner, FIELD_CATALOG,
};

lazy_static! {
    /// Catalog keywords, longest first, aligned with `FIELD_CATALOG`.
    static ref KEYWORDS_BY_LENGTH: Vec<Vec<&'static str>> = FIELD_CATALOG
        .iter()
        .map(|def| keywords_longest_first(def.keywords))
        .collect();
}

/// Trait for inspection note parsing.
pub trait InspectionParser {
    /// Parse an ordered list of OCR lines.
    fn parse<S: AsRef<str>>(&self, lines: &[S]) -> ParsedResult;

    /// Parse a block of text, one observation per line.
    fn parse_text(&self, text: &str) -> ParsedResult {
        let lines: Vec<&str> = text.lines().collect();
        self.parse(lines.as_slice())
    }
}

/// Deterministic keyword/value parser backed by the static field catalog.
#[derive(Debug, Clone)]
pub struct RuleBasedParser {
    /// Unit-less temperatures above this are Fahrenheit.
    fahrenheit_threshold: f64,
    /// Year for month-name dates without one.
    reference_year: i32,
    /// Whether to scan prose for pests and diseases.
    scan_prose: bool,
}

impl RuleBasedParser {
    /// Create a parser with default settings and the current year.
    pub fn new() -> Self {
        Self::from_config(&ParserConfig::default())
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self {
            fahrenheit_threshold: config.fahrenheit_threshold,
            reference_year: config.effective_year(),
            scan_prose: config.scan_prose,
        }
    }

    /// Set the year used for dates written without one.
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    /// Set the Fahrenheit magnitude threshold.
    pub fn with_fahrenheit_threshold(mut self, threshold: f64) -> Self {
        self.fahrenheit_threshold = threshold;
        self
    }

    /// Enable or disable pest/disease prose scanning.
    pub fn with_prose_scanning(mut self, enabled: bool) -> Self {
        self.scan_prose = enabled;
        self
    }

    /// Try the date detector, then the catalog, against one normalized line.
    /// Returns true when a field was recorded from it.
    fn match_line(
        &self,
        normalized: &str,
        source: &str,
        dates: &DateExtractor,
        result: &mut ParsedResult,
    ) -> bool {
        let (key, value) = split_key_value(normalized);

        if !result.contains(FieldId::InspectedAt) {
            if let Some(keyword) = date_keyword(key) {
                if let Some(date) = dates.extract(value) {
                    trace!("date {} from {:?}", date, source);
                    result.insert_first(
                        FieldId::InspectedAt,
                        ExtractedField::new(FieldValue::Date(date), confidence(key, keyword), source),
                    );
                    return true;
                }
            }
        }

        for (def, keywords) in FIELD_CATALOG.iter().zip(KEYWORDS_BY_LENGTH.iter()) {
            if result.contains(def.id) {
                continue;
            }

            let Some(keyword) = keywords.iter().copied().find(|kw| key.contains(kw)) else {
                continue;
            };

            if let Some(coerced) = coerce_value(&def.kind, value, self.fahrenheit_threshold) {
                trace!("{} = {} via {:?}", def.id, coerced, keyword);
                result.insert_first(
                    def.id,
                    ExtractedField::new(coerced, confidence(key, keyword), source),
                );
                return true;
            }
        }

        false
    }
}

fn confidence(key: &str, keyword: &str) -> Confidence {
    if key == keyword {
        Confidence::High
    } else {
        Confidence::Medium
    }
}

impl Default for RuleBasedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InspectionParser for RuleBasedParser {
    fn parse<S: AsRef<str>>(&self, lines: &[S]) -> ParsedResult {
        let mut result = ParsedResult::new();
        let mut consumed = vec![false; lines.len()];

        let dates = DateExtractor::new(self.reference_year);
        let pest_scanner = SignScanner::pests();
        let disease_scanner = SignScanner::diseases();
        let mut pests = SignAccumulator::default();
        let mut diseases = SignAccumulator::default();

        for (idx, raw) in lines.iter().enumerate() {
            let raw = raw.as_ref();
            let normalized = normalize_line(raw);
            if normalized.is_empty() {
                continue;
            }

            let source = raw.trim();
            consumed[idx] = self.match_line(&normalized, source, &dates, &mut result);

            // Side pass: detection does not consume the line
            if self.scan_prose {
                pests.observe(&pest_scanner.extract_all(&normalized), source);
                diseases.observe(&disease_scanner.extract_all(&normalized), source);
            }
        }

        for (id, signs) in [(FieldId::PestSigns, pests), (FieldId::DiseaseSigns, diseases)] {
            if signs.is_empty() {
                continue;
            }
            let values = signs.categories.iter().map(|c| c.to_string()).collect();
            result.insert_first(
                id,
                ExtractedField::new(FieldValue::List(values), Confidence::Medium, signs.source_text()),
            );
        }

        let leftover: Vec<&str> = lines
            .iter()
            .zip(&consumed)
            .filter(|(_, used)| !**used)
            .map(|(line, _)| line.as_ref().trim())
            .filter(|line| !line.is_empty())
            .collect();

        if !leftover.is_empty() {
            result.notes = Some(leftover.join("\n"));
        }

        debug!(
            "Parsed {} lines: {} fields, {} lines to notes",
            lines.len(),
            result.extracted_count(),
            leftover.len()
        );

        result
    }
}

/// Parse OCR lines with a default parser.
pub fn parse_inspection_lines<S: AsRef<str>>(lines: &[S]) -> ParsedResult {
    RuleBasedParser::new().parse(lines)
}
