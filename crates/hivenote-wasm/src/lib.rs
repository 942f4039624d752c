//! WASM bindings for hive inspection note extraction.
//!
//! The host app runs on-device OCR, then hands the recognized lines to
//! these functions and receives the parsed result, the inspection form
//! pre-fill and the number of fields found in one object.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use hivenote_core::inspection::rules::{normalize_line, DateExtractor, FieldExtractor};
use hivenote_core::models::config::ParserConfig;
use hivenote_core::{scan_outcome, InspectionParser, RuleBasedParser, ScanOutcome};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Scan OCR lines (a JS array of strings) with default settings.
///
/// Returns `{ parsed, prefill, fields_found }`.
#[wasm_bindgen]
pub fn scan_inspection_lines(lines: Array) -> Result<JsValue, JsValue> {
    InspectionScanner::new().scan(lines)
}

/// Scan a block of OCR text, one line per newline, with default settings.
#[wasm_bindgen]
pub fn scan_inspection_text(text: &str) -> Result<JsValue, JsValue> {
    InspectionScanner::new().scan_text(text)
}

/// Number of fields the default parser finds in a block of OCR text.
#[wasm_bindgen]
pub fn count_fields(text: &str) -> usize {
    InspectionScanner::new().scan_outcome(text).fields_found
}

/// Inspection scanner class for browser use.
#[wasm_bindgen]
pub struct InspectionScanner {
    config: ParserConfig,
    parser: RuleBasedParser,
}

#[wasm_bindgen]
impl InspectionScanner {
    /// Create a scanner with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create a scanner from a JSON parser config, e.g. `{"reference_year": 2026}`.
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<InspectionScanner, JsValue> {
        let config: ParserConfig = serde_json::from_str(json).map_err(to_js_error)?;
        config.validate().map_err(to_js_error)?;
        Ok(Self::with_config(config))
    }

    /// Year assumed for dates written without one.
    #[wasm_bindgen]
    pub fn set_reference_year(&mut self, year: i32) {
        self.config.reference_year = Some(year);
        self.rebuild();
    }

    /// Magnitude above which unit-less temperatures are read as Fahrenheit.
    #[wasm_bindgen]
    pub fn set_fahrenheit_threshold(&mut self, threshold: f64) -> Result<(), JsValue> {
        let mut config = self.config.clone();
        config.fahrenheit_threshold = threshold;
        config.validate().map_err(to_js_error)?;
        self.config = config;
        self.rebuild();
        Ok(())
    }

    /// Toggle pest and disease detection in free prose.
    #[wasm_bindgen]
    pub fn set_scan_prose(&mut self, enabled: bool) {
        self.config.scan_prose = enabled;
        self.rebuild();
    }

    /// Scan a JS array of OCR lines.
    #[wasm_bindgen]
    pub fn scan(&self, lines: Array) -> Result<JsValue, JsValue> {
        let lines = lines_from_array(&lines)?;
        to_js(&scan_outcome(self.parser.parse(lines.as_slice())))
    }

    /// Scan a block of OCR text.
    #[wasm_bindgen]
    pub fn scan_text(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.scan_outcome(text))
    }

    /// Current parser settings as JSON.
    #[wasm_bindgen]
    pub fn config_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.config).map_err(to_js_error)
    }
}

impl InspectionScanner {
    fn with_config(config: ParserConfig) -> Self {
        let parser = RuleBasedParser::from_config(&config);
        Self { config, parser }
    }

    fn rebuild(&mut self) {
        self.parser = RuleBasedParser::from_config(&self.config);
    }

    fn scan_outcome(&self, text: &str) -> ScanOutcome {
        scan_outcome(self.parser.parse_text(text))
    }
}

impl Default for InspectionScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Small helpers the host uses when showing OCR lines to the user.
#[wasm_bindgen]
pub struct InspectionUtils;

#[wasm_bindgen]
impl InspectionUtils {
    /// Normalize an OCR line the way the parser sees it.
    #[wasm_bindgen]
    pub fn normalize(line: &str) -> String {
        normalize_line(line)
    }

    /// Parse a date value ("2/15/2026", "march 5") to `YYYY-MM-DD`.
    #[wasm_bindgen]
    pub fn parse_date(value: &str, reference_year: i32) -> Option<String> {
        DateExtractor::new(reference_year)
            .extract(value.trim())
            .map(|d| d.format("%Y-%m-%d").to_string())
    }
}

/// Collect a JS array of OCR lines, rejecting non-string entries.
fn lines_from_array(lines: &Array) -> Result<Vec<String>, JsValue> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            line.as_string()
                .ok_or_else(|| JsValue::from_str(&format!("Line {} is not a string", i)))
        })
        .collect()
}

fn to_js(outcome: &ScanOutcome) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    serde::Serialize::serialize(outcome, &serializer).map_err(to_js_error)
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
