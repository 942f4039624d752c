//! Core library for hive inspection note extraction.
//!
//! This crate provides:
//! - Line normalization and key/value splitting for OCR text lines
//! - A static catalog of inspection fields with typed value coercion
//!   (booleans, enumerations, numbers, bounded ratings, temperatures, dates)
//! - Pest and disease detection in free prose
//! - Lossless capture of unmatched lines as notes
//! - Mapping onto the host application's inspection form
//!
//! Parsing is pure and deterministic: the same lines always give the same result.

pub mod error;
pub mod inspection;
pub mod models;

pub use error::{HivenoteError, Result};
pub use inspection::{
    count_extracted_fields, parse_inspection_lines, scan_outcome, to_prefill, InspectionParser,
    RuleBasedParser,
};
pub use models::config::{HivenoteConfig, OutputConfig, OutputFormat, ParserConfig};
pub use models::inspection::{
    Confidence, ExperienceLevel, ExtractedField, FieldId, FieldValue, ParsedResult,
};
pub use models::prefill::{InspectionPrefill, ObservationsPrefill, ScanOutcome, WeatherPrefill};
