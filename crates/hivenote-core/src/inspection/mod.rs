//! Inspection note field extraction module.

mod parser;
mod prefill;
pub mod rules;

pub use parser::{parse_inspection_lines, InspectionParser, RuleBasedParser};
pub use prefill::{count_extracted_fields, infer_experience_level, scan_outcome, to_prefill};
