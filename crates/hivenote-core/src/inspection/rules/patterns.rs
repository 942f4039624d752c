//! Common regex patterns for inspection note extraction.
//!
//! All patterns run against normalized (lower-cased) text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Leading bullets and numbering: "- ", "1. ", "* ", "# ", "2) "
    pub static ref BULLET_PREFIX: Regex = Regex::new(
        r"^[\s\-•*#0-9.)]+"
    ).unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).unwrap();

    // Numbers
    pub static ref SLASH_RATIO: Regex = Regex::new(
        r"^\s*(-?\d+(?:\.\d+)?)\s*/\s*\d+(?:\.\d+)?"
    ).unwrap();

    pub static ref DECIMAL_NUMBER: Regex = Regex::new(
        r"-?\d+(?:\.\d+)?"
    ).unwrap();

    pub static ref UNIT_SUFFIX: Regex = Regex::new(
        r"(?:\s*(?:mins?|f|c))+\s*$"
    ).unwrap();

    // Temperature unit markers
    pub static ref FAHRENHEIT_MARK: Regex = Regex::new(
        r"\d\s*°?\s*(?:degrees?\s*)?f(?:ahrenheit)?\b"
    ).unwrap();

    pub static ref CELSIUS_MARK: Regex = Regex::new(
        r"\d\s*°?\s*(?:degrees?\s*)?c(?:elsius)?\b"
    ).unwrap();

    // Dates
    pub static ref DATE_ISO: Regex = Regex::new(
        r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"\b(\d{1,2})[/\-](\d{1,2})[/\-](\d{4}|\d{2})\b"
    ).unwrap();

    pub static ref DATE_MONTH_DAY: Regex = Regex::new(
        r"\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+(\d{1,2})(?:st|nd|rd|th)?\b(?:,?\s+(\d{4})\b)?"
    ).unwrap();

    pub static ref DATE_DAY_MONTH: Regex = Regex::new(
        r"\b(\d{1,2})(?:st|nd|rd|th)?\s+(?:of\s+)?(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b\.?(?:,?\s+(\d{4})\b)?"
    ).unwrap();
}
