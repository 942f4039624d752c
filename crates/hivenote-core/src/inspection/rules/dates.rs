//! Date extraction for inspection notes.

use chrono::NaiveDate;

use super::catalog::DATE_KEYWORDS;
use super::patterns::{DATE_DAY_MONTH, DATE_ISO, DATE_MONTH_DAY, DATE_NUMERIC};
use super::FieldExtractor;

/// Date value extractor.
pub struct DateExtractor {
    /// Year used when a month-name date has none.
    reference_year: i32,
}

impl DateExtractor {
    pub fn new(reference_year: i32) -> Self {
        Self { reference_year }
    }
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDate;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let text = text.to_lowercase();

        parse_iso(&text)
            .or_else(|| parse_numeric(&text))
            .or_else(|| parse_month_name(&text, self.reference_year))
    }
}

/// Keyword in `key` that marks it as a date label, if any.
pub fn date_keyword(key: &str) -> Option<&'static str> {
    DATE_KEYWORDS.iter().copied().find(|kw| key.contains(kw))
}

fn parse_iso(text: &str) -> Option<NaiveDate> {
    let caps = DATE_ISO.captures(text)?;
    NaiveDate::from_ymd_opt(caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
}

fn parse_numeric(text: &str) -> Option<NaiveDate> {
    DATE_NUMERIC
        .captures_iter(text)
        .find_map(|caps| numeric_date(&caps[1], &caps[2], &caps[3]))
}

/// Month-first, falling back to day-first when the first part cannot be a month.
fn numeric_date(first: &str, second: &str, year: &str) -> Option<NaiveDate> {
    let first: u32 = first.parse().ok()?;
    let second: u32 = second.parse().ok()?;
    let year = parse_year(year)?;

    NaiveDate::from_ymd_opt(year, first, second)
        .or_else(|| NaiveDate::from_ymd_opt(year, second, first))
}

fn parse_month_name(text: &str, reference_year: i32) -> Option<NaiveDate> {
    if let Some(caps) = DATE_MONTH_DAY.captures(text) {
        let month = month_to_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let year = match caps.get(3) {
            Some(y) => y.as_str().parse().ok()?,
            None => reference_year,
        };
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    let caps = DATE_DAY_MONTH.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_to_number(&caps[2])?;
    let year = match caps.get(3) {
        Some(y) => y.as_str().parse().ok()?,
        None => reference_year,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Two-digit years are in the 2000s.
fn parse_year(s: &str) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    if s.len() <= 2 {
        Some(2000 + year)
    } else {
        Some(year)
    }
}

fn month_to_number(month: &str) -> Option<u32> {
    let prefix: String = month.chars().take(3).collect();
    let number = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(number)
}
