//! Value coercion, one function per field kind.
//!
//! Every coercer returns `None` for "no match"; none of them fail.

use super::catalog::{EnumSynonyms, FieldKind, FALSE_TOKENS, TRUE_TOKENS};
use super::patterns::{CELSIUS_MARK, DECIMAL_NUMBER, FAHRENHEIT_MARK, SLASH_RATIO, UNIT_SUFFIX};
use crate::models::inspection::FieldValue;

/// Default magnitude above which a unit-less temperature is Fahrenheit.
pub const FAHRENHEIT_THRESHOLD: f64 = 50.0;

/// Coerce `value` according to `kind`.
pub fn coerce_value(kind: &FieldKind, value: &str, fahrenheit_threshold: f64) -> Option<FieldValue> {
    match kind {
        FieldKind::Boolean => coerce_boolean(value).map(FieldValue::Bool),
        FieldKind::Enumeration(synonyms) => {
            coerce_enumeration(value, synonyms).map(|v| FieldValue::Text(v.to_string()))
        }
        FieldKind::Number => coerce_number(value).map(FieldValue::Number),
        FieldKind::Rating { min, max } => coerce_rating(value, *min, *max).map(FieldValue::Number),
        FieldKind::Temperature => {
            coerce_temperature(value, fahrenheit_threshold).map(FieldValue::Number)
        }
    }
}

fn matches_token(value: &str, token: &str) -> bool {
    value == token || value.starts_with(token)
}

/// Yes/no style values. True tokens are checked before false tokens.
pub fn coerce_boolean(value: &str) -> Option<bool> {
    let value = value.trim().to_lowercase();

    if TRUE_TOKENS.iter().any(|t| matches_token(&value, t)) {
        return Some(true);
    }
    if FALSE_TOKENS.iter().any(|t| matches_token(&value, t)) {
        return Some(false);
    }

    None
}

/// First canonical value whose synonyms equal or occur in `value`.
pub fn coerce_enumeration(value: &str, synonyms: EnumSynonyms) -> Option<&'static str> {
    let value = value.trim().to_lowercase();
    if value.is_empty() {
        return None;
    }

    synonyms
        .iter()
        .find(|(_, words)| words.iter().any(|w| value == *w || value.contains(w)))
        .map(|(canonical, _)| *canonical)
}

/// Plain number. "N/M" yields N; unit suffixes are ignored.
pub fn coerce_number(value: &str) -> Option<f64> {
    let value = value.trim().to_lowercase();

    if let Some(caps) = SLASH_RATIO.captures(&value) {
        return caps[1].parse().ok().filter(|n: &f64| n.is_finite());
    }

    let cleaned = value.replace(['%', '°'], "");
    let cleaned = UNIT_SUFFIX.replace(&cleaned, "");

    DECIMAL_NUMBER
        .find(&cleaned)
        .and_then(|m| m.as_str().parse().ok())
        .filter(|n: &f64| n.is_finite())
}

/// Number clamped to `[min, max]`.
pub fn coerce_rating(value: &str, min: f64, max: f64) -> Option<f64> {
    coerce_number(value).map(|n| n.clamp(min, max))
}

/// Temperature in Celsius.
///
/// An explicit `f` or `c` marker decides the unit; otherwise magnitudes
/// above `fahrenheit_threshold` are taken as Fahrenheit. Converted values
/// are rounded to the nearest whole degree.
pub fn coerce_temperature(value: &str, fahrenheit_threshold: f64) -> Option<f64> {
    let raw = value.trim().to_lowercase();
    let number = coerce_number(&raw)?;

    let fahrenheit = if FAHRENHEIT_MARK.is_match(&raw) {
        true
    } else if CELSIUS_MARK.is_match(&raw) {
        false
    } else {
        number.abs() > fahrenheit_threshold
    };

    if fahrenheit {
        Some(fahrenheit_to_celsius(number))
    } else {
        Some(number)
    }
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    ((f - 32.0) * 5.0 / 9.0).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_tokens() {
        assert_eq!(coerce_boolean("yes"), Some(true));
        assert_eq!(coerce_boolean("Y"), Some(true));
        assert_eq!(coerce_boolean("seen on frame 4"), Some(true));
        assert_eq!(coerce_boolean("x"), Some(true));
        assert_eq!(coerce_boolean("no"), Some(false));
        assert_eq!(coerce_boolean("not seen"), Some(false));
        assert_eq!(coerce_boolean("absent"), Some(false));
        assert_eq!(coerce_boolean("0"), Some(false));
    }

    #[test]
    fn test_boolean_no_match() {
        assert_eq!(coerce_boolean(""), None);
        assert_eq!(coerce_boolean("maybe"), None);
        assert_eq!(coerce_boolean("queen cells"), None);
    }

    #[test]
    fn test_boolean_true_checked_first() {
        // "1" is a true token and "10" starts with it, even though "0" is false.
        assert_eq!(coerce_boolean("10"), Some(true));
        // "none" matches no true token, then "no" as a false token.
        assert_eq!(coerce_boolean("none"), Some(false));
    }

    #[test]
    fn test_enumeration() {
        let stores: EnumSynonyms = &[
            ("low", &["low", "light"]),
            ("adequate", &["adequate", "good"]),
            ("abundant", &["abundant", "plenty"]),
        ];
        assert_eq!(coerce_enumeration("good", stores), Some("adequate"));
        assert_eq!(coerce_enumeration("Plenty of honey", stores), Some("abundant"));
        assert_eq!(coerce_enumeration("light but good", stores), Some("low"));
        assert_eq!(coerce_enumeration("unknown", stores), None);
        assert_eq!(coerce_enumeration("", stores), None);
    }

    #[test]
    fn test_number() {
        assert_eq!(coerce_number("8"), Some(8.0));
        assert_eq!(coerce_number("4/5"), Some(4.0));
        assert_eq!(coerce_number("65%"), Some(65.0));
        assert_eq!(coerce_number("about 6.5 frames"), Some(6.5));
        assert_eq!(coerce_number("25 mins"), Some(25.0));
        assert_eq!(coerce_number("lots"), None);
        assert_eq!(coerce_number(""), None);
    }

    #[test]
    fn test_number_overflow_is_no_match() {
        let digits = "9".repeat(400);

        assert_eq!(coerce_number(&digits), None);
        assert_eq!(coerce_number(&format!("{digits}/5")), None);
        assert_eq!(coerce_rating(&digits, 1.0, 5.0), None);
        assert_eq!(coerce_temperature(&digits, FAHRENHEIT_THRESHOLD), None);
    }

    #[test]
    fn test_number_round_trip() {
        for n in [0.0, 1.0, 3.5, 12.0, 250.0] {
            assert_eq!(coerce_number(&format!("{n}")), Some(n));
        }
    }

    #[test]
    fn test_rating_clamps() {
        assert_eq!(coerce_rating("7", 1.0, 5.0), Some(5.0));
        assert_eq!(coerce_rating("0", 1.0, 5.0), Some(1.0));
        assert_eq!(coerce_rating("3", 1.0, 5.0), Some(3.0));
        assert_eq!(coerce_rating("4/5", 1.0, 5.0), Some(4.0));
    }

    #[test]
    fn test_temperature_units() {
        assert_eq!(coerce_temperature("72f", FAHRENHEIT_THRESHOLD), Some(22.0));
        assert_eq!(coerce_temperature("22c", FAHRENHEIT_THRESHOLD), Some(22.0));
        assert_eq!(coerce_temperature("80", FAHRENHEIT_THRESHOLD), Some(27.0));
        assert_eq!(coerce_temperature("22", FAHRENHEIT_THRESHOLD), Some(22.0));
        assert_eq!(coerce_temperature("68 °F", FAHRENHEIT_THRESHOLD), Some(20.0));
        assert_eq!(coerce_temperature("-5c", FAHRENHEIT_THRESHOLD), Some(-5.0));
        assert_eq!(coerce_temperature("warm", FAHRENHEIT_THRESHOLD), None);
    }

    #[test]
    fn test_temperature_explicit_celsius_above_threshold() {
        assert_eq!(coerce_temperature("55c", FAHRENHEIT_THRESHOLD), Some(55.0));
    }

    #[test]
    fn test_coerce_value_dispatch() {
        assert_eq!(
            coerce_value(&FieldKind::Boolean, "yes", FAHRENHEIT_THRESHOLD),
            Some(FieldValue::Bool(true))
        );
        assert_eq!(
            coerce_value(&FieldKind::Rating { min: 1.0, max: 5.0 }, "9", FAHRENHEIT_THRESHOLD),
            Some(FieldValue::Number(5.0))
        );
        assert_eq!(
            coerce_value(&FieldKind::Temperature, "72f", FAHRENHEIT_THRESHOLD),
            Some(FieldValue::Number(22.0))
        );
        assert_eq!(coerce_value(&FieldKind::Number, "n/a", FAHRENHEIT_THRESHOLD), None);
    }
}
