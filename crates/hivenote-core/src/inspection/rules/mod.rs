//! Rule-based field extractors for inspection notes.

pub mod catalog;
pub mod coerce;
pub mod dates;
pub mod normalize;
pub mod patterns;
pub mod prose;

pub use catalog::{FieldDefinition, FieldKind, SignCategory, FIELD_CATALOG};
pub use coerce::{
    coerce_boolean, coerce_enumeration, coerce_number, coerce_rating, coerce_temperature,
    coerce_value,
};
pub use dates::{date_keyword, DateExtractor};
pub use normalize::{normalize_line, split_key_value};
pub use prose::{SignAccumulator, SignScanner};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.extract(text).into_iter().collect()
    }
}
