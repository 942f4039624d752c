//! Pest and disease detection in free prose.
//!
//! Runs on every normalized line regardless of key/value structure and
//! never consumes a line. Keywords match whole words only, with an optional
//! plural `s`, so "mother" is not a moth and "plants" holds no ants.

use super::catalog::{SignCategory, DISEASE_CATEGORIES, PEST_CATEGORIES};
use super::FieldExtractor;

/// Substring scanner over a fixed set of sign categories.
pub struct SignScanner {
    categories: &'static [SignCategory],
}

impl SignScanner {
    pub fn new(categories: &'static [SignCategory]) -> Self {
        Self { categories }
    }

    pub fn pests() -> Self {
        Self::new(PEST_CATEGORIES)
    }

    pub fn diseases() -> Self {
        Self::new(DISEASE_CATEGORIES)
    }
}

impl FieldExtractor for SignScanner {
    type Output = &'static str;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.categories
            .iter()
            .filter(|c| c.keywords.iter().any(|kw| contains_word(text, kw)))
            .map(|c| c.id)
            .collect()
    }
}

/// `keyword` occurs in `text` as a whole word, optionally followed by a plural `s`.
fn contains_word(text: &str, keyword: &str) -> bool {
    text.match_indices(keyword).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let mut rest = text[start + keyword.len()..].chars();
        let after = match rest.next() {
            Some('s') => rest.next(),
            other => other,
        };
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Categories detected across many lines, each recorded once.
#[derive(Debug, Clone, Default)]
pub struct SignAccumulator {
    /// Category ids in first-detection order.
    pub categories: Vec<&'static str>,
    /// Trimmed source lines that contributed a new category.
    pub sources: Vec<String>,
}

impl SignAccumulator {
    /// Record the categories found in one line.
    pub fn observe(&mut self, found: &[&'static str], source_line: &str) {
        let mut contributed = false;
        for id in found {
            if !self.categories.contains(id) {
                self.categories.push(id);
                contributed = true;
            }
        }
        if contributed {
            self.sources.push(source_line.trim().to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Contributing lines joined with `"; "`.
    pub fn source_text(&self) -> String {
        self.sources.join("; ")
    }
}
