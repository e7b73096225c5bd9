//! Term normalization
//!
//! Callers hand over a single term, a list of terms, or nothing at all.
//! Everything is folded into one ordered, de-duplicated list of trimmed,
//! non-empty terms before any scanning happens. Case is preserved here;
//! case folding belongs to the matcher.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Search terms as supplied by the caller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Terms {
    Single(String),
    Many(Vec<String>),
    #[default]
    Absent,
}

impl Terms {
    /// Trim, drop empties, and de-duplicate keeping first occurrence order
    pub fn normalize(&self) -> Vec<String> {
        match self {
            Terms::Absent => Vec::new(),
            Terms::Single(term) => normalize_terms(std::slice::from_ref(term)),
            Terms::Many(terms) => normalize_terms(terms),
        }
    }
}

/// Normalize a list of raw terms
pub fn normalize_terms<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut terms = Vec::new();

    for term in raw {
        let trimmed = term.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed) {
            terms.push(trimmed.to_string());
        }
    }

    terms
}

impl From<&str> for Terms {
    fn from(term: &str) -> Self {
        Terms::Single(term.to_string())
    }
}

impl From<String> for Terms {
    fn from(term: String) -> Self {
        Terms::Single(term)
    }
}

impl From<Vec<String>> for Terms {
    fn from(terms: Vec<String>) -> Self {
        Terms::Many(terms)
    }
}

impl From<&[&str]> for Terms {
    fn from(terms: &[&str]) -> Self {
        Terms::Many(terms.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Terms {
    fn from(terms: [&str; N]) -> Self {
        Terms::Many(terms.iter().map(|t| t.to_string()).collect())
    }
}

impl<T: Into<Terms>> From<Option<T>> for Terms {
    fn from(terms: Option<T>) -> Self {
        terms.map(Into::into).unwrap_or(Terms::Absent)
    }
}
