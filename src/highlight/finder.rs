//! Match finding
//!
//! Each normalized term is compiled once into a `TermMatcher` and scanned
//! left to right with a non-overlapping greedy search: after a hit the scan
//! resumes at the end of that hit, so occurrences of one term never overlap
//! each other. Occurrences of different terms may overlap freely; the span
//! merger sorts that out.
//!
//! - Literal, case-sensitive: Aho-Corasick automaton over the raw term
//! - Literal, case-insensitive, ASCII term: Aho-Corasick with ASCII folding
//! - Literal, case-insensitive, other terms: escaped regex with Unicode folding
//! - Pattern mode: the term is compiled as a regex; failures skip the term
//!
//! `pattern_size_limit` only caps pattern mode. A literal term always
//! compiles, however long it is.
//!
//! Folding only affects comparison. Offsets always point into the original
//! text, so emitted content keeps the text's own casing.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::config::HighlightOptions;
use super::error::HighlightError;
use super::span::Span;

// =============================================================================
// Types
// =============================================================================

/// A term that contributed no spans because it could not be compiled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedTerm {
    pub term: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
enum Matcher {
    Literal(AhoCorasick),
    Regex(Regex),
}

/// A single compiled search term
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    matcher: Matcher,
}

impl TermMatcher {
    /// Compile `term` according to the case and literal options
    pub fn compile(term: &str, options: &HighlightOptions) -> Result<Self, HighlightError> {
        let invalid = |reason: String| HighlightError::InvalidPattern {
            term: term.to_string(),
            reason,
        };

        let matcher = if options.literal_mode && (options.case_sensitive || term.is_ascii()) {
            let automaton = AhoCorasickBuilder::new()
                .match_kind(MatchKind::LeftmostFirst)
                .ascii_case_insensitive(!options.case_sensitive)
                .build([term])
                .map_err(|e| invalid(e.to_string()))?;
            Matcher::Literal(automaton)
        } else {
            let (source, size_limit) = if options.literal_mode {
                (regex::escape(term), usize::MAX)
            } else {
                (term.to_string(), options.pattern_size_limit)
            };
            let re = RegexBuilder::new(&source)
                .case_insensitive(!options.case_sensitive)
                .size_limit(size_limit)
                .build()
                .map_err(|e| invalid(e.to_string()))?;
            Matcher::Regex(re)
        };

        Ok(Self {
            term: term.to_string(),
            matcher,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Every non-overlapping occurrence of the term, left to right
    pub fn find(&self, text: &str) -> Vec<Span> {
        match &self.matcher {
            Matcher::Literal(automaton) => automaton
                .find_iter(text)
                .map(|m| Span::new(m.start(), m.end()))
                .collect(),
            // Patterns like `a*` can match the empty string; those are not spans
            Matcher::Regex(re) => re
                .find_iter(text)
                .filter(|m| m.start() < m.end())
                .map(|m| Span::new(m.start(), m.end()))
                .collect(),
        }
    }
}

// =============================================================================
// CompiledTerms
// =============================================================================

/// All matchers for one normalized term list, plus the terms that failed
#[derive(Debug, Clone, Default)]
pub struct CompiledTerms {
    matchers: Vec<TermMatcher>,
    skipped: Vec<SkippedTerm>,
}

impl CompiledTerms {
    /// Compile every term; malformed terms are recorded and skipped
    pub fn compile(terms: &[String], options: &HighlightOptions) -> Self {
        let mut compiled = Self::default();

        for term in terms {
            match TermMatcher::compile(term, options) {
                Ok(matcher) => compiled.matchers.push(matcher),
                Err(err) => {
                    console_warn!("[Highlighter] Skipping malformed pattern: {}", err);
                    compiled.skipped.push(SkippedTerm {
                        term: term.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        compiled
    }

    /// Compile every term, failing on the first malformed one
    pub fn try_compile(terms: &[String], options: &HighlightOptions) -> Result<Self, HighlightError> {
        let matchers = terms
            .iter()
            .map(|term| TermMatcher::compile(term, options))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            matchers,
            skipped: Vec::new(),
        })
    }

    pub fn matchers(&self) -> &[TermMatcher] {
        &self.matchers
    }

    pub fn skipped(&self) -> &[SkippedTerm] {
        &self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Spans of all terms concatenated, unsorted
    pub fn find_spans(&self, text: &str) -> Vec<Span> {
        self.matchers.iter().flat_map(|m| m.find(text)).collect()
    }
}

// =============================================================================
// ChunkFinder
// =============================================================================

/// Pluggable span finder, for callers that need their own matching rules
///
/// Returned spans may be unsorted and may overlap. They are clamped to the
/// text and widened to char boundaries before merging.
pub trait ChunkFinder: Send + Sync {
    fn find_spans(&self, text: &str, terms: &[String], options: &HighlightOptions) -> Vec<Span>;
}

/// Default finder: exact substring (or pattern) matching per term
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringFinder;

impl ChunkFinder for SubstringFinder {
    fn find_spans(&self, text: &str, terms: &[String], options: &HighlightOptions) -> Vec<Span> {
        CompiledTerms::compile(terms, options).find_spans(text)
    }
}
