//! Highlighter: the composed pipeline
//!
//! terms -> normalized terms -> spans -> merged spans -> chunks
//!
//! A `Highlighter` compiles its terms once and can then be run against any
//! number of texts. It holds no mutable state, so the same instance gives
//! identical output for identical input and can be shared across threads.

use serde::Serialize;

use super::chunk::{build_chunks, Chunk};
use super::config::HighlightOptions;
use super::error::HighlightError;
use super::finder::{ChunkFinder, CompiledTerms, SkippedTerm};
use super::render;
use super::span::{merge_spans, MergedSpans, Span};
use super::terms::Terms;

// =============================================================================
// Highlighted
// =============================================================================

/// Result of one highlight run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlighted {
    pub chunks: Vec<Chunk>,
    /// Terms that were dropped because they failed to compile
    pub skipped: Vec<SkippedTerm>,
}

impl Highlighted {
    /// Concatenation of all chunk contents (always the original text)
    pub fn plain_text(&self) -> String {
        self.chunks.iter().map(|c| c.content.as_str()).collect()
    }

    pub fn highlighted_count(&self) -> usize {
        self.chunks.iter().filter(|c| c.highlighted).count()
    }

    pub fn has_matches(&self) -> bool {
        self.chunks.iter().any(|c| c.highlighted)
    }

    pub fn to_html(&self, options: &HighlightOptions) -> String {
        render::to_html(&self.chunks, options)
    }

    pub fn into_chunks(self) -> Vec<Chunk> {
        self.chunks
    }
}

// =============================================================================
// Highlighter
// =============================================================================

/// Reusable highlighter for a fixed set of terms and options
pub struct Highlighter {
    terms: Vec<String>,
    options: HighlightOptions,
    compiled: CompiledTerms,
    finder: Option<Box<dyn ChunkFinder>>,
}

impl Highlighter {
    /// Build a highlighter; malformed pattern terms are skipped
    pub fn new(terms: impl Into<Terms>, options: HighlightOptions) -> Self {
        let terms = terms.into().normalize();
        let compiled = CompiledTerms::compile(&terms, &options);
        Self {
            terms,
            options,
            compiled,
            finder: None,
        }
    }

    /// Build a highlighter, failing if any term does not compile
    pub fn try_new(terms: impl Into<Terms>, options: HighlightOptions) -> Result<Self, HighlightError> {
        let terms = terms.into().normalize();
        let compiled = CompiledTerms::try_compile(&terms, &options)?;
        Ok(Self {
            terms,
            options,
            compiled,
            finder: None,
        })
    }

    /// Replace the built-in matcher with a custom span finder
    pub fn with_finder(mut self, finder: impl ChunkFinder + 'static) -> Self {
        self.finder = Some(Box::new(finder));
        self
    }

    /// Normalized terms, in first-seen order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }

    pub fn skipped(&self) -> &[SkippedTerm] {
        self.compiled.skipped()
    }

    /// Merged match regions of `text`
    pub fn spans(&self, text: &str) -> MergedSpans {
        if self.terms.is_empty() {
            return MergedSpans::default();
        }

        let raw: Vec<Span> = match &self.finder {
            Some(finder) => finder
                .find_spans(text, &self.terms, &self.options)
                .into_iter()
                .filter_map(|s| s.sanitize(text))
                .collect(),
            None => self.compiled.find_spans(text),
        };

        merge_spans(raw)
    }

    /// Cut `text` into highlighted and plain chunks
    pub fn highlight(&self, text: &str) -> Highlighted {
        // No terms: skip scanning entirely
        let chunks = if self.terms.is_empty() {
            vec![Chunk::plain(text)]
        } else {
            build_chunks(text, &self.spans(text))
        };

        Highlighted {
            chunks,
            skipped: self.compiled.skipped().to_vec(),
        }
    }

    /// Highlight and render as escaped HTML
    pub fn highlight_html(&self, text: &str) -> String {
        render::to_html(&self.highlight(text).chunks, &self.options)
    }
}

/// One-shot highlight of `text` for `terms`
///
/// # Example
/// ```
/// use texthighlight::{highlight, Chunk, HighlightOptions};
///
/// let chunks = highlight("Hello World", "World", &HighlightOptions::default());
/// assert_eq!(chunks, vec![Chunk::plain("Hello "), Chunk::highlighted("World")]);
/// ```
pub fn highlight(text: &str, terms: impl Into<Terms>, options: &HighlightOptions) -> Vec<Chunk> {
    Highlighter::new(terms, options.clone()).highlight(text).into_chunks()
}
