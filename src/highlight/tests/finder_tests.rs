//! Matcher selection, pattern mode, and custom finders

use super::{highlighted, pairs};
use crate::highlight::{
    highlight, ChunkFinder, HighlightOptions, Highlighter, Span, SubstringFinder,
};

/// Only matches terms at the start of a whitespace-separated word
struct WordPrefixFinder;

impl ChunkFinder for WordPrefixFinder {
    fn find_spans(&self, text: &str, terms: &[String], _: &HighlightOptions) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut offset = 0;
        for word in text.split(' ') {
            for term in terms {
                if word.starts_with(term.as_str()) {
                    spans.push(Span::new(offset, offset + term.len()));
                }
            }
            offset += word.len() + 1;
        }
        spans
    }
}

#[test]
fn test_custom_finder_replaces_substring_matching() {
    let hl = Highlighter::new("cat", HighlightOptions::default()).with_finder(WordPrefixFinder);
    let chunks = hl.highlight("cat concat catalog").chunks;
    assert_eq!(highlighted(&chunks), vec!["cat", "cat"]);
    assert_eq!(
        pairs(&chunks),
        vec![("cat", true), (" concat ", false), ("cat", true), ("alog", false)]
    );
}

#[test]
fn test_custom_finder_not_called_without_terms() {
    struct Panics;
    impl ChunkFinder for Panics {
        fn find_spans(&self, _: &str, _: &[String], _: &HighlightOptions) -> Vec<Span> {
            panic!("finder must not run for empty terms");
        }
    }

    let hl = Highlighter::new(["", " "], HighlightOptions::default()).with_finder(Panics);
    assert_eq!(hl.highlight("anything").chunks.len(), 1);
}

#[test]
fn test_substring_finder_as_explicit_finder() {
    let hl = Highlighter::new(["quick", "quick brown"], HighlightOptions::default())
        .with_finder(SubstringFinder);
    let chunks = hl.highlight("The quick brown fox").chunks;
    assert_eq!(highlighted(&chunks), vec!["quick brown"]);
}

#[test]
fn test_pattern_mode_case_sensitive() {
    let opts = HighlightOptions::pattern().with_case_sensitive(true);
    let chunks = highlight("Cat cat CAT", "c.t", &opts);
    assert_eq!(highlighted(&chunks), vec!["cat"]);

    let opts = HighlightOptions::pattern();
    let chunks = highlight("Cat cat CAT", "c.t", &opts);
    assert_eq!(highlighted(&chunks), vec!["Cat", "cat", "CAT"]);
}

#[test]
fn test_pattern_mode_alternation_merges() {
    let chunks = highlight("foobar", "foo|oob|bar", &HighlightOptions::pattern());
    assert_eq!(highlighted(&chunks), vec!["foobar"]);
}

#[test]
fn test_pattern_mode_skips_bad_term_keeps_good() {
    let hl = Highlighter::new(["(unclosed", "dog"], HighlightOptions::pattern());
    let result = hl.highlight("The dog is chasing the Dog");
    assert_eq!(highlighted(&result.chunks), vec!["dog", "Dog"]);
    assert_eq!(result.skipped[0].term, "(unclosed");
    assert!(!result.skipped[0].reason.is_empty());
}

#[test]
fn test_pattern_size_limit_counts_as_malformed() {
    let mut opts = HighlightOptions::pattern();
    opts.pattern_size_limit = 16;
    let hl = Highlighter::new(r"\w{50}", opts);
    assert_eq!(hl.skipped().len(), 1);
    assert_eq!(hl.highlight("abc").chunks.len(), 1);
}

#[test]
fn test_literal_mode_ignores_size_limit() {
    for case_sensitive in [true, false] {
        let mut opts = HighlightOptions::default().with_case_sensitive(case_sensitive);
        opts.pattern_size_limit = 1;
        let chunks = highlight("a.b.c", ".", &opts);
        assert_eq!(highlighted(&chunks), vec![".", "."]);

        let chunks = highlight("café CAFÉ", "café", &opts);
        let expected: &[&str] = if case_sensitive { &["café"] } else { &["café", "CAFÉ"] };
        assert_eq!(highlighted(&chunks), expected);
    }
}

#[test]
fn test_long_literal_term_matches_in_every_case_mode() {
    for len in [10_000, 30_000, 120_000] {
        let term = "ab".repeat(len / 2);
        let text = format!("x{}y", term.to_uppercase());
        for case_sensitive in [false, true] {
            let opts = HighlightOptions::default().with_case_sensitive(case_sensitive);
            let hl = Highlighter::new(term.as_str(), opts);
            assert!(hl.skipped().is_empty(), "len {} skipped", len);

            let result = hl.highlight(&format!("x{}y", term));
            assert_eq!(result.highlighted_count(), 1);
            assert_eq!(highlighted(&result.chunks), vec![term.as_str()]);

            let upper = hl.highlight(&text).highlighted_count();
            assert_eq!(upper, if case_sensitive { 0 } else { 1 });
        }
    }
}
