//! Edge cases: empty and whitespace text, unicode, newlines, long input

use super::{highlighted, pairs};
use crate::highlight::{highlight, Chunk, HighlightOptions, Highlighter, Span};

#[test]
fn test_empty_text_yields_one_empty_chunk() {
    let chunks = highlight("", "test", &HighlightOptions::default());
    assert_eq!(chunks, vec![Chunk::plain("")]);

    let chunks = highlight("", Vec::<String>::new(), &HighlightOptions::default());
    assert_eq!(chunks, vec![Chunk::plain("")]);
}

#[test]
fn test_whitespace_only_text() {
    let chunks = highlight("   ", "test", &HighlightOptions::default());
    assert_eq!(chunks, vec![Chunk::plain("   ")]);
}

#[test]
fn test_whitespace_term_is_discarded_not_matched() {
    // " " trims to nothing, so the spaces are never highlighted
    let chunks = highlight("a b c", " ", &HighlightOptions::default());
    assert_eq!(chunks, vec![Chunk::plain("a b c")]);
}

#[test]
fn test_newlines_preserved() {
    let text = "Line 1\nLine 2\nLine 3";
    let chunks = highlight(text, "Line", &HighlightOptions::default());
    assert_eq!(
        pairs(&chunks),
        vec![
            ("Line", true),
            (" 1\n", false),
            ("Line", true),
            (" 2\n", false),
            ("Line", true),
            (" 3", false),
        ]
    );
}

#[test]
fn test_unicode_text_around_match() {
    let text = "Hello 世界 🌍";
    let chunks = highlight(text, "Hello", &HighlightOptions::default());
    assert_eq!(pairs(&chunks), vec![("Hello", true), (" 世界 🌍", false)]);
}

#[test]
fn test_unicode_terms() {
    let text = "Hello 世界 🌍 and 世界 again";
    let chunks = highlight(text, ["世界", "🌍"], &HighlightOptions::default());
    assert_eq!(highlighted(&chunks), vec!["世界", "🌍", "世界"]);
    let rebuilt: String = chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(rebuilt, text);
}

#[test]
fn test_special_characters_in_text() {
    let chunks = highlight("Hello! @world #hashtag $money", "world", &HighlightOptions::default());
    assert_eq!(
        pairs(&chunks),
        vec![("Hello! @", false), ("world", true), (" #hashtag $money", false)]
    );
}

#[test]
fn test_very_long_text() {
    let text = "word ".repeat(1000);
    let chunks = highlight(&text, "word", &HighlightOptions::default());
    assert_eq!(highlighted(&chunks).len(), 1000);
    assert_eq!(chunks.len(), 2000);
}

#[test]
fn test_term_longer_than_text() {
    let chunks = highlight("dog", "doghouse", &HighlightOptions::default());
    assert_eq!(chunks, vec![Chunk::plain("dog")]);
}

#[test]
fn test_term_equals_text() {
    let chunks = highlight("dog", "DOG", &HighlightOptions::default());
    assert_eq!(chunks, vec![Chunk::highlighted("dog")]);
}

#[test]
fn test_markup_in_text_stays_inert() {
    let text = "<img src=x onerror=alert(1)> hello";
    let chunks = highlight(text, "hello", &HighlightOptions::default());
    assert_eq!(chunks[0], Chunk::plain("<img src=x onerror=alert(1)> "));
    let html = Highlighter::new("hello", HighlightOptions::default()).highlight_html(text);
    assert!(!html.contains("<img"));
}

#[test]
fn test_all_terms_malformed_is_no_match() {
    let hl = Highlighter::new(["(", "[", "*"], HighlightOptions::pattern());
    let result = hl.highlight("Hello World");
    assert_eq!(result.chunks, vec![Chunk::plain("Hello World")]);
    assert_eq!(result.skipped.len(), 3);
}

#[test]
fn test_custom_finder_spans_are_sanitized() {
    // Returns out-of-range, mid-character and empty spans
    struct Sloppy;
    impl crate::highlight::ChunkFinder for Sloppy {
        fn find_spans(&self, _: &str, _: &[String], _: &HighlightOptions) -> Vec<Span> {
            vec![Span::new(2, 3), Span::new(4, 4), Span::new(40, 90)]
        }
    }

    let hl = Highlighter::new("ignored", HighlightOptions::default()).with_finder(Sloppy);
    let chunks = hl.highlight("a世b").chunks;
    assert_eq!(pairs(&chunks), vec![("a", false), ("世", true), ("b", false)]);
}
