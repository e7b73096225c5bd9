//! Spans and span merging
//!
//! A `Span` is a half-open byte range `[start, end)` over the source text,
//! always on `char` boundaries. Spans from all terms are sorted and
//! collapsed into a `MergedSpans` set whose members are strictly separated:
//! for consecutive spans `a`, `b` we always have `a.end < b.start`.
//! Touching spans (`a.end == b.start`) are merged, not kept side by side.

use serde::{Deserialize, Serialize};

// =============================================================================
// Span
// =============================================================================

/// Half-open byte range over the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// The same range measured in UTF-16 code units, for JS string slicing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanOffsets {
    pub start: usize,
    pub end: usize,
    pub utf16_start: usize,
    pub utf16_end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Translate byte offsets to UTF-16 code unit offsets within `text`
    ///
    /// Scans from the start of `text`; use [`MergedSpans::to_utf16`] for a
    /// whole span set.
    pub fn to_utf16(&self, text: &str) -> SpanOffsets {
        let utf16_start = utf16_len(&text[..self.start]);
        let utf16_end = utf16_start + utf16_len(&text[self.start..self.end]);
        SpanOffsets {
            start: self.start,
            end: self.end,
            utf16_start,
            utf16_end,
        }
    }

    /// Clamp to `text` and widen to the enclosing char boundaries.
    ///
    /// Returns `None` when nothing is left. Used on spans coming from a
    /// caller-supplied finder, whose offsets we cannot trust.
    pub fn sanitize(self, text: &str) -> Option<Span> {
        let len = text.len();
        let mut start = self.start.min(len);
        let mut end = self.end.min(len);
        while start > 0 && !text.is_char_boundary(start) {
            start -= 1;
        }
        while end < len && !text.is_char_boundary(end) {
            end += 1;
        }
        (start < end).then_some(Span { start, end })
    }
}

fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

// =============================================================================
// MergedSpans
// =============================================================================

/// Sorted, disjoint, non-touching spans
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedSpans {
    spans: Vec<Span>,
}

impl MergedSpans {
    pub fn as_slice(&self) -> &[Span] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    pub fn into_vec(self) -> Vec<Span> {
        self.spans
    }

    /// UTF-16 offsets for every span in one forward pass over `text`
    pub fn to_utf16(&self, text: &str) -> Vec<SpanOffsets> {
        let mut offsets = Vec::with_capacity(self.spans.len());
        let mut byte_cursor = 0;
        let mut utf16_cursor = 0;

        for span in &self.spans {
            let utf16_start = utf16_cursor + utf16_len(&text[byte_cursor..span.start]);
            let utf16_end = utf16_start + utf16_len(&text[span.start..span.end]);
            offsets.push(SpanOffsets {
                start: span.start,
                end: span.end,
                utf16_start,
                utf16_end,
            });
            byte_cursor = span.end;
            utf16_cursor = utf16_end;
        }

        offsets
    }
}

impl<'a> IntoIterator for &'a MergedSpans {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

/// Collapse overlapping and touching spans into maximal regions
///
/// Spans are not checked against any text. Callers that pass the result to
/// [`build_chunks`](super::chunk::build_chunks) or [`MergedSpans::to_utf16`]
/// must only feed in spans found in, or [`Span::sanitize`]d against, that
/// same text.
pub fn merge_spans(mut spans: Vec<Span>) -> MergedSpans {
    spans.retain(|s| !s.is_empty());
    spans.sort_unstable();

    let mut iter = spans.into_iter();
    let mut current = match iter.next() {
        Some(span) => span,
        None => return MergedSpans::default(),
    };

    let mut merged = Vec::new();
    for span in iter {
        if span.start <= current.end {
            current.end = current.end.max(span.end);
        } else {
            merged.push(current);
            current = span;
        }
    }
    merged.push(current);

    MergedSpans { spans: merged }
}
