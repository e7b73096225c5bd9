//! Chunk building
//!
//! Walks the text and its merged spans together and cuts the text into an
//! ordered run of plain and highlighted chunks. The chunks always partition
//! the text exactly: concatenating their contents gives the input back.

use serde::{Deserialize, Serialize};

use super::span::MergedSpans;

/// A contiguous slice of the source text, highlighted or plain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub content: String,
    pub highlighted: bool,
}

impl Chunk {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            highlighted: false,
        }
    }

    pub fn highlighted(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            highlighted: true,
        }
    }
}

/// Partition `text` into chunks along `spans`
///
/// Never returns an empty vector: with no spans (including empty text) the
/// result is a single plain chunk holding the whole text.
///
/// # Panics
///
/// `spans` must lie within `text` on char boundaries, i.e. come from matches
/// found in `text` or from spans passed through [`Span::sanitize`] with it.
/// [`Highlighter`] always does one or the other.
///
/// [`Span::sanitize`]: super::span::Span::sanitize
/// [`Highlighter`]: super::engine::Highlighter
pub fn build_chunks(text: &str, spans: &MergedSpans) -> Vec<Chunk> {
    if spans.is_empty() {
        return vec![Chunk::plain(text)];
    }

    let mut chunks = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;

    for span in spans {
        if span.start > cursor {
            chunks.push(Chunk::plain(&text[cursor..span.start]));
        }
        chunks.push(Chunk::highlighted(&text[span.start..span.end]));
        cursor = span.end;
    }

    if cursor < text.len() {
        chunks.push(Chunk::plain(&text[cursor..]));
    }

    chunks
}
