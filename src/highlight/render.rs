//! HTML rendering of chunk sequences
//!
//! Every chunk is written as its own escaped text node; highlighted chunks
//! are wrapped in `<mark>`. Neither the text nor the terms can reach the
//! output unescaped.

use super::chunk::Chunk;
use super::config::HighlightOptions;

/// Render chunks as `<span class=..>plain<mark class=..>hit</mark>..</span>`
pub fn to_html(chunks: &[Chunk], options: &HighlightOptions) -> String {
    let body_len: usize = chunks.iter().map(|c| c.content.len()).sum();
    let mut out = String::with_capacity(body_len + 32 * chunks.len() + 32);

    match options.container_class.as_deref() {
        Some(class) => {
            out.push_str("<span class=\"");
            escape_into(&mut out, class);
            out.push_str("\">");
        }
        None => out.push_str("<span>"),
    }

    for chunk in chunks {
        if chunk.highlighted {
            out.push_str("<mark class=\"");
            escape_into(&mut out, &options.highlight_class);
            out.push_str("\">");
            escape_into(&mut out, &chunk.content);
            out.push_str("</mark>");
        } else {
            escape_into(&mut out, &chunk.content);
        }
    }

    out.push_str("</span>");
    out
}

/// Escape text for use in HTML text nodes and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(&mut out, s);
    out
}

fn escape_into(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
