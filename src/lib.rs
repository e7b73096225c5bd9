//! TextHighlight: Search-Term Highlighting Engine
//!
//! A Rust/WASM implementation of the KittClouds text highlighter.
//!
//! # Architecture
//!
//! Four stages, each feeding the next:
//! - `terms.rs` - Term normalization (single | list | absent -> ordered, de-duplicated terms)
//! - `finder.rs` - Match finding via Aho-Corasick (literal) or regex (case-folded / pattern)
//! - `span.rs` - Span merging (overlapping and touching spans collapse)
//! - `chunk.rs` - Chunk building (gap-free `{content, highlighted}` partition of the text)
//!
//! Around them:
//! - `config.rs` - `HighlightOptions` and defaults
//! - `engine.rs` - `Highlighter`, the reusable compiled pipeline
//! - `render.rs` - Escaped HTML rendering
//! - `wasm.rs` - JS bindings (`highlight`, `highlightHtml`, `HighlightCortex`)
//!
//! # Usage (Rust)
//! ```
//! use texthighlight::{highlight, HighlightOptions};
//!
//! let chunks = highlight("The quick brown fox", ["quick", "quick brown"], &HighlightOptions::default());
//! assert_eq!(chunks.len(), 3);
//! assert_eq!(chunks[1].content, "quick brown");
//! assert!(chunks[1].highlighted);
//! ```
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { highlight } from 'texthighlight';
//!
//! await init();
//! const chunks = highlight("Price: $100.00 (50% off)", "$100", { autoEscape: true });
//! // Render each chunk as its own text node; never concatenate into markup.
//! ```

#[macro_use]
mod console;

pub mod highlight;

pub use highlight::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("texthighlight v{}", env!("CARGO_PKG_VERSION"))
}
