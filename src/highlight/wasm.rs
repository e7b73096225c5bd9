//! JS bindings for the highlighter
//!
//! ```javascript,ignore
//! import init, { highlight, HighlightCortex } from 'texthighlight';
//!
//! await init();
//! highlight("The dog is chasing the Dog", "dog");
//! // [{content: "The ", highlighted: false}, {content: "dog", highlighted: true}, ...]
//!
//! const cortex = new HighlightCortex(["quick", "quick brown"], { caseSensitive: true });
//! cortex.highlight("The quick brown fox");
//! ```

use js_sys::Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::config::HighlightOptions;
use super::engine::Highlighter;
use super::error::HighlightError;
use super::span::SpanOffsets;
use super::terms::Terms;

/// Read `string | string[] | null | undefined`; non-string array entries are ignored
pub(crate) fn terms_from_js(value: &JsValue) -> Terms {
    if let Some(term) = value.as_string() {
        return Terms::Single(term);
    }
    if Array::is_array(value) {
        let terms = Array::from(value)
            .iter()
            .filter_map(|v| v.as_string())
            .collect();
        return Terms::Many(terms);
    }
    Terms::Absent
}

fn options_from_js(value: JsValue) -> Result<HighlightOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(HighlightOptions::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from(HighlightError::InvalidOptions(e.to_string()).to_string()))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let err = HighlightError::Serialization(e.to_string());
        console_error!("[HighlightCortex] {}", err);
        JsValue::from_str(&err.to_string())
    })
}

/// Highlight `text` once: returns `{content, highlighted}[]`
///
/// `text` crosses into Rust as UTF-8, so a lone surrogate in the JS string
/// arrives as U+FFFD. The chunks then reproduce that replaced text, not the
/// original JS string.
#[wasm_bindgen(js_name = highlight)]
pub fn js_highlight(text: &str, terms: JsValue, options: JsValue) -> Result<JsValue, JsValue> {
    let options = options_from_js(options)?;
    let result = Highlighter::new(terms_from_js(&terms), options).highlight(text);
    to_js(&result.chunks)
}

/// Highlight `text` once and render it as escaped HTML
///
/// Lone surrogates in `text` are replaced with U+FFFD, as in [`js_highlight`].
#[wasm_bindgen(js_name = highlightHtml)]
pub fn js_highlight_html(text: &str, terms: JsValue, options: JsValue) -> Result<String, JsValue> {
    let options = options_from_js(options)?;
    Ok(Highlighter::new(terms_from_js(&terms), options).highlight_html(text))
}

// =============================================================================
// HighlightCortex
// =============================================================================

/// Compiled highlighter for repeated use on many texts
#[wasm_bindgen]
pub struct HighlightCortex {
    inner: Highlighter,
}

#[wasm_bindgen]
impl HighlightCortex {
    #[wasm_bindgen(constructor)]
    pub fn new(terms: JsValue, options: JsValue) -> Result<HighlightCortex, JsValue> {
        let options = options_from_js(options)?;
        let inner = Highlighter::new(terms_from_js(&terms), options);
        console_log!(
            "[HighlightCortex] Compiled {} term(s), {} skipped",
            inner.terms().len() - inner.skipped().len(),
            inner.skipped().len()
        );
        Ok(HighlightCortex { inner })
    }

    /// Chunks of `text`: `{content, highlighted}[]`
    ///
    /// Lone surrogates in `text` arrive as U+FFFD, as in [`js_highlight`].
    #[wasm_bindgen(js_name = highlight)]
    pub fn highlight(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.inner.highlight(text).chunks)
    }

    /// Escaped HTML for `text`
    #[wasm_bindgen(js_name = highlightHtml)]
    pub fn highlight_html(&self, text: &str) -> String {
        self.inner.highlight_html(text)
    }

    /// Merged match regions with byte and UTF-16 offsets
    #[wasm_bindgen(js_name = spans)]
    pub fn spans(&self, text: &str) -> Result<JsValue, JsValue> {
        let offsets: Vec<SpanOffsets> = self.inner.spans(text).to_utf16(text);
        to_js(&offsets)
    }

    /// Number of normalized terms
    #[wasm_bindgen(js_name = termCount)]
    pub fn term_count(&self) -> usize {
        self.inner.terms().len()
    }

    /// Terms dropped as malformed: `{term, reason}[]`
    #[wasm_bindgen(js_name = skippedTerms)]
    pub fn skipped_terms(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.skipped())
    }
}
