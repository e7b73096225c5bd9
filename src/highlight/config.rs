//! Configuration types and defaults for the highlighter

use serde::{Deserialize, Serialize};

use super::error::HighlightError;

/// Class applied to highlighted chunks when the caller does not pick one.
pub const DEFAULT_HIGHLIGHT_CLASS: &str = "bg-yellow-200 font-semibold";

/// Upper bound on a compiled pattern's size (bytes). Default: 1 MiB
pub const DEFAULT_PATTERN_SIZE_LIMIT: usize = 1 << 20;

// =============================================================================
// HighlightOptions
// =============================================================================

/// Options for a single highlight invocation
///
/// Deserializes from the JS shape `{ caseSensitive, literalMode | autoEscape,
/// highlightClass, containerClass, patternSizeLimit }`; missing keys take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightOptions {
    /// Match with exact case. Default: false
    pub case_sensitive: bool,
    /// Treat terms as literal text rather than patterns. Default: true
    #[serde(alias = "autoEscape")]
    pub literal_mode: bool,
    /// Class for highlighted chunks when rendering. Default: `bg-yellow-200 font-semibold`
    pub highlight_class: String,
    /// Class for the wrapping element when rendering. Default: none
    pub container_class: Option<String>,
    /// Compiled pattern size cap; larger patterns count as malformed. Default: 1 MiB
    pub pattern_size_limit: usize,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            literal_mode: true,
            highlight_class: DEFAULT_HIGHLIGHT_CLASS.to_string(),
            container_class: None,
            pattern_size_limit: DEFAULT_PATTERN_SIZE_LIMIT,
        }
    }
}

impl HighlightOptions {
    /// Case-insensitive literal matching (the default)
    pub fn literal() -> Self {
        Self::default()
    }

    /// Case-sensitive literal matching
    pub fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
            ..Self::default()
        }
    }

    /// Terms are interpreted as regular expressions
    pub fn pattern() -> Self {
        Self {
            literal_mode: false,
            ..Self::default()
        }
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_literal_mode(mut self, literal_mode: bool) -> Self {
        self.literal_mode = literal_mode;
        self
    }

    pub fn with_highlight_class(mut self, class: impl Into<String>) -> Self {
        self.highlight_class = class.into();
        self
    }

    pub fn with_container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = Some(class.into());
        self
    }

    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> Result<Self, HighlightError> {
        serde_json::from_str(json).map_err(|e| HighlightError::InvalidOptions(e.to_string()))
    }
}
