/// Highlighting errors
///
/// The pipeline itself never fails: `InvalidPattern` is recorded as a
/// skipped term and highlighting continues with the remaining terms.
#[derive(Debug, Clone, PartialEq)]
pub enum HighlightError {
    InvalidPattern { term: String, reason: String },
    InvalidOptions(String),
    Serialization(String),
}

impl std::fmt::Display for HighlightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HighlightError::InvalidPattern { term, reason } => {
                write!(f, "Invalid pattern {:?}: {}", term, reason)
            }
            HighlightError::InvalidOptions(msg) => write!(f, "Invalid options: {}", msg),
            HighlightError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for HighlightError {}
