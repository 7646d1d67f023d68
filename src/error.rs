//! Error types
//!
//! Messages are phrased for end users: the CLI prints them as-is.

use thiserror::Error;

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The input does not have enough sentences for the requested summary
    #[error("text too short to summarize: found {found} sentence(s), need at least {required}")]
    TextTooShort { found: usize, required: usize },

    /// A language model could not be loaded
    #[error("analysis service unavailable: unknown model `{0}`")]
    ModelUnavailable(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl AnalyzerError {
    /// Returns `true` when the failure is caused by the submitted text
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::TextTooShort { .. })
    }
}
