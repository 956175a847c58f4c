//! Error types for the typing engine.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A test was configured with no words
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Analytics were asked to summarise an empty sample
    #[error("sample set is empty")]
    EmptySample,

    /// The embedded word pools are missing or malformed
    #[error("lexicon error: {0}")]
    Lexicon(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A history row could not be turned into a result
    #[error("history error: {0}")]
    History(String),
}
