//! Error types for Asha.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AshaError {
    /// A disaster reached the knowledge store without a matching entry.
    /// The classifier and the pack are out of sync; this is an internal
    /// consistency fault, not a user input error.
    #[error("No knowledge entry for disaster '{0}'")]
    UnknownDisaster(String),

    #[error("Invalid knowledge pack: {0}")]
    InvalidPack(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
