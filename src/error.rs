//! Error types for locale transport and language persistence.
use thiserror::Error;

/// Why a single candidate locale file could not be used.
///
/// The loader treats every variant the same way (try the next candidate), the
/// distinction only shows up in debug logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot resolve reference {reference:?}: {reason}")]
    InvalidReference { reference: String, reason: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("locale document is not a JSON object")]
    NotAMapping,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encode error: {0}")]
    Serialize(#[from] serde_json::Error),
}
