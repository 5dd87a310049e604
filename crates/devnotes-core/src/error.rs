//! Error types for dev-notes.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level result type for dev-notes operations.
pub type Result<T> = std::result::Result<T, DevNotesError>;

/// Top-level error type for dev-notes.
#[derive(Debug, Error)]
pub enum DevNotesError {
    #[error("cannot create notes directory {}: {source}", path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Note \"{title}\" not found (looked for {filename} in {}).", dir.display())]
    NoteNotFound {
        title: String,
        filename: String,
        dir: PathBuf,
    },

    #[error("Failed to fetch weather for \"{location}\".")]
    Weather { location: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DevNotesError {
    /// Whether the caller should receive this as a reported, error-flagged
    /// result rather than a failed request.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoteNotFound { .. } | Self::Weather { .. })
    }
}
