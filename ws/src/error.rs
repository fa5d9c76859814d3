//! Search error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a corpus or running a search
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Corpus directory {path} is unavailable: {source}")]
    CorpusUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {file}: {reason}")]
    Decode { file: String, reason: String },

    #[error("Query word must not be empty")]
    InvalidQuery,
}

impl SearchError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SearchError::CorpusUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Check if this error only affects a single document
    pub fn is_per_document(&self) -> bool {
        matches!(self, SearchError::Decode { .. })
    }
}
