//! Query word

use crate::error::SearchError;

/// A validated, case-folded query word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
    folded: String,
}

impl Query {
    /// Validate a query word; an empty word is rejected
    pub fn new(word: impl Into<String>) -> Result<Self, SearchError> {
        let raw = word.into();
        if raw.is_empty() {
            return Err(SearchError::InvalidQuery);
        }
        let folded = raw.to_lowercase();
        Ok(Self { raw, folded })
    }

    /// The word as supplied by the caller
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lowercase form used for matching
    pub fn folded(&self) -> &str {
        &self.folded
    }
}
