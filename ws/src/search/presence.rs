//! Absence search: which documents never mention the word
//!
//! Matching is a case-insensitive substring test over the whole content, so
//! a word hidden inside a longer word still counts as present. Documents
//! where it is present are dropped; the rest are reported.

use log::debug;

use super::Strategy;
use crate::corpus::Document;
use crate::query::Query;

/// Marker hit for a document that lacks the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Absent;

#[derive(Debug, Clone, Copy, Default)]
pub struct PresenceMatcher;

impl PresenceMatcher {
    /// True if the folded query occurs anywhere in the folded content
    pub fn contains(content: &str, query: &Query) -> bool {
        content.to_lowercase().contains(query.folded())
    }
}

impl Strategy for PresenceMatcher {
    type Hit = Absent;

    fn name(&self) -> &'static str {
        "absent"
    }

    fn examine(&self, document: &Document, query: &Query) -> Option<Absent> {
        if Self::contains(&document.content, query) {
            debug!("{}: contains '{}'", document.name, query.folded());
            None
        } else {
            Some(Absent)
        }
    }
}
