//! Context search: every whole-word occurrence with its neighbours
//!
//! A token matches when its lowercase form equals the lowercase query. The
//! query is compared literally, never as a pattern.

use log::debug;

use super::Strategy;
use crate::corpus::Document;
use crate::query::Query;
use crate::token::{Token, tokenize};

/// Context strings for one document, in the order the matches occur
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contexts(pub Vec<String>);

#[derive(Debug, Clone, Copy)]
pub struct ContextMatcher {
    radius: usize,
}

impl Default for ContextMatcher {
    fn default() -> Self {
        Self::new(crate::DEFAULT_CONTEXT_RADIUS)
    }
}

impl ContextMatcher {
    /// `radius` is the number of tokens kept on each side of a match
    pub fn new(radius: usize) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Build the context window around the token at `index`
    pub fn window(&self, tokens: &[Token<'_>], index: usize) -> String {
        let start = index.saturating_sub(self.radius);
        let end = index.saturating_add(self.radius).saturating_add(1).min(tokens.len());
        tokens[start..end]
            .iter()
            .map(|t| t.surface)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// All context windows for `query` in `text`
    pub fn contexts(&self, text: &str, query: &Query) -> Vec<String> {
        let tokens = tokenize(text);
        tokens
            .iter()
            .filter(|t| t.folded == query.folded())
            .map(|t| self.window(&tokens, t.position))
            .collect()
    }
}

impl Strategy for ContextMatcher {
    type Hit = Contexts;

    fn name(&self) -> &'static str {
        "context"
    }

    fn examine(&self, document: &Document, query: &Query) -> Option<Contexts> {
        let contexts = self.contexts(&document.content, query);
        if contexts.is_empty() {
            return None;
        }
        debug!("{}: {} matches", document.name, contexts.len());
        Some(Contexts(contexts))
    }
}
