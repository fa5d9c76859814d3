//! Search driver and matching strategies
//!
//! A [`Strategy`] looks at one document at a time and decides whether it
//! belongs in the result. [`run`] walks a corpus with a strategy and collects
//! the hits into a [`SearchReport`] in corpus order.

mod context;
mod presence;

pub use context::{ContextMatcher, Contexts};
pub use presence::{Absent, PresenceMatcher};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::corpus::{Corpus, Document, LoadOptions};
use crate::error::SearchError;
use crate::query::Query;
use crate::report::{SearchReport, SkippedDocument};

/// A per-document matching strategy
pub trait Strategy {
    /// What is recorded for a document that is reported
    type Hit;

    /// Short name used in log lines
    fn name(&self) -> &'static str;

    /// Examine one document; `Some` means the document is reported
    fn examine(&self, document: &Document, query: &Query) -> Option<Self::Hit>;
}

/// What to do with a document that cannot be read or decoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Warn, record the document as skipped, and keep going
    #[default]
    Skip,
    /// Fail the whole run
    Abort,
}

/// Options shared by both search modes
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub load: LoadOptions,
    pub on_decode_error: DecodePolicy,
    /// Tokens kept on each side of a match in context mode
    pub context_radius: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            load: LoadOptions::default(),
            on_decode_error: DecodePolicy::default(),
            context_radius: crate::DEFAULT_CONTEXT_RADIUS,
        }
    }
}

/// Run `strategy` over every document of `corpus`
pub fn run<S: Strategy>(
    corpus: &Corpus,
    query: &Query,
    strategy: &S,
    policy: DecodePolicy,
) -> Result<SearchReport<S::Hit>, SearchError> {
    let mut report = SearchReport::new(query.clone());

    for document in corpus.documents() {
        let document = match document {
            Ok(document) => document,
            Err(SearchError::Decode { file, reason }) if policy == DecodePolicy::Skip => {
                warn!("Skipping {}: {}", file, reason);
                report.skipped.push(SkippedDocument { name: file, reason });
                continue;
            }
            Err(e) => return Err(e),
        };

        if let Some(hit) = strategy.examine(&document, query) {
            report.hits.push((document.name, hit));
        }
    }

    info!(
        "{} search for '{}' in {}: {} reported, {} skipped",
        strategy.name(),
        query.raw(),
        corpus.root().display(),
        report.hits.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// List the documents under `dir` that do not contain `word` as a substring
pub fn search_absent(
    dir: impl AsRef<Path>,
    word: &str,
    options: &SearchOptions,
) -> Result<SearchReport<Absent>, SearchError> {
    let query = Query::new(word)?;
    let corpus = Corpus::open(dir, &options.load)?;
    run(&corpus, &query, &PresenceMatcher, options.on_decode_error)
}

/// Collect every whole-word occurrence of `word` under `dir`, with context
pub fn search_context(
    dir: impl AsRef<Path>,
    word: &str,
    options: &SearchOptions,
) -> Result<SearchReport<Contexts>, SearchError> {
    let query = Query::new(word)?;
    let corpus = Corpus::open(dir, &options.load)?;
    let matcher = ContextMatcher::new(options.context_radius);
    run(&corpus, &query, &matcher, options.on_decode_error)
}
