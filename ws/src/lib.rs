//! wordsearch - find words in a folder of plain-text documents
//!
//! Two search modes run over the same corpus:
//!
//! - **absent**: lists the documents whose lowercase content does *not*
//!   contain the lowercase word anywhere (substring match).
//! - **context**: lists every whole-word, case-insensitive occurrence of the
//!   word together with up to three words on either side.
//!
//! # Example
//!
//! ```ignore
//! use wordsearch::{SearchOptions, search_context};
//!
//! let report = search_context("corpus_norm_lem", "cat", &SearchOptions::default())?;
//! report.render(&mut std::io::stdout())?;
//! ```

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod prompt;
pub mod query;
pub mod report;
pub mod search;
pub mod token;

pub use corpus::{Corpus, Document, LoadOptions};
pub use error::SearchError;
pub use query::Query;
pub use report::{ReportLines, SearchReport, SkippedDocument};
pub use search::{
    Absent, ContextMatcher, Contexts, DecodePolicy, PresenceMatcher, SearchOptions, Strategy, search_absent,
    search_context,
};
pub use token::{Token, tokenize};

/// Extension of the documents that make up a corpus
pub const DEFAULT_EXTENSION: &str = "txt";

/// Words kept on each side of a match in context mode
pub const DEFAULT_CONTEXT_RADIUS: usize = 3;

/// Corpus searched by the absent mode when none is given
pub const DEFAULT_ABSENT_CORPUS: &str = "corpus_norm";

/// Lemmatized corpus searched by the context mode when none is given
pub const DEFAULT_CONTEXT_CORPUS: &str = "corpus_norm_lem";
