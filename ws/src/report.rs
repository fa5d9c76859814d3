//! Result aggregation and plain-text rendering

use std::io::{self, Write};

use crate::query::Query;
use crate::search::{Absent, Contexts};

/// A document left out of a run because it could not be read or decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    pub name: String,
    pub reason: String,
}

/// Hits of one search run, in corpus order
#[derive(Debug, Clone)]
pub struct SearchReport<H> {
    pub query: Query,
    /// Reported documents with their per-document hit
    pub hits: Vec<(String, H)>,
    pub skipped: Vec<SkippedDocument>,
}

/// Formats the listing lines for one reported document
pub trait ReportLines {
    fn lines(&self, document: &str) -> Vec<String>;
}

impl ReportLines for Absent {
    fn lines(&self, document: &str) -> Vec<String> {
        vec![format!("- {}", document)]
    }
}

impl ReportLines for Contexts {
    fn lines(&self, document: &str) -> Vec<String> {
        self.0.iter().map(|c| format!("- {}: {}", document, c)).collect()
    }
}

impl<H> SearchReport<H> {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            hits: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Names of the reported documents
    pub fn names(&self) -> Vec<&str> {
        self.hits.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl<H: ReportLines> SearchReport<H> {
    /// Write the report to `out`
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        if self.hits.is_empty() {
            writeln!(out, "The word '{}' was not found in any file.", self.query.raw())?;
            return Ok(());
        }

        writeln!(out, "The word '{}' was found in the following file(s):", self.query.raw())?;
        for (name, hit) in &self.hits {
            for line in hit.lines(name) {
                writeln!(out, "{}", line)?;
            }
        }
        Ok(())
    }

    /// Render into a string
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.render(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(word: &str) -> Query {
        Query::new(word).unwrap()
    }

    #[test]
    fn test_absent_listing() {
        let mut report = SearchReport::new(query("cat"));
        report.hits.push(("b.txt".to_string(), Absent));
        report.hits.push(("c.txt".to_string(), Absent));

        assert_eq!(
            report.to_text(),
            "The word 'cat' was found in the following file(s):\n- b.txt\n- c.txt\n"
        );
    }

    #[test]
    fn test_context_listing_one_line_per_context() {
        let mut report = SearchReport::new(query("cat"));
        report.hits.push((
            "a.txt".to_string(),
            Contexts(vec!["The Cat sat".to_string(), "a cat again".to_string()]),
        ));

        assert_eq!(
            report.to_text(),
            "The word 'cat' was found in the following file(s):\n- a.txt: The Cat sat\n- a.txt: a cat again\n"
        );
    }

    #[test]
    fn test_empty_report_prints_not_found() {
        let report: SearchReport<Contexts> = SearchReport::new(query("Cat"));
        assert_eq!(report.to_text(), "The word 'Cat' was not found in any file.\n");

        let report: SearchReport<Absent> = SearchReport::new(query("Cat"));
        assert_eq!(report.to_text(), "The word 'Cat' was not found in any file.\n");
    }

    #[test]
    fn test_skipped_documents_are_not_rendered() {
        let mut report: SearchReport<Absent> = SearchReport::new(query("cat"));
        report.skipped.push(SkippedDocument {
            name: "bad.txt".to_string(),
            reason: "invalid utf-8".to_string(),
        });

        assert!(!report.to_text().contains("bad.txt"));
    }
}
