//! Corpus loading
//!
//! A corpus is a flat directory of text documents. Entries are enumerated
//! once when the corpus is opened; each document is read and decoded only
//! when it is visited, and its file handle is closed before the next one.

use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::SearchError;

/// Options controlling which directory entries form the corpus
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// File name suffixes (without the dot) that mark a text document
    pub extensions: Vec<String>,
    /// Sort documents by file name instead of using directory order
    pub sorted: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            extensions: vec![crate::DEFAULT_EXTENSION.to_string()],
            sorted: false,
        }
    }
}

/// A single document, decoded as UTF-8
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name, unique within the corpus directory
    pub name: String,
    /// Full decoded content
    pub content: String,
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    path: PathBuf,
}

/// The ordered set of documents under a directory
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
    entries: Vec<Entry>,
}

impl Corpus {
    /// Enumerate the documents in `root`
    pub fn open(root: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, SearchError> {
        let root = root.as_ref().to_path_buf();

        let meta = fs::metadata(&root).map_err(|e| SearchError::unavailable(&root, e))?;
        if !meta.is_dir() {
            return Err(SearchError::unavailable(
                &root,
                io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
            ));
        }

        let suffixes: Vec<String> = options.extensions.iter().map(|e| format!(".{}", e)).collect();

        let mut walker = WalkDir::new(&root).min_depth(1).max_depth(1).follow_links(true);
        if options.sorted {
            walker = walker.sort_by_file_name();
        }

        let mut entries = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("failed to read directory"));
                    return Err(SearchError::unavailable(&root, source));
                }
                Err(e) => {
                    warn!("Ignoring unreadable directory entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            if suffixes.iter().any(|s| name.ends_with(s.as_str())) {
                entries.push(Entry {
                    name,
                    path: entry.into_path(),
                });
            }
        }

        debug!("Opened corpus {} with {} documents", root.display(), entries.len());
        Ok(Self { root, entries })
    }

    /// Directory the corpus was opened from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Document names in visiting order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read and decode every document in order, one at a time
    pub fn documents(&self) -> impl Iterator<Item = Result<Document, SearchError>> + '_ {
        self.entries.iter().map(load)
    }
}

fn load(entry: &Entry) -> Result<Document, SearchError> {
    let bytes = fs::read(&entry.path).map_err(|e| SearchError::Decode {
        file: entry.name.clone(),
        reason: e.to_string(),
    })?;

    let content = String::from_utf8(bytes).map_err(|e| SearchError::Decode {
        file: entry.name.clone(),
        reason: e.to_string(),
    })?;

    debug!("Loaded {} ({} bytes)", entry.name, content.len());
    Ok(Document {
        name: entry.name.clone(),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_only_matching_extensions_are_included() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "alpha").unwrap();
        fs::write(temp.path().join("b.md"), "beta").unwrap();
        fs::write(temp.path().join("c.TXT"), "gamma").unwrap();
        fs::create_dir(temp.path().join("dir.txt")).unwrap();

        let corpus = Corpus::open(temp.path(), &LoadOptions::default()).unwrap();
        let names: Vec<&str> = corpus.names().collect();
        assert_eq!(names, vec!["a.txt"]);
    }

    #[test]
    fn test_nested_documents_are_not_visited() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub").join("inner.txt"), "hidden").unwrap();

        let corpus = Corpus::open(temp.path(), &LoadOptions::default()).unwrap();
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_sorted_enumeration() {
        let temp = TempDir::new().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            fs::write(temp.path().join(name), name).unwrap();
        }

        let options = LoadOptions {
            sorted: true,
            ..Default::default()
        };
        let corpus = Corpus::open(temp.path(), &options).unwrap();
        let names: Vec<&str> = corpus.names().collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_custom_extensions() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "alpha").unwrap();
        fs::write(temp.path().join("b.md"), "beta").unwrap();

        let options = LoadOptions {
            extensions: vec!["txt".to_string(), "md".to_string()],
            sorted: true,
        };
        let corpus = Corpus::open(temp.path(), &options).unwrap();
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn test_missing_directory_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let result = Corpus::open(temp.path().join("missing"), &LoadOptions::default());
        assert!(matches!(result, Err(SearchError::CorpusUnavailable { .. })));
    }

    #[test]
    fn test_file_as_root_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "alpha").unwrap();

        let result = Corpus::open(&file, &LoadOptions::default());
        assert!(matches!(result, Err(SearchError::CorpusUnavailable { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bad.txt"), [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        let corpus = Corpus::open(temp.path(), &LoadOptions::default()).unwrap();
        let docs: Vec<_> = corpus.documents().collect();
        assert_eq!(docs.len(), 1);
        match &docs[0] {
            Err(SearchError::Decode { file, .. }) => assert_eq!(file, "bad.txt"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_documents_carry_content() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "The Cat sat.").unwrap();

        let corpus = Corpus::open(temp.path(), &LoadOptions::default()).unwrap();
        let doc = corpus.documents().next().unwrap().unwrap();
        assert_eq!(doc.name, "a.txt");
        assert_eq!(doc.content, "The Cat sat.");
    }
}
