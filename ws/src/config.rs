//! Configuration for wordsearch

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::corpus::LoadOptions;
use crate::search::{DecodePolicy, SearchOptions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Corpus searched by `absent` when no directory is given
    #[serde(default = "default_absent_corpus")]
    pub absent_corpus: PathBuf,

    /// Corpus searched by `context` when no directory is given
    #[serde(default = "default_context_corpus")]
    pub context_corpus: PathBuf,

    /// File extensions treated as text documents
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Tokens shown on each side of a match
    #[serde(default = "default_context_radius")]
    pub context_radius: usize,

    /// Visit documents in file name order
    #[serde(default)]
    pub sort: bool,

    #[serde(default)]
    pub on_decode_error: DecodePolicy,
}

fn default_absent_corpus() -> PathBuf {
    PathBuf::from(crate::DEFAULT_ABSENT_CORPUS)
}

fn default_context_corpus() -> PathBuf {
    PathBuf::from(crate::DEFAULT_CONTEXT_CORPUS)
}

fn default_extensions() -> Vec<String> {
    vec![crate::DEFAULT_EXTENSION.to_string()]
}

fn default_context_radius() -> usize {
    crate::DEFAULT_CONTEXT_RADIUS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            absent_corpus: default_absent_corpus(),
            context_corpus: default_context_corpus(),
            extensions: default_extensions(),
            context_radius: default_context_radius(),
            sort: false,
            on_decode_error: DecodePolicy::default(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(config_path)
                .context(format!("Failed to load config from {}", config_path.display()));
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("wordsearch").join("config.yml")),
            Some(PathBuf::from("wordsearch.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
            }
        }

        Ok(Config::default())
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Render the effective configuration as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Search options derived from this config
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            load: LoadOptions {
                extensions: self.extensions.clone(),
                sorted: self.sort,
            },
            on_decode_error: self.on_decode_error,
            context_radius: self.context_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        std::fs::write(&path, "context_radius: 5\non_decode_error: abort\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.context_radius, 5);
        assert_eq!(config.on_decode_error, DecodePolicy::Abort);
        assert_eq!(config.absent_corpus, PathBuf::from("corpus_norm"));
        assert_eq!(config.context_corpus, PathBuf::from("corpus_norm_lem"));
        assert_eq!(config.extensions, vec!["txt".to_string()]);
        assert!(!config.sort);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config {
            sort: true,
            ..Default::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("on_decode_error: skip"));
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_search_options_follow_config() {
        let config = Config {
            extensions: vec!["md".to_string()],
            context_radius: 2,
            sort: true,
            on_decode_error: DecodePolicy::Abort,
            ..Default::default()
        };
        let options = config.search_options();
        assert_eq!(options.load.extensions, vec!["md".to_string()]);
        assert!(options.load.sorted);
        assert_eq!(options.context_radius, 2);
        assert_eq!(options.on_decode_error, DecodePolicy::Abort);
    }

    #[test]
    #[serial]
    fn test_local_config_file_is_picked_up() {
        let temp = TempDir::new().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::fs::write(temp.path().join("wordsearch.yml"), "absent_corpus: texts\n").unwrap();

        std::env::set_current_dir(temp.path()).unwrap();
        let loaded = Config::load(None);
        std::env::set_current_dir(previous).unwrap();

        let config = loaded.unwrap();
        // A user-level config may exist on the machine running the tests
        let user_config = dirs::config_dir().map(|p| p.join("wordsearch").join("config.yml"));
        if !user_config.is_some_and(|p| p.exists()) {
            assert_eq!(config.absent_corpus, PathBuf::from("texts"));
        }
    }
}
