//! Configuration for building and querying dictionaries.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::dictionary::hash_table::DEFAULT_BUCKETS;
use crate::dictionary::{HashDictionary, Trie, WordDictionary};
use crate::error::{Result, WordTrieError};

/// Which dictionary implementation to build.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// 27-way prefix tree.
    Trie,
    /// Chained hash table.
    Hash,
}

/// Dictionary configuration, usually read from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Backend used by commands that work with either implementation.
    pub backend: Backend,

    /// Default divergence budget for fuzzy matching.
    pub max_divergence: usize,

    /// Bucket count for the hash backend.
    pub hash_buckets: usize,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            backend: Backend::Trie,
            max_divergence: 2,
            hash_buckets: DEFAULT_BUCKETS,
        }
    }
}

impl DictionaryConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: DictionaryConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.hash_buckets == 0 {
            return Err(WordTrieError::config("hash_buckets must be greater than 0"));
        }
        Ok(())
    }

    /// Build an empty dictionary for the configured backend.
    pub fn build_dictionary(&self) -> Result<Box<dyn WordDictionary>> {
        self.validate()?;
        Ok(match self.backend {
            Backend::Trie => Box::new(Trie::new()),
            Backend::Hash => Box::new(HashDictionary::with_buckets(self.hash_buckets)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = DictionaryConfig::default();
        assert_eq!(config.backend, Backend::Trie);
        assert_eq!(config.max_divergence, 2);
        assert_eq!(config.hash_buckets, 10007);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = DictionaryConfig::from_json(r#"{"backend": "hash"}"#).unwrap();
        assert_eq!(config.backend, Backend::Hash);
        assert_eq!(config.max_divergence, 2);
        assert_eq!(config.hash_buckets, 10007);

        let config = DictionaryConfig::from_json("{}").unwrap();
        assert_eq!(config, DictionaryConfig::default());
    }

    #[test]
    fn test_zero_buckets_rejected() {
        let result = DictionaryConfig::from_json(r#"{"hash_buckets": 0}"#);
        assert!(matches!(result, Err(WordTrieError::Config(_))));
    }

    #[test]
    fn test_malformed_json() {
        let result = DictionaryConfig::from_json(r#"{"backend": "btree"}"#);
        assert!(matches!(result, Err(WordTrieError::Json(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"max_divergence": 3, "hash_buckets": 101}}"#).unwrap();
        file.flush().unwrap();

        let config = DictionaryConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_divergence, 3);
        assert_eq!(config.hash_buckets, 101);
    }

    #[test]
    fn test_build_dictionary() {
        let config = DictionaryConfig {
            backend: Backend::Hash,
            ..Default::default()
        };
        let mut dict = config.build_dictionary().unwrap();
        dict.insert("word").unwrap();
        assert!(dict.contains("word"));
        assert!(dict.as_trie().is_none());

        let dict = DictionaryConfig::default().build_dictionary().unwrap();
        assert!(dict.as_trie().is_some());
    }
}
