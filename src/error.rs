//! Error types for the wordtrie library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordTrieError`] enum. Queries that simply find nothing are not errors:
//! they return `None`, an empty string, or zero.
//!
//! # Examples
//!
//! ```
//! use wordtrie::error::{Result, WordTrieError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordTrieError::invalid_input("empty word"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordtrie operations.
#[derive(Error, Debug)]
pub enum WordTrieError {
    /// I/O errors while loading or saving word lists and configuration.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Empty words, zero-sized tables and other unusable arguments.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A character outside `[a-zA-Z']`.
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Zero-based character position inside the word.
        position: usize,
    },

    /// Allocation of a node or key failed.
    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    /// A malformed line in a frequency file.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Invalid configuration values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordTrieError.
pub type Result<T> = std::result::Result<T, WordTrieError>;

impl WordTrieError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        WordTrieError::InvalidInput(msg.into())
    }

    /// Create a new invalid character error.
    pub fn invalid_character(character: char, position: usize) -> Self {
        WordTrieError::InvalidCharacter {
            character,
            position,
        }
    }

    /// Create a new resource exhausted error.
    pub fn resource_exhausted<S: Into<String>>(msg: S) -> Self {
        WordTrieError::ResourceExhausted(msg.into())
    }

    /// Create a new parse error for a one-based line number.
    pub fn parse<S: Into<String>>(line: usize, msg: S) -> Self {
        WordTrieError::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordTrieError::Config(msg.into())
    }

    /// Whether this error only rejects a single word and leaves the
    /// dictionary usable for the next one.
    pub fn is_word_rejection(&self) -> bool {
        matches!(
            self,
            WordTrieError::InvalidInput(_) | WordTrieError::InvalidCharacter { .. }
        )
    }
}
