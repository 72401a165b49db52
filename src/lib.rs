//! # wordtrie
//!
//! A word dictionary with frequency counting, built on a 27-way trie.
//!
//! ## Features
//!
//! - Case-insensitive words over `a`-`z` and the apostrophe
//! - Exact lookup and per-word insertion counts
//! - Best completion of a prefix by frequency
//! - Fuzzy best match under a bounded divergence budget
//! - Tree distance between two stored words
//! - A chained hash-table backend with the same insert/lookup contract
//! - Word-list loading and `"<word> <frequency>"` persistence
//!
//! ```
//! use wordtrie::dictionary::Trie;
//!
//! let mut trie = Trie::new();
//! for word in ["car", "car", "cart", "part"] {
//!     trie.insert(word).unwrap();
//! }
//!
//! assert_eq!(trie.best_completion("ca"), "r");
//! assert_eq!(trie.fuzzy_match("cxrt", 1), Some("cart".to_string()));
//! assert_eq!(trie.distance(trie.lookup("car"), trie.lookup("part")), 7);
//! ```

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod wordlist;

pub mod prelude {
    pub use crate::config::{Backend, DictionaryConfig};
    pub use crate::dictionary::{FuzzyMatch, HashDictionary, NodeId, Trie, WordDictionary};
    pub use crate::error::{Result, WordTrieError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
