//! Word dictionaries with frequency counting.
//!
//! Two backends implement the shared [`WordDictionary`] contract:
//!
//! - [`Trie`](trie::Trie), a 27-way prefix tree that also supports best
//!   completion, fuzzy matching and node distance;
//! - [`HashDictionary`](hash_table::HashDictionary), a chained hash table
//!   with the plain insert/lookup/count operations only.

pub mod alphabet;
pub mod completion;
pub mod distance;
pub mod fuzzy;
pub mod hash_table;
pub mod node;
pub mod trie;

pub use fuzzy::FuzzyMatch;
pub use hash_table::{HashDictionary, HashEntry};
pub use node::{Node, NodeId};
pub use trie::Trie;

use crate::error::Result;

/// Operations common to every dictionary backend.
///
/// Words are case-folded and restricted to `[a-zA-Z']`. Frequencies count
/// insertions.
pub trait WordDictionary {
    /// Insert one occurrence; `Ok(true)` if the word was not stored before.
    fn insert(&mut self, word: &str) -> Result<bool>;

    /// Whether `word` is stored.
    fn contains(&self, word: &str) -> bool;

    /// Insertion count of `word`, 0 if absent.
    fn frequency(&self, word: &str) -> u32;

    /// Sum of all frequencies.
    fn word_count(&self) -> u64;

    /// Number of distinct words.
    fn distinct_words(&self) -> usize;

    /// Highest frequency, 0 when empty.
    fn most_common_frequency(&self) -> u32;

    /// Every stored word with its frequency, in the backend's natural order.
    fn entries(&self) -> Vec<(String, u32)>;

    /// The backend as a trie, for the prefix-based queries.
    fn as_trie(&self) -> Option<&Trie> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &[
        "the", "quick", "brown", "fox", "The", "lazy", "dog", "don't", "DOG", "the", "x-ray", "",
    ];

    fn fill(dict: &mut dyn WordDictionary) -> Vec<Option<bool>> {
        WORDS.iter().map(|word| dict.insert(word).ok()).collect()
    }

    #[test]
    fn test_backends_agree() {
        let mut trie = Trie::new();
        let mut table = HashDictionary::new();

        assert_eq!(fill(&mut trie), fill(&mut table));
        assert_eq!(trie.word_count(), WordDictionary::word_count(&table));
        assert_eq!(WordDictionary::distinct_words(&trie), table.distinct_words());
        assert_eq!(
            WordDictionary::most_common_frequency(&trie),
            table.most_common_frequency()
        );
        for word in ["the", "dog", "don't", "cat", "x-ray", "th"] {
            assert_eq!(trie.contains(word), table.contains(word), "{word}");
            assert_eq!(
                WordDictionary::frequency(&trie, word),
                WordDictionary::frequency(&table, word),
                "{word}"
            );
        }

        let mut from_trie = trie.entries();
        let mut from_table = WordDictionary::entries(&table);
        from_trie.sort();
        from_table.sort();
        assert_eq!(from_trie, from_table);
    }

    #[test]
    fn test_only_trie_exposes_prefix_queries() {
        let trie = Trie::new();
        let table = HashDictionary::new();
        assert!(trie.as_trie().is_some());
        assert!(table.as_trie().is_none());
    }
}
