//! Chained hash table keyed by case-folded word.
//!
//! Offers the same insert/lookup/count contract as the trie, but keeps no
//! prefix structure, so it cannot complete, fuzzy-match, or measure node
//! distance.

use crate::dictionary::WordDictionary;
use crate::dictionary::alphabet::fold_word;
use crate::error::{Result, WordTrieError};

/// Default number of buckets (a prime).
pub const DEFAULT_BUCKETS: usize = 10007;

/// One stored word in a collision chain.
#[derive(Debug)]
pub struct HashEntry {
    word: String,
    frequency: u32,
    next: Option<Box<HashEntry>>,
}

impl HashEntry {
    /// The case-folded word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// How many times the word was inserted.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }
}

/// Polynomial rolling hash (`h * 31 + byte`) with 32-bit wrap-around.
fn bucket_index(word: &str, buckets: usize) -> usize {
    let hash = word
        .bytes()
        .fold(0u32, |hash, byte| hash.wrapping_mul(31).wrapping_add(u32::from(byte)));
    hash as usize % buckets
}

/// A fixed-size bucket array with a singly linked chain per bucket.
#[derive(Debug)]
pub struct HashDictionary {
    buckets: Vec<Option<Box<HashEntry>>>,
}

impl HashDictionary {
    /// Create an empty dictionary with [`DEFAULT_BUCKETS`] buckets.
    pub fn new() -> Self {
        let mut buckets = Vec::with_capacity(DEFAULT_BUCKETS);
        buckets.resize_with(DEFAULT_BUCKETS, || None);
        HashDictionary { buckets }
    }

    /// Create an empty dictionary with `buckets` buckets.
    pub fn with_buckets(buckets: usize) -> Result<Self> {
        if buckets == 0 {
            return Err(WordTrieError::invalid_input("bucket count must be positive"));
        }

        let mut table = Vec::new();
        table
            .try_reserve_exact(buckets)
            .map_err(|e| WordTrieError::resource_exhausted(format!("bucket array: {e}")))?;
        table.resize_with(buckets, || None);
        Ok(HashDictionary { buckets: table })
    }

    /// Number of buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Insert one occurrence of `word`; `Ok(true)` if it was not stored yet.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let folded = fold_word(word)?;
        let index = bucket_index(&folded, self.buckets.len());

        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.word == folded {
                entry.frequency = entry.frequency.saturating_add(1);
                return Ok(false);
            }
            cursor = entry.next.as_deref_mut();
        }

        let head = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(HashEntry {
            word: folded,
            frequency: 1,
            next: head,
        }));
        Ok(true)
    }

    /// The entry for `word`, if stored.
    pub fn lookup(&self, word: &str) -> Option<&HashEntry> {
        let folded = fold_word(word).ok()?;
        let index = bucket_index(&folded, self.buckets.len());
        self.chain(index).find(|entry| entry.word == folded)
    }

    fn chain(&self, index: usize) -> impl Iterator<Item = &HashEntry> + '_ {
        std::iter::successors(self.buckets[index].as_deref(), |entry| {
            entry.next.as_deref()
        })
    }

    fn iter(&self) -> impl Iterator<Item = &HashEntry> + '_ {
        (0..self.buckets.len()).flat_map(move |index| self.chain(index))
    }

    /// Total number of insertions across all stored words.
    pub fn word_count(&self) -> u64 {
        self.iter().map(|entry| u64::from(entry.frequency)).sum()
    }

    /// Number of distinct stored words.
    pub fn distinct_words(&self) -> usize {
        self.iter().count()
    }

    /// Highest frequency of any stored word; 0 when empty.
    pub fn most_common_frequency(&self) -> u32 {
        self.iter().map(|entry| entry.frequency).max().unwrap_or(0)
    }

    /// Length of the longest collision chain.
    pub fn longest_chain(&self) -> usize {
        (0..self.buckets.len())
            .map(|index| self.chain(index).count())
            .max()
            .unwrap_or(0)
    }
}

impl Default for HashDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HashDictionary {
    fn drop(&mut self) {
        // Unlink chains iteratively so long chains cannot overflow the stack.
        for bucket in &mut self.buckets {
            let mut cursor = bucket.take();
            while let Some(mut entry) = cursor {
                cursor = entry.next.take();
            }
        }
    }
}

impl WordDictionary for HashDictionary {
    fn insert(&mut self, word: &str) -> Result<bool> {
        HashDictionary::insert(self, word)
    }

    fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    fn frequency(&self, word: &str) -> u32 {
        self.lookup(word).map_or(0, HashEntry::frequency)
    }

    fn word_count(&self) -> u64 {
        HashDictionary::word_count(self)
    }

    fn distinct_words(&self) -> usize {
        HashDictionary::distinct_words(self)
    }

    fn most_common_frequency(&self) -> u32 {
        HashDictionary::most_common_frequency(self)
    }

    fn entries(&self) -> Vec<(String, u32)> {
        self.iter()
            .map(|entry| (entry.word.clone(), entry.frequency))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_polynomial() {
        // 'a' = 97, 'b' = 98: 97 * 31 + 98
        assert_eq!(bucket_index("ab", DEFAULT_BUCKETS), 3105);
        assert_eq!(bucket_index("ab", 7), 3105 % 7);
    }

    #[test]
    fn test_basic_operations() {
        let mut dict = HashDictionary::new();
        assert_eq!(dict.bucket_count(), DEFAULT_BUCKETS);
        assert!(dict.lookup("hello").is_none());

        assert!(dict.insert("hello").unwrap());
        assert!(!dict.insert("HELLO").unwrap());
        assert!(dict.insert("world").unwrap());

        let entry = dict.lookup("Hello").unwrap();
        assert_eq!(entry.word(), "hello");
        assert_eq!(entry.frequency(), 2);
        assert_eq!(dict.word_count(), 3);
        assert_eq!(dict.distinct_words(), 2);
        assert_eq!(dict.most_common_frequency(), 2);
    }

    #[test]
    fn test_rejects_invalid_words() {
        let mut dict = HashDictionary::new();
        assert!(matches!(dict.insert(""), Err(WordTrieError::InvalidInput(_))));
        assert!(matches!(
            dict.insert("x1"),
            Err(WordTrieError::InvalidCharacter { character: '1', .. })
        ));
        assert!(dict.lookup("x1").is_none());
        assert!(dict.lookup("").is_none());
        assert_eq!(dict.word_count(), 0);
        assert_eq!(dict.most_common_frequency(), 0);
    }

    #[test]
    fn test_collisions_share_a_chain() {
        let mut dict = HashDictionary::with_buckets(1).unwrap();
        for word in ["alpha", "beta", "gamma", "beta"] {
            dict.insert(word).unwrap();
        }

        assert_eq!(dict.longest_chain(), 3);
        assert_eq!(dict.frequency("beta"), 2);
        assert_eq!(dict.frequency("gamma"), 1);
        assert_eq!(dict.frequency("delta"), 0);
        // Newest entries sit at the head of the chain.
        let words: Vec<String> = dict.entries().into_iter().map(|(w, _)| w).collect();
        assert_eq!(words, vec!["gamma", "beta", "alpha"]);
    }

    #[test]
    fn test_zero_buckets_rejected() {
        assert!(matches!(
            HashDictionary::with_buckets(0),
            Err(WordTrieError::InvalidInput(_))
        ));
    }
}
