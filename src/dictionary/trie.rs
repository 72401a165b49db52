//! Arena-backed 27-way trie with per-word frequency counts.
//!
//! Every node lives in a `Vec<Node>` owned by the [`Trie`]. Children are
//! referenced by [`NodeId`] and each node records the id of the node that
//! created it, which lets [`Trie::distance`] walk upwards without any shared
//! ownership. Nodes are never removed, so ids stay valid for the lifetime of
//! the trie.

use log::trace;

use crate::dictionary::WordDictionary;
use crate::dictionary::alphabet::{char_for, slot_for};
use crate::dictionary::node::{Node, NodeId};
use crate::error::{Result, WordTrieError};

/// A word dictionary organised as a prefix tree.
///
/// # Examples
///
/// ```
/// use wordtrie::dictionary::trie::Trie;
///
/// let mut trie = Trie::new();
/// assert!(trie.insert("car").unwrap());
/// assert!(!trie.insert("Car").unwrap());
/// trie.insert("cart").unwrap();
///
/// assert!(trie.lookup("car").is_some());
/// assert!(trie.lookup("ca").is_none());
/// assert_eq!(trie.word_count(), 3);
/// assert_eq!(trie.best_completion("ca"), "r");
/// ```
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
}

impl Trie {
    /// Create a trie holding only the root node.
    pub fn new() -> Self {
        Trie {
            nodes: vec![Node::root()],
        }
    }

    /// Insert one occurrence of `word`.
    ///
    /// Returns `Ok(true)` when the word was not stored before and `Ok(false)`
    /// when an existing word had its frequency incremented. An invalid
    /// character aborts the insert; nodes created for the characters before
    /// it are kept as empty, non-terminal nodes.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        if word.is_empty() {
            return Err(WordTrieError::invalid_input("word must not be empty"));
        }

        let mut current = NodeId::ROOT;
        for (position, ch) in word.chars().enumerate() {
            let slot = slot_for(ch).ok_or(WordTrieError::invalid_character(ch, position))?;
            current = match self.nodes[current.0].children[slot] {
                Some(child) => child,
                None => self.allocate_child(current, slot)?,
            };
        }

        let added = self.nodes[current.0].record_occurrence();
        trace!(
            "insert {word:?}: {} (frequency {})",
            if added { "added" } else { "already present" },
            self.nodes[current.0].frequency
        );
        Ok(added)
    }

    fn allocate_child(&mut self, parent: NodeId, slot: usize) -> Result<NodeId> {
        self.nodes
            .try_reserve(1)
            .map_err(|e| WordTrieError::resource_exhausted(format!("trie node: {e}")))?;

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::with_parent(parent));
        self.nodes[parent.0].children[slot] = Some(id);
        Ok(id)
    }

    /// Find the terminal node for `word`.
    ///
    /// Paths that exist only as a prefix of longer words are not found.
    pub fn lookup(&self, word: &str) -> Option<NodeId> {
        if word.is_empty() {
            return None;
        }
        self.walk(word).filter(|id| self.nodes[id.0].terminal)
    }

    /// Resolve a handle produced by this trie.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Frequency of `word`, or 0 if it is not stored.
    pub fn frequency(&self, word: &str) -> u32 {
        self.lookup(word).map_or(0, |id| self.nodes[id.0].frequency)
    }

    /// Total number of insertions across all stored words.
    pub fn word_count(&self) -> u64 {
        self.nodes
            .iter()
            .filter(|node| node.terminal)
            .map(|node| u64::from(node.frequency))
            .sum()
    }

    /// Number of distinct stored words.
    pub fn distinct_words(&self) -> usize {
        self.nodes.iter().filter(|node| node.terminal).count()
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Highest frequency of any stored word; 0 for an empty trie.
    pub fn most_common_frequency(&self) -> u32 {
        self.nodes
            .iter()
            .filter(|node| node.terminal)
            .map(|node| node.frequency)
            .max()
            .unwrap_or(0)
    }

    /// Every stored word with its frequency, depth-first in slot order.
    pub fn entries(&self) -> Vec<(String, u32)> {
        let mut entries = Vec::with_capacity(self.distinct_words());
        let mut buffer = String::new();
        self.collect_words(NodeId::ROOT, &mut buffer, &mut entries);
        entries
    }

    /// Stored words starting with `prefix` (the prefix itself included when
    /// it is a word), depth-first in slot order.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<(String, u32)> {
        let Some(start) = self.walk(prefix) else {
            return Vec::new();
        };

        let mut words = Vec::new();
        let mut buffer: String = prefix.to_ascii_lowercase();
        self.collect_words(start, &mut buffer, &mut words);
        words
    }

    fn collect_words(&self, id: NodeId, buffer: &mut String, out: &mut Vec<(String, u32)>) {
        let node = &self.nodes[id.0];
        if node.terminal {
            out.push((buffer.clone(), node.frequency));
        }
        for (slot, child) in node.children() {
            buffer.push(char_for(slot));
            self.collect_words(child, buffer, out);
            buffer.pop();
        }
    }

    /// Follow `path` from the root. The empty path addresses the root.
    pub(crate) fn walk(&self, path: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for ch in path.chars() {
            let slot = slot_for(ch)?;
            current = self.nodes[current.0].children[slot]?;
        }
        Some(current)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl WordDictionary for Trie {
    fn insert(&mut self, word: &str) -> Result<bool> {
        Trie::insert(self, word)
    }

    fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    fn frequency(&self, word: &str) -> u32 {
        Trie::frequency(self, word)
    }

    fn word_count(&self) -> u64 {
        Trie::word_count(self)
    }

    fn distinct_words(&self) -> usize {
        Trie::distinct_words(self)
    }

    fn most_common_frequency(&self) -> u32 {
        Trie::most_common_frequency(self)
    }

    fn entries(&self) -> Vec<(String, u32)> {
        Trie::entries(self)
    }

    fn as_trie(&self) -> Option<&Trie> {
        Some(self)
    }
}
