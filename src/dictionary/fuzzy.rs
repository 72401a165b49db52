//! Fuzzy best match under a bounded, insertion-biased divergence.
//!
//! Each step consumes exactly one target character, either by descending
//! into a child (free when the labels agree, 1 otherwise) or by skipping the
//! character while staying on the same node (cost 1). There is no move that
//! skips a trie character, so a stored word can only match targets at least
//! as long as itself. This is deliberately not Levenshtein distance.

use serde::{Deserialize, Serialize};

use crate::dictionary::alphabet::{char_for, slot_for};
use crate::dictionary::node::NodeId;
use crate::dictionary::trie::Trie;

/// The winning word of a fuzzy search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    /// The stored (case-folded) word.
    pub word: String,
    /// Divergence between the word and the target.
    pub divergence: usize,
    /// Frequency of the word.
    pub frequency: u32,
}

struct FuzzySearch<'a> {
    target: &'a [usize],
    max_divergence: usize,
    buffer: String,
    best: Option<FuzzyMatch>,
}

impl FuzzySearch<'_> {
    fn can_improve(&self, spent: usize) -> bool {
        if spent > self.max_divergence {
            return false;
        }
        // Ties never replace an earlier candidate.
        self.best.as_ref().is_none_or(|best| spent < best.divergence)
    }
}

impl Trie {
    /// The stored word with the smallest divergence from `target`, provided
    /// that divergence is at most `max_divergence`.
    ///
    /// With `max_divergence == 0` this is an exact lookup.
    pub fn fuzzy_match(&self, target: &str, max_divergence: usize) -> Option<String> {
        self.best_fuzzy_match(target, max_divergence).map(|found| found.word)
    }

    /// Like [`Trie::fuzzy_match`], also reporting divergence and frequency.
    pub fn best_fuzzy_match(&self, target: &str, max_divergence: usize) -> Option<FuzzyMatch> {
        if target.is_empty() {
            return None;
        }
        let slots: Vec<usize> = target.chars().map(slot_for).collect::<Option<_>>()?;

        let mut search = FuzzySearch {
            target: &slots,
            max_divergence,
            buffer: String::with_capacity(slots.len()),
            best: None,
        };
        self.fuzzy_step(NodeId::ROOT, 0, 0, &mut search);
        search.best
    }

    fn fuzzy_step(&self, id: NodeId, consumed: usize, spent: usize, search: &mut FuzzySearch<'_>) {
        if !search.can_improve(spent) {
            return;
        }
        let Some(node) = self.node(id) else {
            return;
        };

        if consumed == search.target.len() {
            if node.is_terminal() {
                search.best = Some(FuzzyMatch {
                    word: search.buffer.clone(),
                    divergence: spent,
                    frequency: node.frequency(),
                });
            }
            return;
        }

        let wanted = search.target[consumed];
        for (slot, child) in node.children() {
            let cost = usize::from(slot != wanted);
            search.buffer.push(char_for(slot));
            self.fuzzy_step(child, consumed + 1, spent + cost, search);
            search.buffer.pop();
        }

        // Skip this target character without moving in the trie.
        self.fuzzy_step(id, consumed + 1, spent + 1, search);
    }
}
