//! The 27-symbol alphabet shared by every dictionary backend.
//!
//! Letters `a`-`z` occupy slots 0-25 and the apostrophe occupies slot 26.
//! Upper-case ASCII letters fold to their lower-case slot. Nothing else is
//! accepted.

use crate::error::{Result, WordTrieError};

/// Number of child slots per trie node.
pub const ALPHABET_SIZE: usize = 27;

/// Slot used for the apostrophe.
pub const APOSTROPHE_SLOT: usize = 26;

/// Map a character to its slot, folding ASCII case.
#[inline]
pub fn slot_for(ch: char) -> Option<usize> {
    match ch {
        'a'..='z' => Some(ch as usize - 'a' as usize),
        'A'..='Z' => Some(ch as usize - 'A' as usize),
        '\'' => Some(APOSTROPHE_SLOT),
        _ => None,
    }
}

/// Map a slot back to the (lower-case) character it stands for.
///
/// # Panics
///
/// Panics if `slot >= ALPHABET_SIZE`.
#[inline]
pub fn char_for(slot: usize) -> char {
    assert!(slot < ALPHABET_SIZE, "slot {slot} is outside the alphabet");
    if slot == APOSTROPHE_SLOT {
        '\''
    } else {
        (b'a' + slot as u8) as char
    }
}

/// Validate `word` and return its case-folded form.
pub fn fold_word(word: &str) -> Result<String> {
    if word.is_empty() {
        return Err(WordTrieError::invalid_input("word must not be empty"));
    }

    let mut folded = String::new();
    folded
        .try_reserve(word.len())
        .map_err(|e| WordTrieError::resource_exhausted(format!("word buffer: {e}")))?;

    for (position, ch) in word.chars().enumerate() {
        let slot = slot_for(ch).ok_or(WordTrieError::invalid_character(ch, position))?;
        folded.push(char_for(slot));
    }

    Ok(folded)
}
