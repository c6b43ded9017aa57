//! Prefix tree over words.
//!
//! Each node owns its children (no back-pointers, no sharing across
//! tries) and carries an end-of-word flag, which is what separates
//! "is a prefix of some inserted word" from "is itself an inserted
//! word". Children are keyed by char in a `BTreeMap` so the serialized
//! structural dump is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single trie node: char-keyed children plus the end-of-word flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    #[serde(default)]
    pub children: BTreeMap<char, TrieNode>,

    #[serde(default)]
    pub end_of_word: bool,
}

/// A prefix tree supporting word insertion and exact-word lookup.
///
/// Both operations are O(word length), independent of how many words
/// the trie holds. There is no per-word deletion; a trie is built,
/// queried, and discarded (or serialized) as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Create an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, creating missing nodes along its path.
    ///
    /// Re-inserting an identical word is a no-op. Inserting the empty
    /// word marks the root itself as a word terminator.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.end_of_word = true;
    }

    /// Exact-word lookup.
    ///
    /// Returns true only if the full path exists and its terminal node
    /// is flagged end-of-word; a mere prefix of an inserted word does
    /// not count.
    pub fn search(&self, word: &str) -> bool {
        let mut node = &self.root;
        for ch in word.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.end_of_word
    }

    /// Number of distinct words held
    pub fn word_count(&self) -> usize {
        fn count(node: &TrieNode) -> usize {
            usize::from(node.end_of_word) + node.children.values().map(count).sum::<usize>()
        }
        count(&self.root)
    }

    /// True if no word has been inserted
    pub fn is_empty(&self) -> bool {
        !self.root.end_of_word && self.root.children.is_empty()
    }
}
