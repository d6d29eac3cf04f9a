//! Helu Counting Trie implementation.
//!
//! This module provides a path-compressed trie that counts occurrences of
//! the words inserted into it. Each node stores a whole character run instead
//! of a single character, and a leaf is split into a branch in place only
//! when a newly inserted word diverges partway through a stored suffix.
//!
//! Enumeration reports every distinct word with its total count in strict
//! descending lexicographic order: at a shared prefix the longer words are
//! reported before the prefix word itself. This ordering is part of the
//! public contract and is relied upon by the report writer.

mod node;

use node::TrieNode;

/// Helu Counting Trie is a path-compressed trie mapping each distinct
/// inserted word to the number of times it has been inserted.
///
/// Key features:
/// * Radix-style path compression: one node per divergence, not per character
/// * In-place leaf splitting that preserves the counts already recorded
/// * Ordered enumeration without an intermediate sort
/// * Total operations: every finite string, including the empty string, is a
///   valid word and insertion cannot fail
#[derive(Debug, Default)]
pub struct HeluTrie {
    /// Root node; absent until the first insertion
    root: Option<TrieNode>,
}

impl HeluTrie {
    /// Creates a new empty `HeluTrie`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Records one occurrence of `word`.
    ///
    /// The first insertion ever creates the root as a leaf holding the
    /// entire word; later insertions descend the trie, splitting stored
    /// suffixes wherever the new word diverges from them.
    pub fn insert<W: AsRef<str>>(&mut self, word: W) {
        let word = word.as_ref();
        match &mut self.root {
            Some(root) => root.push_suffix(word),
            None => self.root = Some(TrieNode::leaf(word)),
        }
    }

    /// Returns every distinct inserted word together with its total count,
    /// in strict descending lexicographic order of the full word.
    pub fn enumerate(&self) -> Vec<(String, u64)> {
        let mut entries = Vec::new();
        if let Some(root) = &self.root {
            let mut prefix = String::new();
            root.traverse(&mut prefix, &mut |word, count| {
                entries.push((word.to_owned(), count));
            });
        }
        entries
    }

    /// Returns the number of distinct words in the trie.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        let mut distinct = 0;
        if let Some(root) = &self.root {
            let mut prefix = String::new();
            root.traverse(&mut prefix, &mut |_, _| distinct += 1);
        }
        distinct
    }

    /// Returns `true` if nothing has ever been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}
