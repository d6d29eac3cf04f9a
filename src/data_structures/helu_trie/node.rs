//! Node implementation for the Helu Counting Trie.
//!
//! This module provides the TrieNode structure used in the Helu Trie
//! implementation. A node is either a leaf, storing the unconsumed remainder
//! of one or more identical words together with their occurrence count, or a
//! branch, storing single-character transitions to child nodes. Both variants
//! additionally carry an end marker for words that terminate exactly at the
//! node's position in the trie.

use std::mem;

/// A node in the Helu Counting Trie.
///
/// The leaf/branch duality is expressed as an explicit tagged variant rather
/// than an overloaded count field, so every operation has to state which mode
/// it expects. `end_count` applies to both variants: a word may be a strict
/// prefix of other inserted words.
#[derive(Debug)]
pub(crate) struct TrieNode {
    /// Occurrences of words that end exactly at this node's position
    pub(crate) end_count: u64,

    /// Leaf or branch payload
    pub(crate) kind: NodeKind,
}

/// Payload of a trie node.
#[derive(Debug)]
pub(crate) enum NodeKind {
    /// Literal unconsumed suffix shared by `count` identical words.
    /// `count` is always positive.
    Leaf { suffix: String, count: u64 },

    /// Transitions to child nodes, sorted ascending by selector character.
    /// The selector is consumed on descent and is not repeated inside the
    /// child's own suffix.
    Branch { children: Vec<(char, TrieNode)> },
}

impl TrieNode {
    /// Creates a leaf holding `suffix` with a count of one.
    pub(crate) fn leaf(suffix: &str) -> Self {
        Self {
            end_count: 0,
            kind: NodeKind::Leaf {
                suffix: suffix.to_owned(),
                count: 1,
            },
        }
    }

    /// Records one occurrence of the remaining word `rest` below this node,
    /// splitting leaves in place wherever the stored path diverges.
    pub(crate) fn push_suffix(&mut self, rest: &str) {
        let mut chars = rest.chars();
        let first = match chars.next() {
            Some(first) => first,
            None => {
                // The whole word has been consumed on the way here.
                match &mut self.kind {
                    NodeKind::Leaf { suffix, count } if suffix.is_empty() => *count += 1,
                    _ => self.end_count += 1,
                }
                return;
            }
        };
        let tail = chars.as_str();

        match &mut self.kind {
            NodeKind::Leaf { suffix, count } => {
                if suffix.is_empty() {
                    // Words already recorded here ended exactly at this
                    // position; migrate them to the end marker and reuse the
                    // leaf for the longer word.
                    self.end_count += *count;
                    *count = 1;
                    *suffix = rest.to_owned();
                } else if suffix.as_str() == rest {
                    *count += 1;
                } else {
                    self.split_leaf();
                    self.push_suffix(rest);
                }
            }
            NodeKind::Branch { children } => {
                match children.binary_search_by(|(selector, _)| selector.cmp(&first)) {
                    Ok(idx) => children[idx].1.push_suffix(tail),
                    Err(idx) => children.insert(idx, (first, TrieNode::leaf(tail))),
                }
            }
        }
    }

    /// Converts a leaf into a branch with a single child reached via the
    /// leaf's first suffix character. The child leaf holds the remainder of
    /// the suffix and inherits the occurrence count; the end marker stays on
    /// this node.
    fn split_leaf(&mut self) {
        debug_assert!(
            matches!(&self.kind, NodeKind::Leaf { suffix, .. } if !suffix.is_empty()),
            "split is only performed on leaves with a non-empty suffix"
        );

        let old = mem::replace(
            &mut self.kind,
            NodeKind::Branch {
                children: Vec::with_capacity(1),
            },
        );
        if let NodeKind::Leaf { suffix, count } = old {
            let mut chars = suffix.chars();
            if let Some(selector) = chars.next() {
                let child = Self {
                    end_count: 0,
                    kind: NodeKind::Leaf {
                        suffix: chars.as_str().to_owned(),
                        count,
                    },
                };
                if let NodeKind::Branch { children } = &mut self.kind {
                    children.push((selector, child));
                }
            }
        }
    }

    /// Depth-first traversal emitting `(word, count)` pairs in descending
    /// lexicographic order of the full word.
    ///
    /// `prefix` accumulates the characters consumed on the way down and is
    /// restored before returning. A positive end marker is emitted after all
    /// children (or after the leaf's own word), so longer extensions of a
    /// prefix are always reported before the prefix word itself.
    pub(crate) fn traverse<F>(&self, prefix: &mut String, emit: &mut F)
    where
        F: FnMut(&str, u64),
    {
        match &self.kind {
            NodeKind::Leaf { suffix, count } => {
                let base = prefix.len();
                prefix.push_str(suffix);
                emit(prefix.as_str(), *count);
                prefix.truncate(base);
            }
            NodeKind::Branch { children } => {
                for (selector, child) in children.iter().rev() {
                    prefix.push(*selector);
                    child.traverse(prefix, emit);
                    prefix.pop();
                }
            }
        }
        if self.end_count > 0 {
            emit(prefix.as_str(), self.end_count);
        }
    }
}
