//! Data structures for the Makai word counter.
//!
//! This module contains the specialized data structures backing the word
//! counter. All implementations adhere to the strict project requirements:
//! - No unsafe code
//! - Exclusive-ownership trees, no shared or back references
//! - Total operations over every finite input word

pub mod helu_trie;

// Re-export common data structures
pub use helu_trie::HeluTrie;
