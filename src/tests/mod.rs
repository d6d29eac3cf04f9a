//! Test modules for the Makai word counter.
//!
//! This module contains cross-component tests that do not belong to a single
//! data structure: configuration loading and validation. Unit tests for the
//! Helu Counting Trie live next to the implementation in
//! `data_structures::helu_trie`.

pub mod config_tests;
