//! Makai Word Counter Library
//!
//! This library contains the core components of the Makai word counter: the
//! Helu Counting Trie, the tokenizer and report writer around it, and the
//! configuration and error handling layers. The library is designed to be
//! used by the binary crate, but can also be used as a dependency by other
//! projects.
//!
//! # Architecture
//!
//! The Makai word counter is designed with the following principles in mind:
//! - Strict component boundaries: the trie never performs I/O
//! - Total core operations with no recoverable error conditions
//! - Exclusive ownership throughout the trie, no shared state
//! - Comprehensive error handling at the program boundary

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;
pub mod text;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Makai word counter.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function
pub fn init() -> error::MakaiResult<()> {
    // Initialize default configuration
    config::init_default_config()?;

    Ok(())
}
