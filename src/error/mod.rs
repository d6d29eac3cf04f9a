//! Error module for the Makai word counter.
//!
//! This module provides the error handling framework for the application,
//! following Rust's idiomatic error handling patterns with explicit error
//! types and proper error propagation.
//!
//! The counting core itself has no recoverable error conditions: `insert`
//! and `enumerate` are total over their input domains, and allocation
//! failure aborts the process by policy, since a trie cannot safely be left
//! in a half-grown state. The errors defined here belong to the surrounding
//! program: configuration loading and I/O.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout the Makai word counter.
pub type MakaiResult<T> = Result<T, MakaiError>;

/// Core error enum for the Makai word counter.
#[derive(Error, Debug)]
pub enum MakaiError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO errors that may occur while reading input or writing the report.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are
    /// not defined.
    #[error("{0}")]
    Custom(String),
}
