//! Error types for the few fallible entry points
//!
//! Playback operations never fail: invalid calls degrade to no-ops. The only
//! error surfaced by the library is [`ParseAlgorithmError`], raised when an
//! algorithm name coming from the command line does not match any generator.

use std::fmt;

/// An algorithm name that does not match any known generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError {
    pub name: String,
}

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown sorting algorithm '{}' (expected one of: bubble, quicksort, mergesort)",
            self.name
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}
