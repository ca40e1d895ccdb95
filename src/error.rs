//! Error types for the classicrypt library.
//!
//! The cipher transforms and analyses are total functions and never fail.
//! Errors only surface where a typed value is constructed from user input.

use thiserror::Error;

use crate::engine::AnalysisSource;

/// Errors produced by the classicrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassicCryptError {
    /// Vigenère key has no alphabetic characters after stripping.
    #[error("key must contain at least one letter")]
    EmptyKey,
    /// N-gram length used by the Kasiski examination is below 2.
    #[error("n-gram length must be at least 2, got {0}")]
    InvalidNgramLength(usize),
    /// Upper bound for candidate key lengths is below 2.
    #[error("maximum key length must be at least 2, got {0}")]
    InvalidMaxKeyLength(usize),
    /// The text chosen for analysis has no letters to analyze.
    #[error("no {selected} text available for analysis")]
    EmptyAnalysisInput {
        /// The source that was selected.
        selected: AnalysisSource,
    },
    /// An analysis source name could not be parsed.
    #[error("unknown analysis source '{0}', expected 'caesar' or 'vigenere'")]
    UnknownAnalysisSource(String),
}
