//! Tunable parameters for the Kasiski examination.
//!
//! Defaults reproduce the classic tool behavior: trigrams, candidate key
//! lengths up to 20, and a display view of the first 10 repeated
//! sequences. The struct deserializes with missing fields filled from
//! [`Default`], so a presentation layer can load partial overrides.

use serde::{Deserialize, Serialize};

use crate::error::ClassicCryptError;

/// Default n-gram length (trigrams).
pub const DEFAULT_NGRAM_LENGTH: usize = 3;

/// Default upper bound for candidate key lengths.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Default number of repeated sequences kept in the display view.
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Parameters for [`kasiski_examination_with`](crate::analysis::kasiski::kasiski_examination_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KasiskiConfig {
    /// Length of the repeated substrings searched for.
    pub ngram_length: usize,
    /// Largest key length reported as a candidate.
    pub max_key_length: usize,
    /// Number of repeated sequences in the bounded view.
    pub display_limit: usize,
}

impl Default for KasiskiConfig {
    fn default() -> Self {
        KasiskiConfig {
            ngram_length: DEFAULT_NGRAM_LENGTH,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl KasiskiConfig {
    /// Checks that the parameters can produce a meaningful result.
    ///
    /// # Errors
    /// - [`ClassicCryptError::InvalidNgramLength`] if `ngram_length < 2`.
    /// - [`ClassicCryptError::InvalidMaxKeyLength`] if `max_key_length < 2`.
    pub fn validate(&self) -> Result<(), ClassicCryptError> {
        if self.ngram_length < 2 {
            return Err(ClassicCryptError::InvalidNgramLength(self.ngram_length));
        }
        if self.max_key_length < 2 {
            return Err(ClassicCryptError::InvalidMaxKeyLength(self.max_key_length));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KasiskiConfig::default();
        assert_eq!(config.ngram_length, 3);
        assert_eq!(config.max_key_length, 20);
        assert_eq!(config.display_limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_short_ngrams() {
        let config = KasiskiConfig {
            ngram_length: 1,
            ..KasiskiConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ClassicCryptError::InvalidNgramLength(1))
        );
    }

    #[test]
    fn test_validate_rejects_small_max_key_length() {
        let config = KasiskiConfig {
            max_key_length: 1,
            ..KasiskiConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ClassicCryptError::InvalidMaxKeyLength(1))
        );
    }

    #[test]
    fn test_display_limit_zero_is_valid() {
        let config = KasiskiConfig {
            display_limit: 0,
            ..KasiskiConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
