//! Stable function-call boundary consumed by presentation layers.
//!
//! Every function here is pure: it takes strings and integers and returns
//! an owned value, with no shared state between calls. The choice of which
//! text an analysis runs on is explicit through [`AnalysisSource`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet::encode_letter;
use crate::analysis::frequency::FrequencyTable;
use crate::analysis::kasiski::KasiskiResult;
use crate::attack::BruteForceCandidate;
use crate::error::ClassicCryptError;

/// Encrypts or decrypts with the Caesar cipher.
///
/// See [`caesar_transform`](crate::shift_codec::caesar_transform).
pub fn caesar_cipher(text: &str, shift: i64, decrypt: bool) -> String {
    crate::shift_codec::caesar_transform(text, shift, decrypt)
}

/// Encrypts or decrypts with the Vigenère cipher; a key without letters is a no-op.
///
/// See [`vigenere_transform`](crate::vigenere_codec::vigenere_transform).
pub fn vigenere_cipher(text: &str, key: &str, decrypt: bool) -> String {
    crate::vigenere_codec::vigenere_transform(text, key, decrypt)
}

/// Ranks all 25 non-identity Caesar decryptions of `ciphertext`.
pub fn brute_force_caesar(ciphertext: &str) -> Vec<BruteForceCandidate> {
    crate::attack::brute_force_caesar(ciphertext)
}

/// Counts the letters of `text`.
pub fn frequency_analysis(text: &str) -> FrequencyTable {
    crate::analysis::frequency::frequency_analysis(text)
}

/// Runs a Kasiski examination with default parameters.
pub fn kasiski_examination(ciphertext: &str) -> KasiskiResult {
    crate::analysis::kasiski::kasiski_examination(ciphertext)
}

/// Computes the Index of Coincidence of `text`.
pub fn index_of_coincidence(text: &str) -> f64 {
    crate::analysis::coincidence::index_of_coincidence(text)
}

/// Which cipher's output an analysis should read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Text produced by the Caesar cipher.
    Caesar,
    /// Text produced by the Vigenère cipher.
    Vigenere,
}

impl fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisSource::Caesar => write!(f, "caesar"),
            AnalysisSource::Vigenere => write!(f, "vigenere"),
        }
    }
}

impl FromStr for AnalysisSource {
    type Err = ClassicCryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "caesar" => Ok(AnalysisSource::Caesar),
            "vigenere" | "vigenère" => Ok(AnalysisSource::Vigenere),
            _ => Err(ClassicCryptError::UnknownAnalysisSource(s.to_string())),
        }
    }
}

/// Picks the text to analyze from the two cipher outputs.
///
/// # Parameters
/// - `source`: Which output to use.
/// - `caesar_text`: Current Caesar output.
/// - `vigenere_text`: Current Vigenère output.
///
/// # Errors
/// Returns [`ClassicCryptError::EmptyAnalysisInput`] when the selected
/// text contains no letters. The other text is never used as a fallback.
///
/// # Examples
///
/// ```
/// use classicrypt::{select_analysis_text, AnalysisSource};
///
/// let text = select_analysis_text(AnalysisSource::Vigenere, "Khoor", "Lxfop").unwrap();
/// assert_eq!(text, "Lxfop");
/// assert!(select_analysis_text(AnalysisSource::Caesar, "", "Lxfop").is_err());
/// ```
pub fn select_analysis_text<'a>(
    source: AnalysisSource,
    caesar_text: &'a str,
    vigenere_text: &'a str,
) -> Result<&'a str, ClassicCryptError> {
    let text = match source {
        AnalysisSource::Caesar => caesar_text,
        AnalysisSource::Vigenere => vigenere_text,
    };
    if text.chars().any(|c| encode_letter(c).is_some()) {
        Ok(text)
    } else {
        Err(ClassicCryptError::EmptyAnalysisInput { selected: source })
    }
}
