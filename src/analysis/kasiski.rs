//! Kasiski examination.
//!
//! Infers the key length of a Vigenère ciphertext from the spacing of
//! repeated n-grams:
//!
//! ```text
//! ciphertext ─► canonical text (letters only, uppercase)
//!            ─► NgramIndex (n-gram → start positions)
//!            ─► consecutive distances per repeated n-gram
//!            ─► GCD of every distance
//!            ─► divisors of the GCD in [2, min(GCD, max_key_length)]
//! ```
//!
//! Only distances between adjacent occurrences of the same n-gram are
//! used, not every pair of occurrences.

use std::collections::HashMap;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::alphabet::canonical_text;
use crate::config::KasiskiConfig;
use crate::error::ClassicCryptError;
use crate::utils::math::{divisors_in_range, gcd_all};

/// Start positions of every n-gram of a canonical text.
///
/// N-grams are kept in order of first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgramIndex {
    ngrams: Vec<(String, Vec<usize>)>,
}

impl NgramIndex {
    /// Indexes every length-`n` window (step 1) of `canonical`.
    ///
    /// # Parameters
    /// - `canonical`: Uppercase letters only, as produced by
    ///   [`canonical_text`](crate::alphabet::canonical_text).
    /// - `n`: Window length. A text shorter than `n` yields an empty index.
    pub fn build(canonical: &str, n: usize) -> Self {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut ngrams: Vec<(String, Vec<usize>)> = Vec::new();
        if n == 0 || canonical.len() < n {
            return NgramIndex { ngrams };
        }
        for start in 0..=canonical.len() - n {
            let gram = &canonical[start..start + n];
            match slots.get(gram) {
                Some(&slot) => ngrams[slot].1.push(start),
                None => {
                    slots.insert(gram, ngrams.len());
                    ngrams.push((gram.to_string(), vec![start]));
                }
            }
        }
        NgramIndex { ngrams }
    }

    /// Number of distinct n-grams.
    pub fn len(&self) -> usize {
        self.ngrams.len()
    }

    /// `true` when the text was shorter than one n-gram.
    pub fn is_empty(&self) -> bool {
        self.ngrams.is_empty()
    }

    /// Start positions of `ngram`, ascending.
    pub fn positions(&self, ngram: &str) -> Option<&[usize]> {
        self.ngrams
            .iter()
            .find(|(gram, _)| gram == ngram)
            .map(|(_, positions)| positions.as_slice())
    }

    /// N-grams occurring at two or more positions, in order of first occurrence.
    pub fn repeated(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.ngrams
            .iter()
            .filter(|(_, positions)| positions.len() > 1)
            .map(|(gram, positions)| (gram.as_str(), positions.as_slice()))
    }
}

/// An n-gram that occurs more than once in the ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepeatedSequence {
    /// The repeated letters.
    pub sequence: String,
    /// Start positions in the canonical text, ascending.
    pub positions: Vec<usize>,
    /// `positions[i] - positions[i - 1]` for each adjacent pair.
    pub distances: Vec<usize>,
}

impl RepeatedSequence {
    fn new(sequence: &str, positions: &[usize]) -> Self {
        let distances = positions.windows(2).map(|w| w[1] - w[0]).collect();
        RepeatedSequence {
            sequence: sequence.to_string(),
            positions: positions.to_vec(),
            distances,
        }
    }
}

/// Outcome of a Kasiski examination.
///
/// An empty candidate list means there was not enough repetition to infer
/// a key length; it is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KasiskiResult {
    repeated: Vec<RepeatedSequence>,
    all_distances: Vec<usize>,
    gcd: Option<usize>,
    candidate_key_lengths: Vec<usize>,
    display_limit: usize,
}

impl KasiskiResult {
    /// Bounded view: at most `display_limit` sequences, first found first.
    pub fn repeated_sequences(&self) -> &[RepeatedSequence] {
        let end = self.repeated.len().min(self.display_limit);
        &self.repeated[..end]
    }

    /// Every repeated sequence, in order of first occurrence.
    pub fn all_repeated_sequences(&self) -> &[RepeatedSequence] {
        &self.repeated
    }

    /// Every adjacent distance of every repeated sequence.
    pub fn all_distances(&self) -> &[usize] {
        &self.all_distances
    }

    /// GCD of [`all_distances`](Self::all_distances); `None` when there are none.
    pub fn gcd(&self) -> Option<usize> {
        self.gcd
    }

    /// Divisors of the GCD in `[2, min(GCD, max_key_length)]`, ascending.
    pub fn candidate_key_lengths(&self) -> &[usize] {
        &self.candidate_key_lengths
    }

    /// Smallest candidate key length.
    pub fn suggested_key_length(&self) -> Option<usize> {
        self.candidate_key_lengths.first().copied()
    }
}

impl Serialize for KasiskiResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("KasiskiResult", 6)?;
        state.serialize_field("repeatedSequences", self.repeated_sequences())?;
        state.serialize_field("totalRepeatedSequences", &self.repeated.len())?;
        state.serialize_field("allDistances", &self.all_distances)?;
        state.serialize_field("gcd", &self.gcd)?;
        state.serialize_field("candidateKeyLengths", &self.candidate_key_lengths)?;
        state.serialize_field("suggestedKeyLength", &self.suggested_key_length())?;
        state.end()
    }
}

/// Runs a Kasiski examination with the default [`KasiskiConfig`].
///
/// # Examples
///
/// ```
/// use classicrypt::analysis::kasiski::kasiski_examination;
///
/// let result = kasiski_examination("LFORR LFORR LFORR");
/// assert_eq!(result.gcd(), Some(5));
/// assert_eq!(result.suggested_key_length(), Some(5));
///
/// let short = kasiski_examination("xyz");
/// assert!(short.candidate_key_lengths().is_empty());
/// ```
pub fn kasiski_examination(ciphertext: &str) -> KasiskiResult {
    examine(ciphertext, &KasiskiConfig::default())
}

/// Runs a Kasiski examination with explicit parameters.
///
/// # Errors
/// Returns the error from [`KasiskiConfig::validate`] for unusable parameters.
pub fn kasiski_examination_with(
    ciphertext: &str,
    config: &KasiskiConfig,
) -> Result<KasiskiResult, ClassicCryptError> {
    config.validate()?;
    Ok(examine(ciphertext, config))
}

fn examine(ciphertext: &str, config: &KasiskiConfig) -> KasiskiResult {
    let canonical = canonical_text(ciphertext);
    let index = NgramIndex::build(&canonical, config.ngram_length);

    let repeated: Vec<RepeatedSequence> = index
        .repeated()
        .map(|(gram, positions)| {
            let seq = RepeatedSequence::new(gram, positions);
            tracing::trace!(sequence = gram, distances = ?seq.distances, "repeated n-gram");
            seq
        })
        .collect();

    let all_distances: Vec<usize> = repeated
        .iter()
        .flat_map(|seq| seq.distances.iter().copied())
        .collect();

    let gcd = gcd_all(&all_distances);
    let candidate_key_lengths = match gcd {
        Some(g) => divisors_in_range(g, 2, g.min(config.max_key_length)),
        None => Vec::new(),
    };

    tracing::debug!(
        letters = canonical.len(),
        repeated = repeated.len(),
        distances = all_distances.len(),
        gcd = ?gcd,
        candidates = ?candidate_key_lengths,
        "kasiski examination complete"
    );

    KasiskiResult {
        repeated,
        all_distances,
        gcd,
        candidate_key_lengths,
        display_limit: config.display_limit,
    }
}
