//! Brute-force attack on the Caesar cipher.
//!
//! Tries every non-identity shift and ranks the decryptions with a cheap
//! plausibility heuristic: whole-word hits on a short list of common
//! English words plus a bonus for the letters E and T. The score is
//! approximate and can mis-rank short or adversarial inputs, but it is
//! deterministic: equal input always yields the same ranking.

use serde::Serialize;

use crate::alphabet::ALPHABET_SIZE;
use crate::shift_codec::caesar_transform;

/// Common short English words rewarded by [`plausibility_score`].
pub const COMMON_WORDS: [&str; 15] = [
    "THE", "AND", "FOR", "ARE", "BUT", "NOT", "YOU", "ALL", "CAN", "HER", "WAS", "ONE", "OUR",
    "HAD", "DAY",
];

/// Weight applied to each occurrence of `E` or `T`.
const LETTER_BONUS: f64 = 0.5;

/// One decryption attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BruteForceCandidate {
    /// Shift used to decrypt, in `1..=25`.
    pub shift: u8,
    /// The decrypted text.
    pub text: String,
    /// Plausibility score; higher looks more like English.
    pub score: f64,
}

/// Scores how much `text` looks like English.
///
/// For each word of [`COMMON_WORDS`], every whole-word match adds the word
/// length. Each `E` or `T` adds `0.5`. Matching is case-insensitive and
/// words are maximal runs of ASCII letters, digits and underscores.
///
/// # Examples
///
/// ```
/// use classicrypt::attack::plausibility_score;
///
/// // THE (3) + AND (3) + two T and two E (2.0)
/// assert_eq!(plausibility_score("the cat and me"), 8.0);
/// // THEN is not THE
/// assert_eq!(plausibility_score("then"), 1.0);
/// ```
pub fn plausibility_score(text: &str) -> f64 {
    let upper = text.to_ascii_uppercase();

    let word_score: usize = upper
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| COMMON_WORDS.iter().any(|word| word == token))
        .map(str::len)
        .sum();

    let letter_hits = upper.chars().filter(|&c| c == 'E' || c == 'T').count();

    word_score as f64 + LETTER_BONUS * letter_hits as f64
}

/// Decrypts `ciphertext` with every shift from 1 to 25 and ranks the results.
///
/// # Returns
/// Exactly 25 candidates ordered by descending score. Equal scores keep
/// ascending shift order.
///
/// # Examples
///
/// ```
/// use classicrypt::attack::brute_force_caesar;
///
/// let ranked = brute_force_caesar("Wkh grj dqg wkh fdw");
/// assert_eq!(ranked.len(), 25);
/// assert_eq!(ranked[0].shift, 3);
/// assert_eq!(ranked[0].text, "The dog and the cat");
/// ```
pub fn brute_force_caesar(ciphertext: &str) -> Vec<BruteForceCandidate> {
    let mut candidates: Vec<BruteForceCandidate> = (1..ALPHABET_SIZE)
        .map(|shift| {
            let text = caesar_transform(ciphertext, shift as i64, true);
            let score = plausibility_score(&text);
            tracing::trace!(shift, score, "scored caesar candidate");
            BruteForceCandidate { shift, text, score }
        })
        .collect();

    // Stable sort keeps ascending shift order among equal scores.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(best) = candidates.first() {
        tracing::debug!(shift = best.shift, score = best.score, "brute force complete");
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_word_boundaries() {
        assert_eq!(plausibility_score("the"), 4.0);
        assert_eq!(plausibility_score("THE."), 4.0);
        assert_eq!(plausibility_score("other"), 1.0);
        assert_eq!(plausibility_score("the_"), 1.0);
        assert_eq!(plausibility_score("the1"), 1.0);
    }

    #[test]
    fn test_score_counts_every_match() {
        // AND twice (6) + YOU (3) + no E/T
        assert_eq!(plausibility_score("and you, and"), 9.0);
    }

    #[test]
    fn test_score_letter_bonus() {
        assert_eq!(plausibility_score("eEtT"), 2.0);
        assert_eq!(plausibility_score("xyz"), 0.0);
        assert_eq!(plausibility_score(""), 0.0);
    }

    #[test]
    fn test_all_common_words_score() {
        for word in COMMON_WORDS {
            let bonus = word.chars().filter(|&c| c == 'E' || c == 'T').count() as f64 * 0.5;
            assert_eq!(plausibility_score(word), 3.0 + bonus, "word {}", word);
        }
    }

    #[test]
    fn test_brute_force_never_tries_zero() {
        let ranked = brute_force_caesar("abc");
        assert_eq!(ranked.len(), 25);
        let mut shifts: Vec<u8> = ranked.iter().map(|c| c.shift).collect();
        shifts.sort_unstable();
        assert_eq!(shifts, (1..=25).collect::<Vec<u8>>());
    }

    #[test]
    fn test_brute_force_sorted_descending() {
        let ranked = brute_force_caesar("Aol xbpjr iyvdu mve qbtwz vcly aol shgf kvn");
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_brute_force_finds_shift() {
        let plain = "The quick brown fox jumps over the lazy dog and the cat";
        let cipher = caesar_transform(plain, 7, false);
        let ranked = brute_force_caesar(&cipher);
        assert_eq!(ranked[0].shift, 7);
        assert_eq!(ranked[0].text, plain);
    }

    #[test]
    fn test_ties_keep_shift_order() {
        // Digits only: every candidate scores 0.
        let ranked = brute_force_caesar("12345");
        let shifts: Vec<u8> = ranked.iter().map(|c| c.shift).collect();
        assert_eq!(shifts, (1..=25).collect::<Vec<u8>>());
        assert!(ranked.iter().all(|c| c.text == "12345"));
    }

    #[test]
    fn test_deterministic() {
        let cipher = "Zkdw d ehdxwliko gdb";
        assert_eq!(brute_force_caesar(cipher), brute_force_caesar(cipher));
    }
}
