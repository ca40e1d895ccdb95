//! Index of Coincidence.
//!
//! The probability that two letters drawn without replacement from a text
//! are equal: `IC = sum(n_i * (n_i - 1)) / (N * (N - 1))`.

use super::frequency::letter_counts;

/// Typical IC of English prose.
pub const ENGLISH_IC: f64 = 0.0667;

/// IC of uniformly random letters, `1 / 26`.
pub const RANDOM_IC: f64 = 1.0 / 26.0;

/// Computes the Index of Coincidence of the letters in `text`.
///
/// Returns `0.0` when the text has fewer than two letters.
///
/// # Examples
///
/// ```
/// use classicrypt::analysis::coincidence::index_of_coincidence;
///
/// assert_eq!(index_of_coincidence(""), 0.0);
/// assert_eq!(index_of_coincidence("A"), 0.0);
/// assert_eq!(index_of_coincidence("AAAA"), 1.0);
/// assert_eq!(index_of_coincidence("AB"), 0.0);
/// ```
pub fn index_of_coincidence(text: &str) -> f64 {
    let counts = letter_counts(text);
    let total: usize = counts.iter().sum();
    if total <= 1 {
        tracing::debug!(total, "too few letters for index of coincidence");
        return 0.0;
    }
    let numerator: usize = counts.iter().map(|&n| n * n.saturating_sub(1)).sum();
    let ic = numerator as f64 / (total * (total - 1)) as f64;
    tracing::debug!(total, ic, "index of coincidence computed");
    ic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guards() {
        assert_eq!(index_of_coincidence(""), 0.0);
        assert_eq!(index_of_coincidence("A"), 0.0);
        assert_eq!(index_of_coincidence("!!! 123"), 0.0);
        assert_eq!(index_of_coincidence("a."), 0.0);
    }

    #[test]
    fn test_single_repeated_letter() {
        assert_eq!(index_of_coincidence("zzzzzz"), 1.0);
    }

    #[test]
    fn test_case_and_punctuation_ignored() {
        assert_eq!(
            index_of_coincidence("Hello, World"),
            index_of_coincidence("helloworld")
        );
    }

    #[test]
    fn test_known_value() {
        // AABB: (2*1 + 2*1) / (4*3) = 4/12
        let ic = index_of_coincidence("AABB");
        assert!((ic - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_full_alphabet_is_zero() {
        assert_eq!(index_of_coincidence("ABCDEFGHIJKLMNOPQRSTUVWXYZ"), 0.0);
    }

    #[test]
    fn test_english_above_random() {
        let text = "It was the best of times, it was the worst of times, it was the age \
                    of wisdom, it was the age of foolishness, it was the epoch of belief, \
                    it was the epoch of incredulity, it was the season of light, it was \
                    the season of darkness";
        let ic = index_of_coincidence(text);
        assert!(ic > RANDOM_IC, "ic {} should exceed random", ic);
    }
}
