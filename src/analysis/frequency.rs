//! Letter frequency analysis.
//!
//! Counts A-Z after case folding. Non-letters are ignored and do not count
//! toward the total. Entries are ordered by descending count; equal counts
//! are ordered alphabetically.

use serde::Serialize;

use crate::alphabet::{encode_letter, Letter, ALPHABET_SIZE};

/// Occurrences of each letter A-Z in `text`, case-insensitive.
///
/// Index 0 holds the count of `A`, index 25 the count of `Z`.
pub fn letter_counts(text: &str) -> [usize; ALPHABET_SIZE as usize] {
    let mut counts = [0usize; ALPHABET_SIZE as usize];
    for letter in text.chars().filter_map(encode_letter) {
        counts[letter.value() as usize] += 1;
    }
    counts
}

/// One row of a [`FrequencyTable`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyEntry {
    /// The letter, always uppercase.
    pub letter: Letter,
    /// Number of occurrences.
    pub count: usize,
    /// `count / total * 100`, unrounded. Zero when the text has no letters.
    pub frequency_percent: f64,
}

impl FrequencyEntry {
    fn new(letter: Letter, count: usize, total: usize) -> Self {
        let frequency_percent = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64 * 100.0
        };
        FrequencyEntry {
            letter,
            count,
            frequency_percent,
        }
    }

    /// Percentage rounded to two decimal places, e.g. `"12.50"`.
    pub fn display_percent(&self) -> String {
        format!("{:.2}", self.frequency_percent)
    }
}

/// Letter counts of a text, restricted to letters that occur.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    total_letters: usize,
}

impl FrequencyTable {
    /// Builds the table from raw A-Z counts.
    fn from_counts(counts: &[usize; ALPHABET_SIZE as usize]) -> Self {
        let total_letters = counts.iter().sum();
        let mut entries: Vec<FrequencyEntry> = counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, &count)| {
                FrequencyEntry::new(Letter::from_value(i as u8), count, total_letters)
            })
            .collect();
        // Entries start in letter order, so a stable sort keeps A before B on ties.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        FrequencyTable {
            entries,
            total_letters,
        }
    }

    /// Observed letters, most frequent first.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Number of letters counted.
    pub fn total_letters(&self) -> usize {
        self.total_letters
    }

    /// Number of distinct letters observed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the text had no letters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the entry for `c`, case-insensitive.
    ///
    /// # Returns
    /// `None` if `c` is not a letter or does not occur.
    pub fn get(&self, c: char) -> Option<&FrequencyEntry> {
        let wanted = encode_letter(c)?.to_upper();
        self.entries.iter().find(|e| e.letter == wanted)
    }

    /// All 26 letters in alphabetical order, unobserved ones with count 0.
    pub fn all_letters(&self) -> Vec<FrequencyEntry> {
        (0..ALPHABET_SIZE)
            .map(Letter::from_value)
            .map(|letter| {
                self.entries
                    .iter()
                    .find(|e| e.letter == letter)
                    .copied()
                    .unwrap_or_else(|| FrequencyEntry::new(letter, 0, self.total_letters))
            })
            .collect()
    }
}

/// Counts the letters of `text`.
///
/// # Examples
///
/// ```
/// use classicrypt::analysis::frequency::frequency_analysis;
///
/// let table = frequency_analysis("Hello!");
/// assert_eq!(table.total_letters(), 5);
/// assert_eq!(table.entries()[0].letter.to_char(), 'L');
/// assert_eq!(table.entries()[0].count, 2);
/// ```
pub fn frequency_analysis(text: &str) -> FrequencyTable {
    let table = FrequencyTable::from_counts(&letter_counts(text));
    tracing::debug!(
        total_letters = table.total_letters,
        distinct = table.entries.len(),
        "frequency analysis complete"
    );
    table
}
