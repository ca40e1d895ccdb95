//! Alphabet codec: maps ASCII letters to and from the ring Z/26Z.
//!
//! Every cipher and analysis in this crate reads text through this module.
//! Only ASCII letters have a numeric value; every other character is an
//! opaque pass-through token and encodes to `None`.

use serde::{Serialize, Serializer};

/// Number of letters in the ring.
pub const ALPHABET_SIZE: u8 = 26;

/// A letter of the 26-letter ring together with its case.
///
/// Two letters compare by ring value first and by case second, so
/// `a < A < B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter {
    value: u8,
    upper: bool,
}

impl Letter {
    /// Creates an uppercase letter from a ring value.
    ///
    /// # Parameters
    /// - `value`: Any value; reduced modulo 26.
    pub fn from_value(value: u8) -> Self {
        Letter {
            value: value % ALPHABET_SIZE,
            upper: true,
        }
    }

    /// Returns the ring value (0 for A, 25 for Z).
    pub fn value(self) -> u8 {
        self.value
    }

    /// Returns `true` when the source character was uppercase.
    pub fn is_upper(self) -> bool {
        self.upper
    }

    /// Returns this letter shifted forward by `shift` positions, keeping its case.
    pub fn shifted(self, shift: u8) -> Self {
        Letter {
            value: (self.value + shift % ALPHABET_SIZE) % ALPHABET_SIZE,
            upper: self.upper,
        }
    }

    /// Returns this letter shifted backward by `shift` positions, keeping its case.
    pub fn unshifted(self, shift: u8) -> Self {
        Letter {
            value: (self.value + ALPHABET_SIZE - shift % ALPHABET_SIZE) % ALPHABET_SIZE,
            upper: self.upper,
        }
    }

    /// Returns the same letter in uppercase.
    pub fn to_upper(self) -> Self {
        Letter {
            value: self.value,
            upper: true,
        }
    }

    /// Converts the letter back to a `char` in its own case.
    pub fn to_char(self) -> char {
        decode_letter(self.value, self.upper)
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.to_upper().to_char())
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Encodes a character into the ring.
///
/// # Parameters
/// - `c`: Any character.
///
/// # Returns
/// `Some(letter)` for ASCII letters, `None` for everything else.
///
/// # Examples
///
/// ```
/// use classicrypt::alphabet::encode_letter;
///
/// let h = encode_letter('h').unwrap();
/// assert_eq!(h.value(), 7);
/// assert!(!h.is_upper());
/// assert!(encode_letter('!').is_none());
/// assert!(encode_letter('é').is_none());
/// ```
pub fn encode_letter(c: char) -> Option<Letter> {
    if c.is_ascii_uppercase() {
        Some(Letter {
            value: c as u8 - b'A',
            upper: true,
        })
    } else if c.is_ascii_lowercase() {
        Some(Letter {
            value: c as u8 - b'a',
            upper: false,
        })
    } else {
        None
    }
}

/// Decodes a ring value into a character of the requested case.
///
/// # Parameters
/// - `value`: Ring value; reduced modulo 26.
/// - `upper`: Output case.
pub fn decode_letter(value: u8, upper: bool) -> char {
    let base = if upper { b'A' } else { b'a' };
    (base + value % ALPHABET_SIZE) as char
}

/// Returns the canonical projection of `text`: letters only, uppercased.
///
/// This is the view used by Kasiski examination and key parsing.
pub fn canonical_letters(text: &str) -> Vec<Letter> {
    text.chars()
        .filter_map(encode_letter)
        .map(Letter::to_upper)
        .collect()
}

/// Returns the canonical projection of `text` as a `String`.
pub fn canonical_text(text: &str) -> String {
    canonical_letters(text)
        .into_iter()
        .map(Letter::to_char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uppercase() {
        let a = encode_letter('A').unwrap();
        assert_eq!(a.value(), 0);
        assert!(a.is_upper());
        let z = encode_letter('Z').unwrap();
        assert_eq!(z.value(), 25);
    }

    #[test]
    fn test_encode_lowercase() {
        let m = encode_letter('m').unwrap();
        assert_eq!(m.value(), 12);
        assert!(!m.is_upper());
    }

    #[test]
    fn test_encode_non_letters() {
        for c in [' ', '1', '-', '\n', 'ß', 'Ω'] {
            assert!(encode_letter(c).is_none(), "{:?} should not encode", c);
        }
    }

    #[test]
    fn test_decode_case() {
        assert_eq!(decode_letter(0, true), 'A');
        assert_eq!(decode_letter(0, false), 'a');
        assert_eq!(decode_letter(25, false), 'z');
        assert_eq!(decode_letter(26, true), 'A');
    }

    #[test]
    fn test_encode_decode_all_letters() {
        for c in ('a'..='z').chain('A'..='Z') {
            let l = encode_letter(c).unwrap();
            assert_eq!(decode_letter(l.value(), l.is_upper()), c);
        }
    }

    #[test]
    fn test_shifted_wraps() {
        let y = encode_letter('y').unwrap();
        assert_eq!(y.shifted(3).to_char(), 'b');
        assert_eq!(y.shifted(29).to_char(), 'b');
    }

    #[test]
    fn test_unshifted_wraps() {
        let b = encode_letter('B').unwrap();
        assert_eq!(b.unshifted(3).to_char(), 'Y');
        assert_eq!(b.unshifted(0).to_char(), 'B');
    }

    #[test]
    fn test_canonical_text() {
        assert_eq!(canonical_text("Hello, World! 42"), "HELLOWORLD");
        assert_eq!(canonical_text(""), "");
        assert_eq!(canonical_text("123 ..."), "");
    }

    #[test]
    fn test_letter_ordering() {
        let upper_a = encode_letter('A').unwrap();
        let lower_a = encode_letter('a').unwrap();
        let upper_b = encode_letter('B').unwrap();
        assert!(upper_a < upper_b);
        assert!(lower_a < upper_b);
        assert_ne!(upper_a, lower_a);
    }
}
