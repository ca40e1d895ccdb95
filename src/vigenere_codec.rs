//! VigenereCodec: polyalphabetic substitution with a repeating key.
//!
//! The key is a sequence of shifts. A running key position advances only
//! when an alphabetic input character is consumed, so spaces and
//! punctuation never use up a key letter. Output case always follows the
//! input letter, never the key letter.

use crate::alphabet::{canonical_letters, encode_letter, Letter};
use crate::error::ClassicCryptError;

/// A non-empty Vigenère key made of uppercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VigenereKey {
    letters: Vec<Letter>,
}

impl VigenereKey {
    /// Parses a key from user input.
    ///
    /// The input is uppercased and stripped of everything that is not an
    /// ASCII letter.
    ///
    /// # Errors
    /// Returns [`ClassicCryptError::EmptyKey`] if no letters remain.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::VigenereKey;
    ///
    /// let key = VigenereKey::new("le-mon 1").unwrap();
    /// assert_eq!(key.to_string(), "LEMON");
    /// assert!(VigenereKey::new(" 42 ").is_err());
    /// ```
    pub fn new(key: &str) -> Result<Self, ClassicCryptError> {
        let letters = canonical_letters(key);
        if letters.is_empty() {
            return Err(ClassicCryptError::EmptyKey);
        }
        Ok(VigenereKey { letters })
    }

    /// Returns the key length in letters (always at least 1).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false` for a parsed key.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Returns the shift for the given running key position.
    fn shift_at(&self, position: usize) -> u8 {
        self.letters[position % self.letters.len()].value()
    }
}

impl std::fmt::Display for VigenereKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in &self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

/// Vigenère cipher bound to a parsed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereCodec {
    key: VigenereKey,
}

impl VigenereCodec {
    /// Creates a codec from raw key input.
    ///
    /// # Errors
    /// Returns [`ClassicCryptError::EmptyKey`] if the key has no letters.
    pub fn new(key: &str) -> Result<Self, ClassicCryptError> {
        Ok(VigenereCodec {
            key: VigenereKey::new(key)?,
        })
    }

    /// Creates a codec from an already parsed key.
    pub fn from_key(key: VigenereKey) -> Self {
        VigenereCodec { key }
    }

    /// Returns the key in use.
    pub fn key(&self) -> &VigenereKey {
        &self.key
    }

    /// Returns the shift of each key letter, in key order.
    pub fn key_shifts(&self) -> Vec<u8> {
        self.key.letters.iter().map(|l| l.value()).collect()
    }

    /// Encodes `text`: each letter becomes `(p + k) mod 26`.
    pub fn codec(&self, text: &str) -> String {
        self.apply(text, Letter::shifted)
    }

    /// Decodes `text`: each letter becomes `(p - k + 26) mod 26`.
    pub fn decodec(&self, text: &str) -> String {
        self.apply(text, Letter::unshifted)
    }

    fn apply(&self, text: &str, step: fn(Letter, u8) -> Letter) -> String {
        let mut position = 0usize;
        text.chars()
            .map(|c| match encode_letter(c) {
                Some(letter) => {
                    let out = step(letter, self.key.shift_at(position));
                    position += 1;
                    out.to_char()
                }
                None => c,
            })
            .collect()
    }
}

/// Encrypts or decrypts `text` with the Vigenère cipher.
///
/// A key with no letters makes this a no-op: the input is returned
/// unchanged.
///
/// # Parameters
/// - `text`: Input text; non-letters pass through and do not consume key letters.
/// - `key`: Raw key; uppercased and stripped of non-letters.
/// - `decrypt`: Selects the direction.
///
/// # Examples
///
/// ```
/// use classicrypt::vigenere_codec::vigenere_transform;
///
/// assert_eq!(vigenere_transform("ATTACKATDAWN", "LEMON", false), "LXFOPVEFRNHR");
/// assert_eq!(vigenere_transform("LXFOPVEFRNHR", "lemon", true), "ATTACKATDAWN");
/// assert_eq!(vigenere_transform("unchanged", "123", false), "unchanged");
/// ```
pub fn vigenere_transform(text: &str, key: &str, decrypt: bool) -> String {
    match VigenereCodec::new(key) {
        Ok(codec) if decrypt => codec.decodec(text),
        Ok(codec) => codec.codec(text),
        Err(_) => {
            tracing::debug!("vigenere key has no letters, returning input unchanged");
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_vector() {
        assert_eq!(
            vigenere_transform("ATTACKATDAWN", "LEMON", false),
            "LXFOPVEFRNHR"
        );
        assert_eq!(
            vigenere_transform("LXFOPVEFRNHR", "LEMON", true),
            "ATTACKATDAWN"
        );
    }

    #[test]
    fn test_key_is_case_folded_and_stripped() {
        assert_eq!(
            vigenere_transform("ATTACKATDAWN", "l e-m o n!", false),
            "LXFOPVEFRNHR"
        );
    }

    #[test]
    fn test_space_does_not_consume_key() {
        // A+K = K, then B+E = F; the space keeps its place.
        assert_eq!(vigenere_transform("A B", "KEY", false), "K F");
    }

    #[test]
    fn test_output_case_follows_input() {
        assert_eq!(
            vigenere_transform("attack at dawn", "LEMON", false),
            "lxfopv ef rnhr"
        );
        assert_eq!(
            vigenere_transform("AtTaCk", "lemon", false),
            "LxFoPv"
        );
    }

    #[test]
    fn test_empty_key_is_noop() {
        assert_eq!(vigenere_transform("Hello", "", false), "Hello");
        assert_eq!(vigenere_transform("Hello", "  9 !", true), "Hello");
    }

    #[test]
    fn test_key_new_rejects_empty() {
        assert_eq!(VigenereKey::new(""), Err(ClassicCryptError::EmptyKey));
        assert_eq!(VigenereKey::new("--"), Err(ClassicCryptError::EmptyKey));
    }

    #[test]
    fn test_key_shifts() {
        let codec = VigenereCodec::new("Key").unwrap();
        assert_eq!(codec.key_shifts(), vec![10, 4, 24]);
        assert_eq!(codec.key().len(), 3);
        assert!(!codec.key().is_empty());
    }

    #[test]
    fn test_single_letter_key_matches_caesar() {
        let text = "Meet me at the usual place.";
        assert_eq!(
            vigenere_transform(text, "D", false),
            crate::shift_codec::caesar_transform(text, 3, false)
        );
    }

    #[test]
    fn test_roundtrip_with_punctuation() {
        let text = "Hello, World! The year is 2024; don't panic.";
        for key in ["a", "LEMON", "Crypto Key", "zzz"] {
            let encoded = vigenere_transform(text, key, false);
            assert_eq!(vigenere_transform(&encoded, key, true), text, "key {}", key);
        }
    }
}
