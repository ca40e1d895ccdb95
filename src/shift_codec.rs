//! ShiftCodec: the Caesar cipher.
//!
//! A fixed shift applied to every letter of the 26-letter ring. The shift
//! may be any integer and is normalized into `[0, 25]` before use; decoding
//! applies the additive inverse, so `shift = 0` and `shift = 26` both decode
//! as the identity.

use crate::alphabet::{encode_letter, ALPHABET_SIZE};

/// Caesar cipher with a normalized shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftCodec {
    shift: u8,
}

impl ShiftCodec {
    /// Creates a ShiftCodec from any integer shift.
    ///
    /// # Parameters
    /// - `shift`: Shift in letters; negative values shift backwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::ShiftCodec;
    ///
    /// assert_eq!(ShiftCodec::new(29).shift(), 3);
    /// assert_eq!(ShiftCodec::new(-1).shift(), 25);
    /// ```
    pub fn new(shift: i64) -> Self {
        ShiftCodec {
            shift: normalize_shift(shift),
        }
    }

    /// Returns the normalized encoding shift in `[0, 25]`.
    pub fn shift(&self) -> u8 {
        self.shift
    }

    /// Returns the shift that undoes this codec, `(26 - shift) mod 26`.
    pub fn inverse_shift(&self) -> u8 {
        (ALPHABET_SIZE - self.shift) % ALPHABET_SIZE
    }

    /// Encodes `text`, passing non-letters through unchanged.
    pub fn codec(&self, text: &str) -> String {
        apply_shift(text, self.shift)
    }

    /// Decodes `text` produced by [`codec`](Self::codec).
    pub fn decodec(&self, text: &str) -> String {
        apply_shift(text, self.inverse_shift())
    }
}

/// Reduces any integer shift into `[0, 25]`.
fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(ALPHABET_SIZE as i64) as u8
}

/// Adds `shift` to every letter of `text`, keeping each letter's case.
fn apply_shift(text: &str, shift: u8) -> String {
    text.chars()
        .map(|c| match encode_letter(c) {
            Some(letter) => letter.shifted(shift).to_char(),
            None => c,
        })
        .collect()
}

/// Encrypts or decrypts `text` with the Caesar cipher.
///
/// # Parameters
/// - `text`: Input text; non-letters pass through at their positions.
/// - `shift`: Any integer shift, reduced modulo 26.
/// - `decrypt`: When `true`, applies the inverse shift `(26 - shift mod 26) mod 26`.
///
/// # Examples
///
/// ```
/// use classicrypt::shift_codec::caesar_transform;
///
/// assert_eq!(caesar_transform("Hello World", 3, false), "Khoor Zruog");
/// assert_eq!(caesar_transform("Khoor Zruog", 3, true), "Hello World");
/// ```
pub fn caesar_transform(text: &str, shift: i64, decrypt: bool) -> String {
    let codec = ShiftCodec::new(shift);
    if decrypt {
        codec.decodec(text)
    } else {
        codec.codec(text)
    }
}
