//! Classical substitution ciphers and the cryptanalysis used to break them.
//!
//! Caesar and Vigenère ciphers over the 26-letter ring, together with
//! frequency analysis, Index of Coincidence, Kasiski examination and a
//! brute-force Caesar attack. Everything is a pure, synchronous function of
//! its inputs; no state is shared between calls.
//!
//! # Architecture
//!
//! ```text
//! alphabet       (char ↔ Z/26Z, case kept, non-letters pass through)
//!     ↓
//! shift_codec    (Caesar)          analysis::frequency    (letter counts)
//! vigenere_codec (Vigenère)        analysis::coincidence  (IC)
//!     ↓                            analysis::kasiski      (key length)
//! attack         (Caesar brute force + plausibility score)
//!     ↓
//! engine         (stable boundary for presentation layers)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt:
//!
//! ```
//! use classicrypt::{caesar_cipher, vigenere_cipher};
//!
//! assert_eq!(caesar_cipher("Hello World", 3, false), "Khoor Zruog");
//! assert_eq!(vigenere_cipher("ATTACKATDAWN", "LEMON", false), "LXFOPVEFRNHR");
//! assert_eq!(vigenere_cipher("LXFOPVEFRNHR", "LEMON", true), "ATTACKATDAWN");
//! ```
//!
//! Break a Caesar ciphertext:
//!
//! ```
//! use classicrypt::brute_force_caesar;
//!
//! let ranked = brute_force_caesar("Wkh grj dqg wkh fdw");
//! assert_eq!(ranked[0].shift, 3);
//! ```
//!
//! Estimate a Vigenère key length:
//!
//! ```
//! use classicrypt::{kasiski_examination, vigenere_cipher};
//!
//! let cipher = vigenere_cipher(&"ABCDE".repeat(6), "LEMON", false);
//! let result = kasiski_examination(&cipher);
//! assert_eq!(result.suggested_key_length(), Some(5));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod analysis;
pub mod attack;
pub mod config;
pub mod engine;
pub mod error;
pub mod shift_codec;
pub mod utils;
pub mod vigenere_codec;

pub use analysis::{FrequencyEntry, FrequencyTable, KasiskiResult, RepeatedSequence};
pub use attack::BruteForceCandidate;
pub use config::KasiskiConfig;
pub use engine::{
    brute_force_caesar, caesar_cipher, frequency_analysis, index_of_coincidence,
    kasiski_examination, select_analysis_text, vigenere_cipher, AnalysisSource,
};
pub use error::ClassicCryptError;
pub use shift_codec::ShiftCodec;
pub use vigenere_codec::{VigenereCodec, VigenereKey};
