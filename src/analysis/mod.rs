//! Cryptanalysis over ciphertext.
//!
//! - Letter frequency tables
//! - Index of Coincidence
//! - Kasiski examination for Vigenère key length

pub mod coincidence;
pub mod frequency;
pub mod kasiski;

pub use coincidence::{index_of_coincidence, ENGLISH_IC, RANDOM_IC};
pub use frequency::{frequency_analysis, FrequencyEntry, FrequencyTable};
pub use kasiski::{
    kasiski_examination, kasiski_examination_with, KasiskiResult, NgramIndex, RepeatedSequence,
};
