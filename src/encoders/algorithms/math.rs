use crate::core::index::CorpusIndex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::radix;

pub use super::errors::EncodeError;

/// Encodes text as corpus characters using the thread-local RNG.
///
/// Each base-1000 digit of the text's UTF-8 bytes is rendered as one character
/// picked at random among the characters found at that offset, so repeated
/// calls may return different strings that all decode back to `text`.
///
/// # Example
///
/// ```
/// use base1000::{CorpusIndex, encode};
///
/// let text: String = (0..1000u32).map(|i| char::from_u32(0x4E00 + i).unwrap()).collect();
/// let index = CorpusIndex::builder().text(&text).build().unwrap();
///
/// // 'A' is 65, a single digit
/// assert_eq!(encode("A", &index).unwrap(), "乁");
/// ```
pub fn encode(text: &str, index: &CorpusIndex) -> Result<String, EncodeError> {
    encode_with_rng(text, index, &mut rand::rng())
}

/// Encodes with a reproducible RNG seeded from `seed`.
pub fn encode_seeded(text: &str, index: &CorpusIndex, seed: u64) -> Result<String, EncodeError> {
    encode_with_rng(text, index, &mut StdRng::seed_from_u64(seed))
}

/// Encodes text, drawing character choices from `rng`.
///
/// # Errors
///
/// - [`EncodeError::EmptyInput`] for an empty string
/// - [`EncodeError::LeadingNul`] when the text starts with U+0000
/// - [`EncodeError::UnrepresentableDigit`] if the index has no character for a digit
pub fn encode_with_rng<R: Rng + ?Sized>(
    text: &str,
    index: &CorpusIndex,
    rng: &mut R,
) -> Result<String, EncodeError> {
    let data = text.as_bytes();
    match data.first() {
        None => return Err(EncodeError::EmptyInput),
        Some(&0) => return Err(EncodeError::LeadingNul),
        Some(_) => {}
    }

    let digits = radix::to_digits(data);
    tracing::trace!(bytes = data.len(), digits = digits.len(), "encoding");

    digits
        .into_iter()
        .map(|digit| {
            index
                .candidates_for_digit(digit)
                .choose(&mut *rng)
                .copied()
                .ok_or(EncodeError::UnrepresentableDigit { digit })
        })
        .collect()
}
