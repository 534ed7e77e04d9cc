use crate::core::index::CorpusIndex;
use crate::encoders::algorithms::radix::{self, BASE};
use num_bigint::BigUint;
use num_traits::Zero;
use std::iter::FusedIterator;

/// Default cap on the number of digit assignments a decode will try.
pub const DEFAULT_MAX_COMBINATIONS: u64 = 1_000_000;

/// Search budget for [`decode_with_limits`].
///
/// Candidate sets multiply across the encoded sequence, so long inputs over an
/// ambiguous corpus can describe more assignments than can ever be visited.
/// Decoding stops quietly once either cap is reached; use
/// [`Candidates::is_truncated`] to tell a capped search from an exhausted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum assignments explored, `None` for no cap
    pub max_combinations: Option<u64>,
    /// Maximum candidates yielded, `None` for no cap
    pub max_results: Option<usize>,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_combinations: Some(DEFAULT_MAX_COMBINATIONS),
            max_results: None,
        }
    }
}

impl DecodeLimits {
    /// No caps at all. The search may run for a very long time.
    pub fn unbounded() -> Self {
        Self {
            max_combinations: None,
            max_results: None,
        }
    }

    /// Sets the combination cap.
    pub fn with_max_combinations(mut self, max: u64) -> Self {
        self.max_combinations = Some(max);
        self
    }

    /// Sets the result cap.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }
}

/// Decodes with the default [`DecodeLimits`].
///
/// The default combination cap keeps long inputs over an ambiguous corpus
/// from running for hours, but it can also end the search before the
/// original text is reached. Check [`Candidates::is_truncated`] or use
/// [`decode_with_limits`] with [`DecodeLimits::unbounded`] when every
/// candidate matters.
///
/// # Example
///
/// ```
/// use base1000::{CorpusIndex, decode};
///
/// let text: String = (0..1000u32).map(|i| char::from_u32(0x4E00 + i).unwrap()).collect();
/// let index = CorpusIndex::builder().text(&text).build().unwrap();
///
/// let found: Vec<String> = decode("乁", &index).collect();
/// assert_eq!(found, vec!["A".to_string()]);
/// ```
pub fn decode<'a>(encoded: &str, index: &'a CorpusIndex) -> Candidates<'a> {
    decode_with_limits(encoded, index, DecodeLimits::default())
}

/// Starts a lazy search for every plausible original of `encoded`.
///
/// A character the index does not know makes the result empty, as does an
/// empty input. Neither is an error.
pub fn decode_with_limits<'a>(
    encoded: &str,
    index: &'a CorpusIndex,
    limits: DecodeLimits,
) -> Candidates<'a> {
    let sets: Vec<&'a [u16]> = encoded
        .chars()
        .map(|c| index.candidate_digits_for_char(c))
        .collect();
    Candidates::new(sets, limits)
}

/// Lazy, single-pass iterator over decoded candidates.
///
/// Walks the Cartesian product of per-character digit sets with the first
/// position varying slowest. Each assignment is turned back into bytes and
/// kept only if the bytes are valid UTF-8. Dropping the iterator cancels the
/// search; a fresh [`decode`] is needed to iterate again.
#[derive(Debug, Clone)]
pub struct Candidates<'a> {
    sets: Vec<&'a [u16]>,
    cursor: Vec<usize>,
    /// `prefixes[i]` is the value of the first `i` digits of the cursor
    prefixes: Vec<BigUint>,
    /// First position whose prefix is out of date
    stale_from: usize,
    limits: DecodeLimits,
    explored: u64,
    yielded: usize,
    exhausted: bool,
    truncated: bool,
}

impl<'a> Candidates<'a> {
    fn new(sets: Vec<&'a [u16]>, limits: DecodeLimits) -> Self {
        let exhausted = sets.is_empty() || sets.iter().any(|set| set.is_empty());
        tracing::debug!(
            positions = sets.len(),
            total = ?product(&sets),
            exhausted,
            "starting candidate search"
        );
        Candidates {
            cursor: vec![0; sets.len()],
            prefixes: vec![BigUint::zero(); sets.len() + 1],
            stale_from: 0,
            sets,
            limits,
            explored: 0,
            yielded: 0,
            exhausted,
            truncated: false,
        }
    }

    /// Size of the full search space, or `None` if it overflows `u128`.
    ///
    /// Zero when the input is empty or contains an unknown character.
    pub fn total_combinations(&self) -> Option<u128> {
        product(&self.sets)
    }

    /// Assignments visited so far, valid or not.
    pub fn explored(&self) -> u64 {
        self.explored
    }

    /// True once a cap ended the search before the product was exhausted.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Value of the current assignment.
    ///
    /// Only positions changed since the last call are folded in again, so an
    /// odometer step usually costs one multiply-add instead of a full rebuild.
    fn current_value(&mut self) -> &BigUint {
        for pos in self.stale_from..self.sets.len() {
            let digit = self.sets[pos][self.cursor[pos]];
            let next = &self.prefixes[pos] * u32::from(BASE) + u32::from(digit);
            self.prefixes[pos + 1] = next;
        }
        self.stale_from = self.sets.len();
        &self.prefixes[self.sets.len()]
    }

    /// Moves the odometer one step; the last position turns fastest.
    fn advance(&mut self) {
        for pos in (0..self.cursor.len()).rev() {
            self.cursor[pos] += 1;
            self.stale_from = pos;
            if self.cursor[pos] < self.sets[pos].len() {
                return;
            }
            self.cursor[pos] = 0;
        }
        self.exhausted = true;
    }

    fn stop_if_capped(&mut self) -> bool {
        let combinations_spent = self
            .limits
            .max_combinations
            .is_some_and(|max| self.explored >= max);
        let results_spent = self
            .limits
            .max_results
            .is_some_and(|max| self.yielded >= max);

        if combinations_spent || results_spent {
            self.exhausted = true;
            self.truncated = true;
            if combinations_spent {
                tracing::warn!(
                    explored = self.explored,
                    yielded = self.yielded,
                    "candidate search truncated at the combination cap; the original may be missing"
                );
            } else {
                tracing::debug!(yielded = self.yielded, "candidate search reached the result cap");
            }
        }
        self.exhausted
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while !self.exhausted {
            if self.stop_if_capped() {
                break;
            }

            let bytes = radix::to_bytes(self.current_value());
            self.explored += 1;
            self.advance();

            // Invalid UTF-8 is a routine miss, not an error
            if let Ok(text) = String::from_utf8(bytes) {
                self.yielded += 1;
                return Some(text);
            }
        }
        None
    }
}

impl FusedIterator for Candidates<'_> {}

fn product(sets: &[&[u16]]) -> Option<u128> {
    if sets.is_empty() {
        return Some(0);
    }
    sets.iter()
        .try_fold(1u128, |acc, set| acc.checked_mul(set.len() as u128))
}
