use crate::core::corpus::ReferenceCorpus;
use crate::encoders::algorithms::errors::IndexError;
use crate::encoders::algorithms::radix::BASE;
use std::collections::HashMap;

/// Positional character index over a reference corpus.
///
/// For every offset `o < 1000` in every text, the character found there is a
/// candidate rendering of digit value `o`. The forward table is used to pick
/// output characters while encoding; the reverse table gives the decoder every
/// digit value a character may stand for. Offsets past 999 are ignored.
///
/// The index is immutable once built and is meant to be shared by reference
/// across any number of encode and decode calls.
///
/// # Example
///
/// ```
/// use base1000::CorpusIndex;
///
/// let text: String = (0..1000u32).map(|i| char::from_u32(0x4E00 + i).unwrap()).collect();
/// let index = CorpusIndex::builder().text(&text).build().unwrap();
///
/// assert_eq!(index.candidates_for_digit(0), &['一']);
/// assert_eq!(index.candidate_digits_for_char('一'), &[0]);
/// ```
#[derive(Debug, Clone)]
pub struct CorpusIndex {
    chars_by_digit: Vec<Vec<char>>,
    digits_by_char: HashMap<char, Vec<u16>>,
}

impl CorpusIndex {
    /// Creates a new CorpusIndexBuilder.
    pub fn builder() -> CorpusIndexBuilder {
        CorpusIndexBuilder::new()
    }

    /// Indexes every text of an already cleaned corpus.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::CorpusIncomplete`] if any digit value in 0-999 has
    /// no candidate character, and [`IndexError::EmptyCorpus`] if there are no
    /// texts at all.
    pub fn build(corpus: &ReferenceCorpus) -> Result<Self, IndexError> {
        Self::from_cleaned(corpus.texts().iter().map(String::as_str))
    }

    fn from_cleaned<'a>(texts: impl IntoIterator<Item = &'a str>) -> Result<Self, IndexError> {
        let mut chars_by_digit: Vec<Vec<char>> = vec![Vec::new(); BASE as usize];
        let mut digits_by_char: HashMap<char, Vec<u16>> = HashMap::new();
        let mut text_count = 0usize;

        for text in texts {
            text_count += 1;
            for (offset, c) in text.chars().take(BASE as usize).enumerate() {
                let digit = offset as u16;

                let forward = &mut chars_by_digit[offset];
                if !forward.contains(&c) {
                    forward.push(c);
                }

                let reverse = digits_by_char.entry(c).or_default();
                if let Err(pos) = reverse.binary_search(&digit) {
                    reverse.insert(pos, digit);
                }
            }
        }

        if text_count == 0 {
            return Err(IndexError::EmptyCorpus);
        }

        let missing: Vec<u16> = chars_by_digit
            .iter()
            .enumerate()
            .filter(|(_, chars)| chars.is_empty())
            .map(|(digit, _)| digit as u16)
            .collect();
        if !missing.is_empty() {
            return Err(IndexError::corpus_incomplete(missing));
        }

        digits_by_char.shrink_to_fit();
        let index = CorpusIndex {
            chars_by_digit,
            digits_by_char,
        };
        tracing::debug!(
            texts = text_count,
            alphabet = index.alphabet_size(),
            max_ambiguity = index.max_ambiguity(),
            "built corpus index"
        );
        Ok(index)
    }

    /// Characters that may represent `digit`, in first-seen order.
    ///
    /// Returns an empty slice for values outside 0-999.
    pub fn candidates_for_digit(&self, digit: u16) -> &[char] {
        self.chars_by_digit
            .get(digit as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Digit values `c` may stand for, ascending.
    ///
    /// Returns an empty slice for characters that never occur below offset 1000.
    pub fn candidate_digits_for_char(&self, c: char) -> &[u16] {
        self.digits_by_char
            .get(&c)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if `c` occurs at some offset below 1000.
    pub fn contains_char(&self, c: char) -> bool {
        self.digits_by_char.contains_key(&c)
    }

    /// Number of distinct indexed characters.
    pub fn alphabet_size(&self) -> usize {
        self.digits_by_char.len()
    }

    /// Size of the largest candidate digit set of any character.
    pub fn max_ambiguity(&self) -> usize {
        self.digits_by_char.values().map(Vec::len).max().unwrap_or(0)
    }
}

/// Builder for constructing a CorpusIndex from raw texts.
///
/// Texts passed to the builder are cleaned the same way
/// [`ReferenceCorpus`] cleans them.
///
/// # Example
///
/// ```
/// use base1000::CorpusIndex;
///
/// let a: String = (0..1000u32).map(|i| char::from_u32(0x4E00 + i).unwrap()).collect();
/// let b: String = (0..1000u32).map(|i| char::from_u32(0x5E00 + i).unwrap()).collect();
/// let index = CorpusIndex::builder().texts([a, b]).build().unwrap();
///
/// assert_eq!(index.candidates_for_digit(1).len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct CorpusIndexBuilder {
    corpus: ReferenceCorpus,
}

impl CorpusIndexBuilder {
    /// Creates a new CorpusIndexBuilder with no texts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one raw reference text.
    pub fn text(mut self, raw: impl AsRef<str>) -> Self {
        self.corpus.push_text(raw.as_ref());
        self
    }

    /// Adds several raw reference texts in order.
    pub fn texts<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for text in texts {
            self.corpus.push_text(text.as_ref());
        }
        self
    }

    /// Builds the CorpusIndex.
    ///
    /// # Errors
    ///
    /// See [`CorpusIndex::build`].
    pub fn build(self) -> Result<CorpusIndex, IndexError> {
        CorpusIndex::build(&self.corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distinct_text(start: u32) -> String {
        (0..1000u32)
            .map(|i| char::from_u32(start + i).unwrap())
            .collect()
    }

    #[test]
    fn test_distinct_text_is_unambiguous() {
        let index = CorpusIndex::builder().text(distinct_text(0x4E00)).build().unwrap();
        assert_eq!(index.alphabet_size(), 1000);
        assert_eq!(index.max_ambiguity(), 1);
        for digit in 0..BASE {
            let chars = index.candidates_for_digit(digit);
            assert_eq!(chars.len(), 1);
            assert_eq!(index.candidate_digits_for_char(chars[0]), &[digit]);
        }
    }

    #[test]
    fn test_forward_and_reverse_agree() {
        let mut second: Vec<char> = distinct_text(0x4E00).chars().collect();
        second.rotate_left(3);
        let second: String = second.into_iter().collect();

        let index = CorpusIndex::builder()
            .text(distinct_text(0x4E00))
            .text(&second)
            .build()
            .unwrap();

        for digit in 0..BASE {
            for &c in index.candidates_for_digit(digit) {
                assert!(index.candidate_digits_for_char(c).contains(&digit));
            }
        }
        for c in distinct_text(0x4E00).chars() {
            for &digit in index.candidate_digits_for_char(c) {
                assert!(index.candidates_for_digit(digit).contains(&c));
            }
        }
        assert_eq!(index.max_ambiguity(), 2);
    }

    #[test]
    fn test_offsets_past_999_are_ignored() {
        let mut text = distinct_text(0x4E00);
        text.push('尾');
        let index = CorpusIndex::builder().text(&text).build().unwrap();
        assert!(!index.contains_char('尾'));
        assert!(index.candidate_digits_for_char('尾').is_empty());
    }

    #[test]
    fn test_repeated_char_has_sorted_digits() {
        let mut chars: Vec<char> = distinct_text(0x4E00).chars().collect();
        chars[17] = '天';
        chars[5] = '天';
        let index = CorpusIndex::builder()
            .text(chars.iter().collect::<String>())
            .build()
            .unwrap();
        assert_eq!(index.candidate_digits_for_char('天'), &[5, 17]);
    }

    #[test]
    fn test_short_text_is_incomplete() {
        let short: String = distinct_text(0x4E00).chars().take(998).collect();
        let err = CorpusIndex::builder().text(short).build().unwrap_err();
        assert_eq!(err, IndexError::CorpusIncomplete { missing: vec![998, 999] });
    }

    #[test]
    fn test_short_texts_can_complete_each_other() {
        let full = distinct_text(0x4E00);
        let head: String = full.chars().take(600).collect();
        // Second edition only differs before offset 600
        let mut other: Vec<char> = full.chars().collect();
        for c in other.iter_mut().take(600) {
            *c = '零';
        }
        let other: String = other.into_iter().collect();
        let index = CorpusIndex::builder().text(head).text(other).build().unwrap();
        assert_eq!(index.candidate_digits_for_char('零').len(), 600);
    }

    #[test]
    fn test_empty_corpus() {
        let err = CorpusIndex::builder().build().unwrap_err();
        assert_eq!(err, IndexError::EmptyCorpus);
    }

    #[test]
    fn test_out_of_range_digit() {
        let index = CorpusIndex::builder().text(distinct_text(0x4E00)).build().unwrap();
        assert!(index.candidates_for_digit(1000).is_empty());
    }
}
