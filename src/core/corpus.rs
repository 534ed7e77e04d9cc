use crate::encoders::algorithms::errors::CorpusLoadError;
use std::path::Path;

/// An ordered collection of cleaned reference texts.
///
/// Every text is stored without whitespace or punctuation, so character
/// offsets line up across editions of the same document. Text order is part
/// of the convention shared by encoder and decoder.
///
/// # Example
///
/// ```
/// use base1000::ReferenceCorpus;
///
/// let corpus = ReferenceCorpus::from_texts(["天地玄黄，宇宙洪荒。"]);
/// assert_eq!(corpus.texts()[0], "天地玄黄宇宙洪荒");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReferenceCorpus {
    texts: Vec<String>,
}

impl ReferenceCorpus {
    /// Creates an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a corpus from raw texts, cleaning each one.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Self::new();
        for text in texts {
            corpus.push_text(text.as_ref());
        }
        corpus
    }

    /// Reads and cleans UTF-8 reference texts, keeping the given order.
    pub fn load<I, P>(paths: I) -> Result<Self, CorpusLoadError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut corpus = Self::new();
        for path in paths {
            corpus.push_file(path)?;
        }
        Ok(corpus)
    }

    /// Reads, cleans and appends one UTF-8 reference text.
    pub fn push_file(&mut self, path: impl AsRef<Path>) -> Result<(), CorpusLoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| CorpusLoadError::new(path, e))?;
        tracing::debug!(path = %path.display(), bytes = raw.len(), "loaded reference text");
        self.push_text(&raw);
        Ok(())
    }

    /// Cleans and appends one raw text.
    pub fn push_text(&mut self, raw: &str) {
        self.texts.push(clean(raw));
    }

    /// Returns the cleaned texts in order.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Strips whitespace and punctuation from a raw text.
pub fn clean(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !c.is_whitespace() && !is_punctuation(c))
        .collect()
}

fn is_punctuation(c: char) -> bool {
    if c.is_ascii_punctuation() {
        return true;
    }
    match c {
        // CJK Symbols and Punctuation also holds letters such as 々 and 〇
        '\u{3000}'..='\u{303F}' => !c.is_alphanumeric(),
        '\u{2010}'..='\u{205E}'   // General Punctuation
        | '\u{FE10}'..='\u{FE1F}' // Vertical forms
        | '\u{FE30}'..='\u{FE4F}' // CJK compatibility forms
        | '\u{FF01}'..='\u{FF0F}'
        | '\u{FF1A}'..='\u{FF20}'
        | '\u{FF3B}'..='\u{FF40}'
        | '\u{FF5B}'..='\u{FF65}' => true,
        _ => false,
    }
}
