use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while building a [`CorpusIndex`](crate::CorpusIndex).
#[derive(Debug, PartialEq, Eq)]
pub enum IndexError {
    /// No reference texts were supplied
    EmptyCorpus,
    /// Some digit values have no character at their offset in any text
    CorpusIncomplete { missing: Vec<u16> },
}

impl IndexError {
    /// Create a CorpusIncomplete error from the uncovered digit values
    pub fn corpus_incomplete(missing: Vec<u16>) -> Self {
        IndexError::CorpusIncomplete { missing }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            IndexError::EmptyCorpus => {
                write_header(f, use_color, "corpus contains no reference texts")?;
                write_hint(f, use_color, "supply at least one text of 1000 characters")
            }
            IndexError::CorpusIncomplete { missing } => {
                write_header(
                    f,
                    use_color,
                    &format!(
                        "corpus is incomplete: {} digit value(s) have no character",
                        missing.len()
                    ),
                )?;
                writeln!(f)?;

                // Show the first few gaps only
                let shown: Vec<String> = missing.iter().take(10).map(|d| format!("{:03}", d)).collect();
                let suffix = if missing.len() > 10 { ", ..." } else { "" };
                writeln!(f, "  missing offsets: {}{}", shown.join(", "), suffix)?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "every offset 0-999 must hold a character in at least one text",
                )
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// Errors that can occur during encoding.
#[derive(Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// The input string is empty
    EmptyInput,
    /// The input starts with U+0000, which the integer conversion would drop
    LeadingNul,
    /// A digit value has no candidate character in the index
    UnrepresentableDigit { digit: u16 },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            EncodeError::EmptyInput => write_header(f, use_color, "cannot encode empty input"),
            EncodeError::LeadingNul => {
                write_header(f, use_color, "cannot encode text starting with a NUL character")?;
                write_hint(
                    f,
                    use_color,
                    "leading zero bytes are lost in the base-1000 conversion",
                )
            }
            EncodeError::UnrepresentableDigit { digit } => {
                write_header(
                    f,
                    use_color,
                    &format!("digit value {:03} has no character in the corpus", digit),
                )?;
                write_hint(f, use_color, "rebuild the index from a complete corpus")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// Error raised when a reference text cannot be read.
#[derive(Debug)]
pub struct CorpusLoadError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl CorpusLoadError {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for CorpusLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();
        write_header(
            f,
            use_color,
            &format!("cannot read reference text {:?}: {}", self.path, self.source),
        )
    }
}

impl std::error::Error for CorpusLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Error when a corpus name is not present in the registry
#[derive(Debug)]
pub struct CorpusNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl CorpusNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for CorpusNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();
        write_header(f, use_color, &format!("corpus '{}' not found", self.name))?;

        if let Some(suggestion) = &self.suggestion {
            write_hint(f, use_color, &format!("did you mean '{}'?", suggestion))?;
        } else {
            write_hint(f, use_color, "run `base1000 --list` to see available corpora")?;
        }
        Ok(())
    }
}

impl std::error::Error for CorpusNotFoundError {}

/// Find the closest matching corpus name using Levenshtein distance
pub fn find_closest_corpus(name: &str, available: &[String]) -> Option<String> {
    let mut best: Option<(&String, usize)> = None;

    for candidate in available {
        let distance = levenshtein_distance(name, candidate);
        if distance <= 3 && best.is_none_or(|(_, d)| distance < d) {
            best = Some((candidate, distance));
        }
    }

    best.map(|(s, _)| s.clone())
}

fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, hint: &str) -> fmt::Result {
    if use_color {
        write!(f, "\n\x1b[1;36mhint:\x1b[0m {}", hint)
    } else {
        write!(f, "\nhint: {}", hint)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
