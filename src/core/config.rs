use crate::core::corpus::ReferenceCorpus;
use crate::core::index::CorpusIndex;
use crate::encoders::algorithms::errors::{CorpusNotFoundError, find_closest_corpus};
use crate::encoders::candidates::{DEFAULT_MAX_COMBINATIONS, DecodeLimits};
use serde::Deserialize;
use std::collections::HashMap;

/// Returns the text of a corpus compiled into the library.
pub fn builtin_text(name: &str) -> Option<&'static str> {
    match name {
        "qianziwen" => Some(include_str!("../../corpora/qianziwen.txt")),
        "qianziwen_traditional" => Some(include_str!("../../corpora/qianziwen_traditional.txt")),
        _ => None,
    }
}

/// Configuration for a single named corpus loaded from TOML.
///
/// Texts are taken in order: built-in texts first, then files.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorpusConfig {
    /// Human readable description
    #[serde(default)]
    pub description: Option<String>,
    /// Names of texts compiled into the library
    #[serde(default)]
    pub builtin: Vec<String>,
    /// Paths to UTF-8 text files (`~` is expanded)
    #[serde(default)]
    pub files: Vec<String>,
}

impl CorpusConfig {
    /// Loads and cleans every text this corpus names.
    pub fn load_corpus(&self) -> Result<ReferenceCorpus, Box<dyn std::error::Error>> {
        let builtins = self
            .builtin
            .iter()
            .map(|name| builtin_text(name).ok_or_else(|| format!("unknown built-in text '{}'", name)))
            .collect::<Result<Vec<_>, _>>()?;
        let mut corpus = ReferenceCorpus::from_texts(builtins);

        for file in &self.files {
            corpus.push_file(shellexpand::tilde(file).into_owned())?;
        }

        Ok(corpus)
    }
}

/// Decode search limits as written in TOML.
///
/// An absent value keeps the library default; zero means unlimited.
#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct DecodeSettings {
    #[serde(default)]
    pub max_combinations: Option<u64>,
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl DecodeSettings {
    /// Converts to library limits.
    pub fn limits(&self) -> DecodeLimits {
        let max_combinations = match self.max_combinations {
            None => Some(DEFAULT_MAX_COMBINATIONS),
            Some(0) => None,
            Some(n) => Some(n),
        };
        DecodeLimits {
            max_combinations,
            max_results: self.max_results.filter(|&n| n > 0),
        }
    }

    fn merge(&mut self, other: DecodeSettings) {
        if other.max_combinations.is_some() {
            self.max_combinations = other.max_combinations;
        }
        if other.max_results.is_some() {
            self.max_results = other.max_results;
        }
    }
}

/// Global settings for base1000.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Corpus used when none is named
    #[serde(default)]
    pub default_corpus: Option<String>,
    /// Decode search limits
    #[serde(default)]
    pub decode: DecodeSettings,
}

/// Collection of corpus configurations loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct CorpusRegistry {
    /// Map of corpus names to their configurations
    #[serde(default)]
    pub corpora: HashMap<String, CorpusConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl CorpusRegistry {
    /// Parses corpus configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in corpus configurations.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../corpora/corpora.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in corpora (from library)
    /// 2. `~/.config/base1000/corpora.toml` (user overrides)
    /// 3. `./corpora.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching corpus names.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base1000").join("corpora.toml");
            config.merge_file(&user_config_path);
        }

        config.merge_file(std::path::Path::new("corpora.toml"));

        Ok(config)
    }

    fn merge_file(&mut self, path: &std::path::Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => {
                tracing::debug!(path = %path.display(), "merged corpus overrides");
                self.merge(other);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load corpus config");
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Corpora from `other` replace corpora with the same name in `self`;
    /// settings present in `other` win.
    pub fn merge(&mut self, other: CorpusRegistry) {
        for (name, corpus) in other.corpora {
            self.corpora.insert(name, corpus);
        }
        if other.settings.default_corpus.is_some() {
            self.settings.default_corpus = other.settings.default_corpus;
        }
        self.settings.decode.merge(other.settings.decode);
    }

    /// Retrieves a corpus configuration by name.
    pub fn get_corpus(&self, name: &str) -> Option<&CorpusConfig> {
        self.corpora.get(name)
    }

    /// Name of the corpus to use when none is given.
    pub fn default_corpus(&self) -> &str {
        self.settings.default_corpus.as_deref().unwrap_or("qianziwen")
    }

    /// Loads and indexes a named corpus.
    pub fn build_index(&self, name: &str) -> Result<CorpusIndex, Box<dyn std::error::Error>> {
        let corpus_config = self.get_corpus(name).ok_or_else(|| {
            let available: Vec<String> = self.corpora.keys().cloned().collect();
            CorpusNotFoundError::new(name, find_closest_corpus(name, &available))
        })?;
        let corpus = corpus_config.load_corpus()?;
        Ok(CorpusIndex::build(&corpus)?)
    }
}
