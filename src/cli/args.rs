use clap::{Args, Parser};
use std::path::PathBuf;

use super::global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base1000")]
#[command(version)]
#[command(about = "Hide text in the Thousand Character Classic and recover every plausible original", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub mode: Mode,

    /// Text to encode or decode (reads stdin if not provided)
    pub text: Option<String>,

    #[command(flatten)]
    pub corpus: CorpusArgs,

    #[command(flatten)]
    pub search: SearchArgs,

    /// Seed for reproducible character choices when encoding
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Exactly one operation per invocation
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct Mode {
    /// Encode the input text
    #[arg(short, long)]
    pub encode: bool,

    /// Decode the input text into every plausible original
    #[arg(short, long)]
    pub decode: bool,

    /// List available corpora
    #[arg(short, long)]
    pub list: bool,
}

/// Which reference texts to use
#[derive(Args)]
pub struct CorpusArgs {
    /// Named corpus from the registry
    #[arg(short = 'c', long, value_name = "NAME")]
    pub corpus: Option<String>,

    /// Reference text file, in order (repeatable; overrides --corpus)
    #[arg(long = "corpus-file", value_name = "PATH")]
    pub corpus_files: Vec<PathBuf>,
}

/// Decode search budget and output
#[derive(Args)]
pub struct SearchArgs {
    /// Maximum digit assignments to try (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub max_combinations: Option<u64>,

    /// Maximum candidates to print (0 = unlimited)
    #[arg(long, value_name = "N")]
    pub max_results: Option<usize>,

    /// Stop after the first candidate
    #[arg(long, conflicts_with = "max_results")]
    pub first: bool,

    /// Print output as JSON
    #[arg(long)]
    pub json: bool,
}
