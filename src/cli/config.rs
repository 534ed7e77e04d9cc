use base1000::{CorpusIndex, CorpusRegistry, DecodeLimits, ReferenceCorpus};
use std::io::{self, Read};

use super::args::{CorpusArgs, SearchArgs};
use super::global::GlobalArgs;

/// Builds the index from explicit files, a named corpus, or the default one.
pub fn load_index(
    args: &CorpusArgs,
    config: &CorpusRegistry,
) -> Result<CorpusIndex, Box<dyn std::error::Error>> {
    if !args.corpus_files.is_empty() {
        let corpus = ReferenceCorpus::load(&args.corpus_files)?;
        return Ok(CorpusIndex::build(&corpus)?);
    }

    let name = args.corpus.as_deref().unwrap_or_else(|| config.default_corpus());
    tracing::debug!(corpus = name, "loading corpus");
    config.build_index(name)
}

/// Decode limits from config, overridden by CLI flags. Zero lifts a cap.
pub fn decode_limits(args: &SearchArgs, config: &CorpusRegistry) -> DecodeLimits {
    let mut limits = config.settings.decode.limits();

    if let Some(max) = args.max_combinations {
        limits.max_combinations = (max > 0).then_some(max);
    }
    if let Some(max) = args.max_results {
        limits.max_results = (max > 0).then_some(max);
    }
    if args.first {
        limits.max_results = Some(1);
    }

    limits
}

/// Returns the positional text, or stdin without its trailing newline.
pub fn read_input(
    text: Option<String>,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let input = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            let trimmed = buffer.trim_end_matches(['\n', '\r']).len();
            buffer.truncate(trimmed);
            buffer
        }
    };

    if global.max_size > 0 && input.len() > global.max_size {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use --max-size 0 to lift the limit.",
            input.len(),
            global.max_size
        )
        .into());
    }

    Ok(input)
}
