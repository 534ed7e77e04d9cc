use crate::cli::args::SearchArgs;
use base1000::{CorpusIndex, DecodeLimits, decode_with_limits};
use std::io::{self, Write};

pub fn handle(
    encoded: &str,
    args: &SearchArgs,
    limits: DecodeLimits,
    index: &CorpusIndex,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoded = encoded.trim();
    let mut candidates = decode_with_limits(encoded, index, limits);

    if encoded.is_empty() {
        tracing::info!("nothing to decode");
    } else {
        match candidates.total_combinations() {
            Some(0) => tracing::info!("input contains characters outside the corpus"),
            Some(total) => tracing::debug!(total, "searching digit assignments"),
            None => tracing::warn!("search space exceeds 2^128 assignments"),
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut found = 0usize;

    if args.json {
        let all: Vec<String> = candidates.by_ref().collect();
        found = all.len();
        serde_json::to_writer_pretty(&mut out, &all)?;
        writeln!(out)?;
    } else {
        for candidate in candidates.by_ref() {
            writeln!(out, "{}", candidate)?;
            found += 1;
        }
    }
    out.flush()?;

    let capped = limits
        .max_combinations
        .is_some_and(|max| candidates.explored() >= max);
    if candidates.is_truncated() && capped {
        tracing::warn!(found, "raise --max-combinations (0 = unlimited) to search further");
    } else {
        tracing::debug!(explored = candidates.explored(), found, "search finished");
    }

    Ok(())
}
