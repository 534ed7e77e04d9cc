mod args;
mod config;
mod global;
mod handlers;

use base1000::CorpusRegistry;
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use args::Cli;
use global::GlobalArgs;

fn init_tracing(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(global.log_directive()));

    let use_color = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_color)
        .with_target(false)
        .without_time()
        .init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    // Load corpus configuration with user overrides
    let registry = CorpusRegistry::load_with_overrides()?;

    if cli.mode.list {
        return handlers::list::handle(cli.search.json, &registry);
    }

    let index = config::load_index(&cli.corpus, &registry)?;
    let input = config::read_input(cli.text, &cli.global)?;

    if cli.mode.encode {
        handlers::encode::handle(&input, cli.seed, &index)
    } else {
        let limits = config::decode_limits(&cli.search, &registry);
        handlers::decode::handle(&input, &cli.search, limits, &index)
    }
}
