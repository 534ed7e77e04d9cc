use clap::{ArgAction, Args};

/// Arguments that apply to every operation
#[derive(Args)]
pub struct GlobalArgs {
    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, default_value = "1048576")]
    pub max_size: usize,
}

impl GlobalArgs {
    /// Default filter when RUST_LOG is unset
    pub fn log_directive(&self) -> &'static str {
        if self.quiet {
            return "base1000=error";
        }
        match self.verbose {
            0 => "base1000=warn",
            1 => "base1000=debug",
            _ => "base1000=trace",
        }
    }
}
