//! parity-sum CLI
//!
//! Classifies integer tokens by parity and prints the sum of the even ones.

use std::io::{self, Write};

use clap::Parser;
use parity_sum::process_data;
use tracing_subscriber::EnvFilter;

const SAMPLE: [&str; 6] = ["1", "2", "3", "four", "5", "6"];

#[derive(Parser)]
#[command(name = "parity-sum")]
#[command(about = "Classify integer tokens by parity and sum the even ones")]
struct Cli {
    /// Tokens to process (defaults to a built-in sample; use `--` before tokens that start with `-`)
    #[arg(allow_negative_numbers = true, conflicts_with = "empty")]
    tokens: Vec<String>,

    /// Process an empty list instead of the sample
    #[arg(long)]
    empty: bool,

    /// Log each classified token to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    let total = if cli.empty {
        process_data::<&str>(Some(&[]))
    } else if cli.tokens.is_empty() {
        process_data(Some(&SAMPLE[..]))
    } else {
        process_data(Some(cli.tokens.as_slice()))
    };

    // Ignore a closed stdout, as the status lines do
    let _ = writeln!(io::stdout().lock(), "Total sum of even numbers: {}", total);

    Ok(())
}
