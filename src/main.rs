//! Boleto Engine CLI
//!
//! Generates boleto control numbers, barcodes and digitable lines from a CSV
//! file of payment records.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- payments.csv > boletos.csv
//! cargo run -- --strategy sync payments.csv > boletos.csv
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 payments.csv > boletos.csv
//! RUST_LOG=debug cargo run -- payments.csv > boletos.csv
//! ```
//!
//! Generated boletos go to stdout as CSV; logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success (rows that could not be encoded are logged and skipped)
//! - 1: Error (missing arguments, file not found, output not writable, etc.)

use boleto_engine::cli;
use boleto_engine::strategy;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config)
    };

    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        error!("{}", e);
        process::exit(1);
    }
}
