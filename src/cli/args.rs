use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Generate boleto barcodes and digitable lines from payment records
#[derive(Parser, Debug)]
#[command(name = "boleto-engine")]
#[command(about = "Generate boleto barcodes and digitable lines from payment records", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing payment records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Processing strategy
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' streams records, 'async' encodes batches in parallel"
    )]
    pub strategy: StrategyType,

    /// Number of records per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of records per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of worker threads (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Number of worker threads encoding each batch (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,
}

/// How the input file is read and its records encoded
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    /// Stream records one by one on the calling thread
    Sync,
    /// Read batches and encode each one across tokio tasks
    Async,
}

impl CliArgs {
    /// BatchConfig from the CLI arguments, defaults filling the gaps
    ///
    /// Zero values are replaced by defaults with a logged warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        let default = BatchConfig::default();
        BatchConfig::new(
            self.batch_size.unwrap_or(default.batch_size),
            self.max_concurrent_batches
                .unwrap_or(default.max_concurrent_batches),
        )
    }
}
