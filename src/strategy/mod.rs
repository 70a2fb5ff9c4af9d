//! Processing strategy module for batch boleto generation
//!
//! A strategy is a complete pipeline: read payment records from CSV, encode
//! each one, write the generated boletos. Different implementations
//! (synchronous, asynchronous batch) are selected at runtime.

use crate::cli::StrategyType;
use crate::core::generate;
use crate::io::{InputRecord, OutputRecord};
use std::io::Write;
use std::path::Path;
use tracing::warn;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete generation pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Generate boletos for every record in `input_path` and write them to `output`
    ///
    /// Output rows keep the input order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened
    /// - Output cannot be written
    /// - A worker fails (async only)
    ///
    /// Rows that fail to parse and records that fail to encode are logged
    /// and skipped; they never abort the run.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String>;
}

/// Encode one input record, logging and dropping it on failure
pub(crate) fn generate_row(input: InputRecord) -> Option<OutputRecord> {
    match generate(&input.record) {
        Ok(boleto) => Some(OutputRecord {
            id: input.id,
            boleto,
        }),
        Err(e) => {
            warn!(id = %input.id, error = %e, "Skipping record");
            None
        }
    }
}

/// Create a processing strategy based on the specified strategy type
///
/// `config` is only used by the async strategy; `None` means defaults.
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
