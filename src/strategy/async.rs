//! Asynchronous batch processing strategy
//!
//! Reads records in batches with the csv-async reader and fans each batch
//! out across tokio worker tasks. Encoding is a pure function of the record,
//! so workers share nothing; results are joined back in input order.
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     └── per batch: chunks → tokio tasks → generate_row → ordered join
//! ```

use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::{write_boletos_csv, InputRecord, OutputRecord};
use crate::strategy::{generate_row, ProcessingStrategy};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Configuration for batch processing
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of records per batch
    pub batch_size: usize,
    /// Number of worker threads, and of tasks each batch is split into
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig; zero values fall back to the defaults
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            warn!(
                batch_size,
                default = default.batch_size,
                "Invalid batch_size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            warn!(
                max_concurrent_batches,
                default = default.max_concurrent_batches,
                "Invalid max_concurrent_batches, using default"
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Encode one batch across worker tasks, preserving order
    async fn process_batch(&self, batch: Vec<InputRecord>) -> Result<Vec<OutputRecord>, String> {
        let chunk_size = batch.len().div_ceil(self.config.max_concurrent_batches).max(1);

        let mut handles = Vec::with_capacity(self.config.max_concurrent_batches);
        let mut records = batch.into_iter().peekable();
        while records.peek().is_some() {
            let chunk: Vec<InputRecord> = records.by_ref().take(chunk_size).collect();
            handles.push(tokio::spawn(async move {
                chunk
                    .into_iter()
                    .filter_map(generate_row)
                    .collect::<Vec<_>>()
            }));
        }

        let mut results = Vec::new();
        for handle in handles {
            let rows = handle
                .await
                .map_err(|e| format!("Worker task failed: {}", e))?;
            results.extend(rows);
        }
        Ok(results)
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        let boletos = runtime.block_on(async {
            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| format!("Failed to open file '{}': {}", input_path.display(), e))?;

            // csv-async reads through the futures AsyncRead traits
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            info!(
                input = %input_path.display(),
                batch_size = self.config.batch_size,
                workers = self.config.max_concurrent_batches,
                "Processing payment records"
            );

            let mut boletos = Vec::new();
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }
                boletos.extend(self.process_batch(batch).await?);
            }
            Ok::<_, String>(boletos)
        })?;

        write_boletos_csv(&boletos, output)?;
        info!(generated = boletos.len(), "Processing finished");

        Ok(())
    }
}
