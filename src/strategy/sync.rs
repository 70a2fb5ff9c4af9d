//! Synchronous processing strategy
//!
//! Streams rows through `SyncReader`, encodes each record with the core
//! generator and writes the results with `csv_format::write_boletos_csv`.
//! Single-threaded; rows are processed one at a time.

use crate::io::csv_format::write_boletos_csv;
use crate::io::sync_reader::SyncReader;
use crate::strategy::{generate_row, ProcessingStrategy};
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use boleto_engine::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy;
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("payments.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let reader = SyncReader::new(input_path)?;
        info!(input = %input_path.display(), "Processing payment records");

        let mut boletos = Vec::new();
        let mut skipped = 0usize;
        for result in reader {
            match result {
                Ok(input) => match generate_row(input) {
                    Some(row) => boletos.push(row),
                    None => skipped += 1,
                },
                Err(e) => {
                    warn!(error = %e, "Skipping row");
                    skipped += 1;
                }
            }
        }

        write_boletos_csv(&boletos, output)?;
        info!(generated = boletos.len(), skipped, "Processing finished");

        Ok(())
    }
}
