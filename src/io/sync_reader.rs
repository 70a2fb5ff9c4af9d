//! Synchronous CSV reader with iterator interface
//!
//! Streams payment records from a CSV file one row at a time, delegating
//! format concerns to the csv_format module.
//!
//! ```no_run
//! use boleto_engine::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("payments.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(input) => println!("Read record {}", input.id),
//!         Err(e) => eprintln!("Skipping row: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `new()`
//! - Row errors are yielded as `Err` items carrying the file line number,
//!   and iteration continues with the next row

use crate::io::csv_format::{convert_csv_record, CsvRecord, InputRecord};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Constant memory: only the current row is held.
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    rows_read: usize,
}

impl SyncReader {
    /// Open `path` for streaming
    ///
    /// Fields are trimmed and short rows are accepted, so trailing optional
    /// columns may be left out.
    pub fn new(path: &Path) -> Result<Self, String> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open file '{}': {}", path.display(), e))?;

        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self {
            reader,
            rows_read: 0,
        })
    }

    /// File line of the row just read; the header is line 1
    fn current_line(&self) -> usize {
        self.rows_read + 1
    }
}

impl Iterator for SyncReader {
    type Item = Result<InputRecord, String>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.reader.deserialize::<CsvRecord>().next()?;
        self.rows_read += 1;

        Some(match next {
            Ok(csv_record) => convert_csv_record(csv_record)
                .map_err(|e| format!("Line {}: {}", self.current_line(), e)),
            Err(e) => Err(format!(
                "Line {}: CSV parse error: {}",
                self.current_line(),
                e
            )),
        })
    }
}
