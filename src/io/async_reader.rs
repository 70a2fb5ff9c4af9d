//! Asynchronous CSV reader with batch interface
//!
//! Reads payment records through csv-async and hands them out in batches
//! for the async processing strategy.
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of InputRecords
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord, InputRecord};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use tracing::warn;

/// Asynchronous CSV reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    rows_read: usize,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            rows_read: 0,
        }
    }

    /// Read up to `batch_size` records
    ///
    /// Rows that fail to parse or convert are logged and skipped. An empty
    /// batch means the end of the file was reached.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<InputRecord> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            let next = records.next().await;
            if next.is_some() {
                self.rows_read += 1;
            }
            // Header is line 1
            let line = self.rows_read + 1;
            match next {
                Some(Ok(csv_record)) => match convert_csv_record(csv_record) {
                    Ok(input) => batch.push(input),
                    Err(e) => warn!(line, error = %e, "Skipping record"),
                },
                Some(Err(e)) => warn!(line, error = %e, "Skipping unparseable CSV row"),
                None => break,
            }
        }

        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bank;
    use futures::io::Cursor;

    const HEADER: &str =
        "id,bank,agency,account,account_dv,agreement,portfolio,sequence,due_date,issue_date,amount,ios\n";

    fn reader(rows: &str) -> AsyncReader<Cursor<Vec<u8>>> {
        AsyncReader::new(Cursor::new(format!("{}{}", HEADER, rows).into_bytes()))
    }

    fn banrisul_rows(count: usize) -> String {
        (1..=count)
            .map(|n| format!("r{},banrisul,3087,4593,,,,{},2013-05-14,,1.00,\n", n, n))
            .collect()
    }

    #[tokio::test]
    async fn test_async_reader_read_batch() {
        let mut async_reader = reader(&banrisul_rows(3));

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].id, "r1");
        assert_eq!(batch[1].id, "r2");
        assert_eq!(batch[1].record.bank(), Bank::Banrisul);

        let batch = async_reader.read_batch(2).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].id, "r3");
        assert_eq!(batch[0].record.sequence(), Some(3));

        assert!(async_reader.read_batch(2).await.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_csv() {
        let mut async_reader = reader("");
        assert_eq!(async_reader.read_batch(10).await.len(), 0);
    }

    #[tokio::test]
    async fn test_async_reader_skips_invalid_record() {
        let mut async_reader = reader(
            "x1,nobank,3087,4593,,,,1,2013-05-14,,1.00,\n\
             x2,banrisul,3087,4593,,,,2,2013-05-14,,1.00,\n",
        );

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].id, "x2");
    }

    #[tokio::test]
    async fn test_async_reader_batch_size_larger_than_records() {
        let mut async_reader = reader(&banrisul_rows(1));
        assert_eq!(async_reader.read_batch(100).await.len(), 1);
    }

    #[tokio::test]
    async fn test_async_reader_whitespace_handling() {
        let mut async_reader = reader("  w1 ,  caixa , 3087 , 4593 ,, 870 , SR , 2 , 2013-05-14 ,, 1.00 ,\n");

        let batch = async_reader.read_batch(10).await;
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].id, "w1");
        assert_eq!(batch[0].record.bank(), Bank::Caixa);
        assert_eq!(batch[0].record.portfolio(), Some("SR"));
    }
}
