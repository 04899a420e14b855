//! Asynchronous CSV reader with batch interface
//!
//! Streams rows of any of the three data files and converts them to domain
//! values in batches. Rows that fail to parse or convert are logged and
//! skipped, so one bad line never aborts a load.
//!
//! # Architecture
//!
//! ```text
//! CSV bytes → AsyncReader<R> → Batches of domain values
//!                  ↓
//!           csv_format module
//!           (*Record, convert_*_record)
//! ```

use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::types::BankError;

/// Asynchronous CSV reader
///
/// Keeps a running row count so skipped rows can be reported by position.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    source: String,
    rows: u64,
}

impl<R: AsyncRead + Unpin + Send> AsyncReader<R> {
    /// Create a new AsyncReader
    ///
    /// `source` names the input in log messages (usually the file path).
    pub fn new(reader: R, source: impl Into<String>) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            source: source.into(),
            rows: 0,
        }
    }

    /// Read up to `batch_size` rows, converting each with `convert`
    ///
    /// Returns an empty vector once the input is exhausted.
    pub async fn read_batch<T, U, F>(&mut self, batch_size: usize, convert: F) -> Vec<U>
    where
        T: DeserializeOwned,
        F: Fn(T) -> Result<U, BankError>,
    {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<T>();

        while batch.len() < batch_size {
            let Some(next) = records.next().await else {
                break;
            };
            self.rows += 1;
            // Header occupies line 1
            let line = self.rows + 1;

            match next {
                Ok(record) => match convert(record) {
                    Ok(value) => batch.push(value),
                    Err(e) => warn!(source = %self.source, line, error = %e, "Skipping row"),
                },
                Err(e) => {
                    let error = BankError::from(e);
                    warn!(source = %self.source, line, %error, "Skipping row");
                }
            }
        }

        batch
    }

    /// Rows consumed so far, including skipped ones
    pub fn rows_read(&self) -> u64 {
        self.rows
    }
}
