//! I/O module
//!
//! Handles CSV loading and JSON output.
//!
//! # Components
//!
//! - `csv_format` - Row structures, row conversion, output serialization
//! - `async_reader` - Asynchronous CSV reader with batch reading interface
//! - `loader` - Builds an in-memory bank from the three data files

pub mod async_reader;
pub mod csv_format;
pub mod loader;

pub use async_reader::AsyncReader;
pub use csv_format::{
    convert_account_record, convert_customer_record, convert_transaction_record, write_json,
    AccountRecord, CustomerRecord, TransactionRecord,
};
pub use loader::{load_bank, BankFiles, LOAD_BATCH_SIZE};
