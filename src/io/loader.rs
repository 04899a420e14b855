//! Loading an [`InMemoryBank`] from CSV files
//!
//! Files are read in dependency order: customers, then accounts, then
//! transactions. A row that references an unknown parent is skipped with a
//! warning, as is a row that fails to parse. Only a missing or unreadable
//! file aborts the load.

use std::path::{Path, PathBuf};

use futures::io::AsyncRead;
use serde::de::DeserializeOwned;
use tokio_util::compat::TokioAsyncReadCompatExt;
use tracing::{debug, info, warn};

use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::{
    convert_account_record, convert_customer_record, convert_transaction_record,
};
use crate::store::InMemoryBank;
use crate::types::{BankAccount, BankError, Customer, Transaction};

/// Rows converted per read
pub const LOAD_BATCH_SIZE: usize = 1000;

/// Locations of the three data files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankFiles {
    pub customers: PathBuf,
    pub accounts: PathBuf,
    pub transactions: PathBuf,
}

async fn open_csv(
    path: &Path,
) -> Result<AsyncReader<tokio_util::compat::Compat<tokio::fs::File>>, BankError> {
    let file = tokio::fs::File::open(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BankError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            BankError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            }
        }
    })?;

    Ok(AsyncReader::new(file.compat(), path.display().to_string()))
}

/// Feed every converted row of `reader` to `insert`, one batch at a time
///
/// Returns how many rows `insert` accepted.
async fn load_rows<R, T, U, C, I>(reader: &mut AsyncReader<R>, convert: C, mut insert: I) -> usize
where
    R: AsyncRead + Unpin + Send,
    T: DeserializeOwned,
    C: Fn(T) -> Result<U, BankError>,
    I: FnMut(U) -> bool,
{
    let mut stored = 0usize;
    loop {
        let batch = reader
            .read_batch::<T, U, _>(LOAD_BATCH_SIZE, &convert)
            .await;
        if batch.is_empty() {
            return stored;
        }
        for value in batch {
            if insert(value) {
                stored += 1;
            }
        }
    }
}

/// Load customers, accounts and transactions into a fresh bank
pub async fn load_bank(files: &BankFiles) -> Result<InMemoryBank, BankError> {
    let bank = InMemoryBank::new();

    let mut reader = open_csv(&files.customers).await?;
    let customers = load_rows(&mut reader, convert_customer_record, |customer: Customer| {
        let id = customer.id;
        let fresh = bank.add_customer(customer);
        if !fresh {
            warn!(customer_id = id, "Duplicate customer id ignored");
        }
        fresh
    })
    .await;
    debug!(rows = reader.rows_read(), stored = customers, "Read customers file");

    let mut reader = open_csv(&files.accounts).await?;
    let accounts = load_rows(&mut reader, convert_account_record, |account: BankAccount| {
        let id = account.id;
        match bank.add_account(account) {
            Ok(true) => true,
            Ok(false) => {
                warn!(account_id = id, "Duplicate account id ignored");
                false
            }
            Err(e) => {
                warn!(account_id = id, error = %e, "Skipping account");
                false
            }
        }
    })
    .await;
    debug!(rows = reader.rows_read(), stored = accounts, "Read accounts file");

    let mut reader = open_csv(&files.transactions).await?;
    let transactions = load_rows(
        &mut reader,
        convert_transaction_record,
        |transaction: Transaction| {
            let id = transaction.id;
            match bank.add_transaction(transaction) {
                Ok(true) => true,
                Ok(false) => {
                    warn!(transaction_id = id, "Duplicate transaction id ignored");
                    false
                }
                Err(e) => {
                    warn!(transaction_id = id, error = %e, "Skipping transaction");
                    false
                }
            }
        },
    )
    .await;
    debug!(rows = reader.rows_read(), stored = transactions, "Read transactions file");

    info!(customers, accounts, transactions, "Bank data loaded");
    Ok(bank)
}
