//! Per-account resume orchestration
//!
//! `AccountResumeService` validates its inputs, fetches one bounded window
//! from the [`TransactionLedger`] and hands it to the aggregation module.
//!
//! # Architecture
//!
//! ```text
//! AccountResumeService
//!     ├── validator                    (input checks, before any fetch)
//!     ├── Arc<dyn TransactionLedger>   (one fetch per resume)
//!     └── aggregation                  (plain sum or net over the window)
//! ```

use std::sync::Arc;

use tracing::debug;

use super::aggregation::{aggregate, ReductionMode};
use super::config::ResumeConfig;
use super::traits::TransactionLedger;
use super::validator::{validate_account_id, validate_type_and_account_id};
use crate::types::{AccountId, BankError, Resume};

/// Computes resumes for a single bank account
///
/// Cloning is cheap; clones share the same ledger.
#[derive(Clone)]
pub struct AccountResumeService {
    ledger: Arc<dyn TransactionLedger>,
    config: ResumeConfig,
}

impl AccountResumeService {
    /// Create a new AccountResumeService
    ///
    /// # Arguments
    ///
    /// * `ledger` - Source of transaction windows
    /// * `config` - Supplies the window cap
    pub fn new(ledger: Arc<dyn TransactionLedger>, config: ResumeConfig) -> Self {
        Self { ledger, config }
    }

    /// Window cap and fan-out settings shared with the report composer
    pub fn config(&self) -> &ResumeConfig {
        &self.config
    }

    /// Gross flow of one transaction type on one account
    ///
    /// Both arguments are validated before the ledger is touched. The total is
    /// the plain sum of the type-filtered window.
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - bad type and/or bad account id (both reported)
    /// * anything the ledger returns, unchanged
    pub async fn resume_by_type(
        &self,
        tx_type: Option<&str>,
        account_id: Option<i64>,
    ) -> Result<Resume, BankError> {
        let (tx_type, account_id) = validate_type_and_account_id(tx_type, account_id)?;

        debug!(account_id, %tx_type, "Fetching typed transaction window");
        let window = self
            .ledger
            .find_transactions_by_type_and_account_id(tx_type, account_id, self.config.window_cap)
            .await?;

        aggregate(window, self.config.window_cap, ReductionMode::PlainSum)
    }

    /// Net balance impact of one account
    ///
    /// # Errors
    ///
    /// * `InvalidArgument` - absent or non-positive account id
    /// * anything the ledger returns, unchanged
    pub async fn full_resume(&self, account_id: Option<i64>) -> Result<Resume, BankError> {
        let account_id = validate_account_id(account_id)?;
        self.full_resume_for(account_id).await
    }

    async fn full_resume_for(&self, account_id: AccountId) -> Result<Resume, BankError> {
        debug!(account_id, "Fetching transaction window");
        let window = self
            .ledger
            .find_transactions_by_account_id(account_id, self.config.window_cap)
            .await?;

        aggregate(window, self.config.window_cap, ReductionMode::Net)
    }
}
