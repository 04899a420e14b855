//! Thread-safe in-memory transaction ledger
//!
//! This module provides the `TransactionStore` struct, an in-memory
//! implementation of [`TransactionLedger`] built on `DashMap`.
//!
//! # Design
//!
//! Transactions are kept per account in insertion order, which is the ledger
//! order every query returns. A second map indexes transaction ids so that a
//! repeated id is ignored (first occurrence wins).
//!
//! # Thread Safety
//!
//! All operations are safe to call concurrently. Appends to different
//! accounts proceed in parallel; appends to the same account are serialized
//! by the account's map entry.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::core::TransactionLedger;
use crate::types::{AccountId, BankError, Transaction, TransactionId, TransactionType};

/// Thread-safe ledger of transactions grouped by account
#[derive(Debug, Default)]
pub struct TransactionStore {
    /// Per-account transactions in insertion order
    ///
    /// An account present here with an empty `Vec` is known but has no
    /// transactions yet.
    ledgers: DashMap<AccountId, Vec<Transaction>>,

    /// Owning account of every stored transaction id
    index: DashMap<TransactionId, AccountId>,
}

impl TransactionStore {
    /// Create a new empty TransactionStore
    pub fn new() -> Self {
        Self {
            ledgers: DashMap::new(),
            index: DashMap::new(),
        }
    }

    /// Make an account known to the ledger
    ///
    /// Opening an account twice leaves its transactions untouched.
    pub fn open_account(&self, account_id: AccountId) {
        self.ledgers.entry(account_id).or_default();
    }

    /// Append a transaction to its account's ledger
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The transaction was stored
    /// * `Ok(false)` - A transaction with the same id already exists (ignored)
    /// * `Err(BankError::NotFound)` - The account was never opened
    pub fn append(&self, transaction: Transaction) -> Result<bool, BankError> {
        let account_id = transaction.account_id;
        let mut ledger = self
            .ledgers
            .get_mut(&account_id)
            .ok_or_else(|| BankError::account_not_found(account_id))?;

        let mut fresh = false;
        self.index.entry(transaction.id).or_insert_with(|| {
            fresh = true;
            account_id
        });
        if !fresh {
            return Ok(false);
        }
        ledger.push(transaction);

        Ok(true)
    }

    /// Number of transactions booked on an account, `None` if unknown
    pub fn count(&self, account_id: AccountId) -> Option<usize> {
        self.ledgers.get(&account_id).map(|ledger| ledger.len())
    }

    fn window<F>(
        &self,
        account_id: AccountId,
        limit: usize,
        filter: F,
    ) -> Result<Vec<Transaction>, BankError>
    where
        F: Fn(&Transaction) -> bool,
    {
        let ledger = self
            .ledgers
            .get(&account_id)
            .ok_or_else(|| BankError::account_not_found(account_id))?;

        Ok(ledger
            .iter()
            .filter(|tx| filter(tx))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TransactionLedger for TransactionStore {
    async fn find_transactions_by_account_id(
        &self,
        account_id: AccountId,
        limit: usize,
    ) -> Result<Vec<Transaction>, BankError> {
        self.window(account_id, limit, |_| true)
    }

    async fn find_transactions_by_type_and_account_id(
        &self,
        tx_type: TransactionType,
        account_id: AccountId,
        limit: usize,
    ) -> Result<Vec<Transaction>, BankError> {
        self.window(account_id, limit, |tx| tx.tx_type == tx_type)
    }
}
