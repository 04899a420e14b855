//! Collaborator traits for the resume pipeline
//!
//! The core never stores anything itself. It reads from three conceptually
//! independent data sources, each described by one trait here. Implementations
//! live outside the core (see [`crate::store`] for the in-memory ones).
//!
//! All traits are object safe so that services can hold them as
//! `Arc<dyn Trait>` and tests can swap in fakes.

use async_trait::async_trait;

use crate::types::{
    AccountId, BankAccount, BankError, Customer, CustomerId, Transaction, TransactionType,
};

/// Read access to customers
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Look up a customer, `Ok(None)` when it does not exist
    async fn find_customer_by_id(&self, id: CustomerId) -> Result<Option<Customer>, BankError>;
}

/// Read access to bank accounts
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// All accounts owned by a customer, possibly empty
    ///
    /// The returned order is the order accounts appear in customer reports.
    async fn find_accounts_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<BankAccount>, BankError>;
}

/// Read access to the transaction ledger
///
/// Both queries return transactions in ledger order, truncated to `limit`.
/// An unknown account is reported as [`BankError::NotFound`].
#[async_trait]
pub trait TransactionLedger: Send + Sync {
    async fn find_transactions_by_account_id(
        &self,
        account_id: AccountId,
        limit: usize,
    ) -> Result<Vec<Transaction>, BankError>;

    async fn find_transactions_by_type_and_account_id(
        &self,
        tx_type: TransactionType,
        account_id: AccountId,
        limit: usize,
    ) -> Result<Vec<Transaction>, BankError>;
}
