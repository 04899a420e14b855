//! In-memory collaborators
//!
//! Thread-safe, DashMap-backed implementations of the collaborator traits in
//! [`crate::core::traits`]. They stand in for a real persistence layer: the
//! CLI loads them from CSV files and the tests build them directly.
//!
//! - `customer_store` - [`CustomerDirectory`](crate::core::CustomerDirectory)
//! - `account_store` - [`AccountDirectory`](crate::core::AccountDirectory)
//! - `transaction_store` - [`TransactionLedger`](crate::core::TransactionLedger)

pub mod account_store;
pub mod customer_store;
pub mod transaction_store;

pub use account_store::AccountStore;
pub use customer_store::CustomerStore;
pub use transaction_store::TransactionStore;

use std::sync::Arc;

use crate::types::{BankAccount, BankError, Customer, Transaction};

/// The three in-memory stores, wired together
///
/// Enforces the references between them on insert: an account needs an
/// existing customer, a transaction needs an existing account.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBank {
    customers: Arc<CustomerStore>,
    accounts: Arc<AccountStore>,
    transactions: Arc<TransactionStore>,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customers(&self) -> Arc<CustomerStore> {
        Arc::clone(&self.customers)
    }

    pub fn accounts(&self) -> Arc<AccountStore> {
        Arc::clone(&self.accounts)
    }

    pub fn transactions(&self) -> Arc<TransactionStore> {
        Arc::clone(&self.transactions)
    }

    /// Add a customer; `false` if the id already exists
    pub fn add_customer(&self, customer: Customer) -> bool {
        self.customers.insert(customer)
    }

    /// Open an account for an existing customer
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The account was added
    /// * `Ok(false)` - The account id already exists (ignored)
    /// * `Err(BankError::NotFound)` - The customer does not exist
    pub fn add_account(&self, account: BankAccount) -> Result<bool, BankError> {
        if self.customers.get(account.customer_id).is_none() {
            return Err(BankError::customer_not_found(account.customer_id));
        }

        let account_id = account.id;
        let fresh = self.accounts.insert(account);
        if fresh {
            self.transactions.open_account(account_id);
        }
        Ok(fresh)
    }

    /// Book a transaction on an existing account
    ///
    /// Same return convention as [`InMemoryBank::add_account`].
    pub fn add_transaction(&self, transaction: Transaction) -> Result<bool, BankError> {
        self.transactions.append(transaction)
    }
}
