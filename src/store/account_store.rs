//! Thread-safe in-memory account directory
//!
//! Accounts are indexed by id and, separately, by owning customer. The
//! per-customer index keeps accounts in the order they were opened, which is
//! the order customer reports list them in.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::core::AccountDirectory;
use crate::types::{AccountId, BankAccount, BankError, CustomerId};

/// DashMap-backed implementation of [`AccountDirectory`]
#[derive(Debug, Default)]
pub struct AccountStore {
    /// Accounts by id
    accounts: DashMap<AccountId, BankAccount>,

    /// Account ids per customer, in insertion order
    by_customer: DashMap<CustomerId, Vec<AccountId>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            by_customer: DashMap::new(),
        }
    }

    /// Store an account; returns `false` if the id was already taken
    ///
    /// The account number and owner of an existing account are never
    /// overwritten.
    pub fn insert(&self, account: BankAccount) -> bool {
        let account_id = account.id;
        let customer_id = account.customer_id;

        let mut fresh = false;
        self.accounts.entry(account_id).or_insert_with(|| {
            fresh = true;
            account
        });
        if fresh {
            self.by_customer
                .entry(customer_id)
                .or_default()
                .push(account_id);
        }
        fresh
    }

    pub fn get(&self, id: AccountId) -> Option<BankAccount> {
        self.accounts.get(&id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountDirectory for AccountStore {
    async fn find_accounts_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<BankAccount>, BankError> {
        let ids = self
            .by_customer
            .get(&customer_id)
            .map(|ids| ids.value().clone())
            .unwrap_or_default();

        Ok(ids.into_iter().filter_map(|id| self.get(id)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_accounts_listed_in_insertion_order() {
        let store = AccountStore::new();
        for id in [30, 10, 20] {
            assert!(store.insert(BankAccount::open(id, 1)));
        }
        store.insert(BankAccount::open(40, 2));

        let ids: Vec<AccountId> = store
            .find_accounts_by_customer_id(1)
            .await
            .unwrap()
            .into_iter()
            .map(|account| account.id)
            .collect();
        assert_eq!(ids, vec![30, 10, 20]);
    }

    #[tokio::test]
    async fn test_customer_without_accounts_is_empty() {
        let store = AccountStore::new();
        let accounts = store.find_accounts_by_customer_id(9).await.unwrap();
        assert!(accounts.is_empty());
    }

    #[test]
    fn test_duplicate_account_keeps_original() {
        let store = AccountStore::new();
        let original = BankAccount::open(1, 1);
        let number = original.number.clone();

        assert!(store.insert(original));
        assert!(!store.insert(BankAccount::open(1, 2)));

        let stored = store.get(1).unwrap();
        assert_eq!(stored.number, number);
        assert_eq!(stored.customer_id, 1);
        assert_eq!(store.len(), 1);
    }
}
