//! Thread-safe in-memory customer directory

use async_trait::async_trait;
use dashmap::DashMap;

use crate::core::CustomerDirectory;
use crate::types::{BankError, Customer, CustomerId};

/// DashMap-backed implementation of [`CustomerDirectory`]
#[derive(Debug, Default)]
pub struct CustomerStore {
    customers: DashMap<CustomerId, Customer>,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self {
            customers: DashMap::new(),
        }
    }

    /// Store a customer; returns `false` if the id was already taken
    ///
    /// The first customer stored under an id wins.
    pub fn insert(&self, customer: Customer) -> bool {
        let mut fresh = false;
        self.customers.entry(customer.id).or_insert_with(|| {
            fresh = true;
            customer
        });
        fresh
    }

    pub fn get(&self, id: CustomerId) -> Option<Customer> {
        self.customers.get(&id).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[async_trait]
impl CustomerDirectory for CustomerStore {
    async fn find_customer_by_id(&self, id: CustomerId) -> Result<Option<Customer>, BankError> {
        Ok(self.get(id))
    }
}
