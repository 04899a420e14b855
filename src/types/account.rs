//! Account-related types for the Bank Resume Engine
//!
//! This module defines the BankAccount structure owned by the account
//! directory.

use super::customer::CustomerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bank account identifier
///
/// Signed so that malformed input (zero or negative ids) can reach the
/// validator instead of being rejected by the type system.
pub type AccountId = i64;

/// A bank account owned by exactly one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    /// The account ID
    #[serde(rename = "bankAccountId")]
    pub id: AccountId,

    /// Public account number
    ///
    /// Opaque, generated once when the account is opened and never changed.
    pub number: String,

    /// Owning customer
    pub customer_id: CustomerId,

    /// When the account was opened
    #[serde(rename = "creationDate")]
    pub created_at: DateTime<Utc>,
}

impl BankAccount {
    /// Open a new account with a freshly generated number
    ///
    /// # Arguments
    ///
    /// * `id` - The account ID
    /// * `customer_id` - The customer who owns the account
    pub fn open(id: AccountId, customer_id: CustomerId) -> Self {
        BankAccount {
            id,
            number: Uuid::new_v4().to_string(),
            customer_id,
            created_at: Utc::now(),
        }
    }
}
