//! Transaction-related types for the Bank Resume Engine
//!
//! This module defines transaction types and the ledger entry stored for
//! every movement on a bank account.

use super::account::AccountId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction identifier
pub type TransactionId = i64;

/// Transaction types recorded in the ledger
///
/// Input is matched case-insensitively; the canonical form is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money credited to the account
    Deposit,

    /// Money debited from the account
    Withdrawal,

    /// Money moved between accounts
    ///
    /// Listed in resumes but never counted in the net balance impact.
    Transfer,
}

impl TransactionType {
    /// Every accepted type, in the order used by error messages
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Deposit,
        TransactionType::Withdrawal,
        TransactionType::Transfer,
    ];

    /// Parse a type name, ignoring case
    ///
    /// Returns `None` for anything outside {deposit, withdrawal, transfer},
    /// including names with surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "deposit" => Some(TransactionType::Deposit),
            "withdrawal" => Some(TransactionType::Withdrawal),
            "transfer" => Some(TransactionType::Transfer),
            _ => None,
        }
    }

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Transfer => "transfer",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ledger entry
///
/// Owned by the transaction ledger. Accounts and customers only ever see
/// copies of it through resumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Ledger-wide unique identifier
    #[serde(rename = "transactionId")]
    pub id: TransactionId,

    /// Normalized transaction type
    #[serde(rename = "type")]
    pub tx_type: TransactionType,

    /// Account the transaction was booked on
    #[serde(rename = "bankAccountId")]
    pub account_id: AccountId,

    /// Monetary amount, signed or unsigned, without currency
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Creation timestamp, fixed once the transaction exists
    #[serde(rename = "creationDate")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction stamped with the current time
    pub fn new(
        id: TransactionId,
        tx_type: TransactionType,
        account_id: AccountId,
        amount: Decimal,
    ) -> Self {
        Self::with_timestamp(id, tx_type, account_id, amount, Utc::now())
    }

    /// Create a transaction with an explicit creation timestamp
    pub fn with_timestamp(
        id: TransactionId,
        tx_type: TransactionType,
        account_id: AccountId,
        amount: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Transaction {
            id,
            tx_type,
            account_id,
            amount,
            created_at,
        }
    }
}
