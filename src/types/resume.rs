//! Derived summaries produced by the resume pipeline
//!
//! None of these types are persisted. Each one lives for a single request
//! and is recomputed from the ledger on the next call.

use super::transaction::{Transaction, TransactionType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of one aggregation call over a single account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    /// Reduced total of the window (plain sum or net, depending on the call)
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,

    /// The exact transactions the total was computed from, in ledger order
    pub transactions: Vec<Transaction>,
}

impl Resume {
    /// A resume over an empty window
    pub fn empty() -> Self {
        Resume {
            total_amount: Decimal::ZERO,
            transactions: Vec::new(),
        }
    }
}

/// Lightweight projection of a transaction used inside customer reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransactionView {
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl From<&Transaction> for TransactionView {
    fn from(transaction: &Transaction) -> Self {
        TransactionView {
            tx_type: transaction.tx_type,
            amount: transaction.amount,
        }
    }
}

/// Per-account section of a customer report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    /// Public account number (never the internal id)
    pub account_number: String,

    pub transactions: Vec<TransactionView>,

    /// Net total of the account's window (deposits minus withdrawals)
    #[serde(with = "rust_decimal::serde::float")]
    pub net_amount: Decimal,
}

/// Consolidated report across all of a customer's accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReport {
    pub customer_name: String,

    /// Account sections, in the order the account directory returned them
    pub accounts: Vec<AccountSummary>,

    /// Sum of every account's `net_amount`
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
}
