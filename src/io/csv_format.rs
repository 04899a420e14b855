//! CSV format handling for bank data sets and JSON output
//!
//! This module centralizes all file format concerns, providing:
//! - Record structures for deserializing `customers.csv`, `accounts.csv`
//!   and `transactions.csv`
//! - Conversion from CSV records to domain types
//! - JSON serialization of results
//!
//! All functions are pure (no file I/O) for easy testing.

use std::io::Write;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{
    AccountId, BankAccount, BankError, Customer, CustomerId, Transaction, TransactionId,
    TransactionType,
};

/// Row of `customers.csv`: `id,name,phone,email`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Row of `accounts.csv`: `id,number,customer_id,created_at`
///
/// `number` and `created_at` may be blank; they are generated on conversion.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccountRecord {
    pub id: AccountId,
    pub number: Option<String>,
    pub customer_id: CustomerId,
    pub created_at: Option<String>,
}

/// Row of `transactions.csv`: `id,type,account_id,amount,created_at`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransactionRecord {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub account_id: AccountId,
    pub amount: String,
    pub created_at: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an optional RFC 3339 timestamp, defaulting to now when blank
fn parse_timestamp(value: Option<String>, what: &str) -> Result<DateTime<Utc>, BankError> {
    match non_blank(value) {
        None => Ok(Utc::now()),
        Some(raw) => DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|e| BankError::ParseError {
                line: None,
                message: format!("Invalid timestamp '{}' for {}: {}", raw, what, e),
            }),
    }
}

/// Convert a CustomerRecord to a Customer
///
/// Missing phone or email become empty strings.
pub fn convert_customer_record(record: CustomerRecord) -> Result<Customer, BankError> {
    let name = record.name.trim();
    if name.is_empty() {
        return Err(BankError::ParseError {
            line: None,
            message: format!("Customer {} has no name", record.id),
        });
    }

    Ok(Customer::new(
        record.id,
        name,
        non_blank(record.phone).unwrap_or_default(),
        non_blank(record.email).unwrap_or_default(),
    ))
}

/// Convert an AccountRecord to a BankAccount
///
/// A blank number gets a fresh UUID; a blank timestamp becomes now.
pub fn convert_account_record(record: AccountRecord) -> Result<BankAccount, BankError> {
    let created_at = parse_timestamp(record.created_at, &format!("account {}", record.id))?;
    let number = non_blank(record.number).unwrap_or_else(|| Uuid::new_v4().to_string());

    Ok(BankAccount {
        id: record.id,
        number,
        customer_id: record.customer_id,
        created_at,
    })
}

/// Convert a TransactionRecord to a Transaction
///
/// This function:
/// - Trims the type and matches it case-insensitively
/// - Parses the amount into a Decimal
/// - Parses the creation timestamp, defaulting to now when blank
pub fn convert_transaction_record(record: TransactionRecord) -> Result<Transaction, BankError> {
    let raw_type = record.tx_type.trim();
    let tx_type =
        TransactionType::parse(raw_type).ok_or_else(|| BankError::invalid_type(raw_type))?;

    let amount = Decimal::from_str(record.amount.trim())
        .map_err(|_| BankError::invalid_amount(&record.amount, record.id))?;

    let created_at = parse_timestamp(record.created_at, &format!("transaction {}", record.id))?;

    Ok(Transaction::with_timestamp(
        record.id,
        tx_type,
        record.account_id,
        amount,
        created_at,
    ))
}

/// Write a value as pretty-printed JSON followed by a newline
pub fn write_json<T: Serialize>(value: &T, output: &mut dyn Write) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut *output, value)
        .map_err(|e| format!("Failed to serialize output: {}", e))?;
    writeln!(output).map_err(|e| format!("Failed to write output: {}", e))?;
    output
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))
}
