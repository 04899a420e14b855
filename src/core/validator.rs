//! Input validation for account- and type-scoped operations
//!
//! These checks run before any collaborator is called. They are pure and
//! total: every input maps to either a normalized value or an
//! [`BankError::InvalidArgument`].

use crate::types::{AccountId, BankError, TransactionType};

/// Validate and normalize a transaction type
///
/// # Errors
///
/// `InvalidArgument` when the input is absent, empty, or (after lowercasing)
/// not exactly one of deposit, withdrawal, transfer. The message lists the
/// valid set.
pub fn validate_type(input: Option<&str>) -> Result<TransactionType, BankError> {
    let raw = match input {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(BankError::missing_type()),
    };

    TransactionType::parse(raw).ok_or_else(|| BankError::invalid_type(raw))
}

/// Validate an account id
///
/// Only strictly positive ids are accepted; the id is returned unchanged.
pub fn validate_account_id(input: Option<i64>) -> Result<AccountId, BankError> {
    match input {
        None => Err(BankError::missing_account_id()),
        Some(id) if id <= 0 => Err(BankError::invalid_account_id(id)),
        Some(id) => Ok(id),
    }
}

/// Validate a type and an account id together
///
/// Both checks always run. If both fail, the returned error carries both
/// messages.
pub fn validate_type_and_account_id(
    tx_type: Option<&str>,
    account_id: Option<i64>,
) -> Result<(TransactionType, AccountId), BankError> {
    match (validate_type(tx_type), validate_account_id(account_id)) {
        (Ok(tx_type), Ok(account_id)) => Ok((tx_type, account_id)),
        (Err(type_error), Err(id_error)) => Err(type_error.combine(id_error)),
        (Err(error), _) | (_, Err(error)) => Err(error),
    }
}
