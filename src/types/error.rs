//! Error types for the Bank Resume Engine
//!
//! This module defines every error the resume pipeline and its loaders can
//! produce.
//!
//! # Error Categories
//!
//! Each variant belongs to one of three kinds (see [`ErrorKind`]):
//!
//! - **InvalidArgument**: malformed or absent transaction type, non-positive
//!   or absent account id. Never retried.
//! - **NotFound**: unknown customer or account, as reported by a collaborator.
//! - **Unexpected**: any other collaborator failure, arithmetic overflow, and
//!   file/CSV errors raised while loading a data set.

use thiserror::Error;

use super::transaction::TransactionType;

/// Coarse classification of a [`BankError`]
///
/// This is the key an outer layer (HTTP, CLI) maps to a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    Unexpected,
}

/// Main error type for the resume pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Input rejected before any data access
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what was wrong with the input
        message: String,
    },

    /// A customer or account does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Which entity was missing
        message: String,
    },

    /// A collaborator failed for a reason the core does not interpret
    #[error("Unexpected error: {message}")]
    Unexpected {
        /// Description reported by the collaborator
        message: String,
    },

    /// Summing a window would overflow the decimal range
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Reduction that overflowed
        operation: String,
    },

    /// Data file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading a data file
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A data file row could not be parsed
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl BankError {
    /// Classify this error into the three-way taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            BankError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            BankError::NotFound { .. } => ErrorKind::NotFound,
            BankError::Unexpected { .. }
            | BankError::ArithmeticOverflow { .. }
            | BankError::FileNotFound { .. }
            | BankError::IoError { .. }
            | BankError::ParseError { .. } => ErrorKind::Unexpected,
        }
    }
}

impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for BankError {
    fn from(error: csv_async::Error) -> Self {
        BankError::ParseError {
            line: None,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        BankError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create the error for an absent or empty transaction type
    pub fn missing_type() -> Self {
        Self::invalid_argument("Type cannot be empty")
    }

    /// Create the error for an unrecognized transaction type
    ///
    /// The message lists every valid type.
    pub fn invalid_type(input: &str) -> Self {
        let valid: Vec<&str> = TransactionType::ALL.iter().map(|t| t.as_str()).collect();
        Self::invalid_argument(format!(
            "Type '{}' not valid, valid types: [{}]",
            input,
            valid.join(", ")
        ))
    }

    /// Create the error for an absent account id
    pub fn missing_account_id() -> Self {
        Self::invalid_argument("Bank account id cannot be empty")
    }

    /// Create the error for a zero or negative account id
    pub fn invalid_account_id(id: i64) -> Self {
        Self::invalid_argument(format!(
            "Bank account id must be positive, got {}",
            id
        ))
    }

    /// Create a NotFound error for a customer
    pub fn customer_not_found(id: i64) -> Self {
        BankError::NotFound {
            message: format!("Customer with id {} not found", id),
        }
    }

    /// Create a NotFound error for a bank account
    pub fn account_not_found(id: i64) -> Self {
        BankError::NotFound {
            message: format!("Bank account with id {} not found", id),
        }
    }

    /// Create an Unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        BankError::Unexpected {
            message: message.into(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a ParseError for a malformed amount in a data file
    pub fn invalid_amount(amount: &str, tx: i64) -> Self {
        BankError::ParseError {
            line: None,
            message: format!("Invalid amount '{}' for transaction {}", amount, tx),
        }
    }

    /// Merge two failed validations into one InvalidArgument
    ///
    /// Used when several inputs are validated together so that neither
    /// failure hides the other.
    pub fn combine(self, other: BankError) -> Self {
        match (self, other) {
            (
                BankError::InvalidArgument { message: first },
                BankError::InvalidArgument { message: second },
            ) => BankError::InvalidArgument {
                message: format!("{}; {}", first, second),
            },
            (first, _) => first,
        }
    }
}
