//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `customer`: Customer records
//! - `account`: Bank account records
//! - `transaction`: Transaction types and ledger entries
//! - `resume`: Derived summaries (resumes and customer reports)
//! - `error`: Error types for the resume pipeline

pub mod account;
pub mod customer;
pub mod error;
pub mod resume;
pub mod transaction;

pub use account::{AccountId, BankAccount};
pub use customer::{Customer, CustomerId};
pub use error::{BankError, ErrorKind};
pub use resume::{AccountSummary, CustomerReport, Resume, TransactionView};
pub use transaction::{Transaction, TransactionId, TransactionType};
