//! Bank Resume Engine Library
//! # Overview
//!
//! This library computes transaction summaries ("resumes") for bank accounts
//! and consolidated reports for customers.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Customer, BankAccount, Transaction, Resume, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::validator`] - Input validation for types and account ids
//!   - [`core::aggregation`] - Window capping and plain/net reductions
//!   - [`core::account_resume`] - Per-account resumes
//!   - [`core::customer_report`] - Concurrent per-customer reports
//!   - [`core::traits`] - Collaborator traits (customers, accounts, ledger)
//! - [`store`] - Thread-safe in-memory collaborators
//! - [`api`] - Entry points for an outer layer
//! - [`io`] - CSV loading and JSON output
//! - [`cli`] / [`runner`] - Command-line front end
//!
//! # Resumes
//!
//! Every aggregation looks at no more than [`DEFAULT_WINDOW_CAP`] transactions
//! (configurable through [`ResumeConfig`]), in ledger order.
//!
//! - **Resume by type**: plain sum of one transaction type on one account
//! - **Full resume**: deposits minus withdrawals on one account; transfers are
//!   listed but not counted
//! - **Customer report**: full resume of every account of a customer, fetched
//!   concurrently, in account order, with the sum of the net amounts

// Module declarations
pub mod api;
pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod store;
pub mod types;

pub use api::ResumeApi;
pub use crate::core::{
    AccountResumeService, CustomerResumeComposer, ReductionMode, ResumeConfig, DEFAULT_WINDOW_CAP,
};
pub use store::InMemoryBank;
pub use types::{
    AccountId, AccountSummary, BankAccount, BankError, Customer, CustomerId, CustomerReport,
    ErrorKind, Resume, Transaction, TransactionId, TransactionType,
};
