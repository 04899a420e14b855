//! Core business logic module
//!
//! This module contains the resume pipeline, leaf-first:
//! - `traits` - Collaborator contracts (customer, account, ledger)
//! - `config` - Window cap and fan-out limits
//! - `validator` - Input checks run before any data access
//! - `aggregation` - Plain-sum and net reductions over a capped window
//! - `account_resume` - Per-account resume orchestration
//! - `customer_report` - Customer-wide fan-out and fold

pub mod account_resume;
pub mod aggregation;
pub mod config;
pub mod customer_report;
pub mod traits;
pub mod validator;

pub use account_resume::AccountResumeService;
pub use aggregation::{aggregate, ReductionMode};
pub use config::{ResumeConfig, DEFAULT_WINDOW_CAP};
pub use customer_report::CustomerResumeComposer;
pub use traits::{AccountDirectory, CustomerDirectory, TransactionLedger};
pub use validator::{validate_account_id, validate_type};
