//! Entry points exposed to the outer layer
//!
//! `ResumeApi` is what a transport (the CLI here, an HTTP router elsewhere)
//! talks to. It owns no logic of its own beyond wiring the collaborators into
//! the core services; the caller maps [`BankError::kind`] to its own status
//! codes.

use std::sync::Arc;

use tracing::info;

use crate::core::{
    AccountDirectory, AccountResumeService, CustomerDirectory, CustomerResumeComposer,
    ResumeConfig, TransactionLedger,
};
use crate::store::InMemoryBank;
use crate::types::{BankError, CustomerId, CustomerReport, Resume};

/// Façade over the resume pipeline
#[derive(Clone)]
pub struct ResumeApi {
    account_resumes: AccountResumeService,
    reports: CustomerResumeComposer,
}

impl ResumeApi {
    /// Wire the three collaborators into the resume services
    pub fn new(
        customers: Arc<dyn CustomerDirectory>,
        accounts: Arc<dyn AccountDirectory>,
        ledger: Arc<dyn TransactionLedger>,
        config: ResumeConfig,
    ) -> Self {
        let account_resumes = AccountResumeService::new(ledger, config);
        let reports = CustomerResumeComposer::new(customers, accounts, account_resumes.clone());

        Self {
            account_resumes,
            reports,
        }
    }

    /// Build the API on top of an in-memory bank
    pub fn in_memory(bank: &InMemoryBank, config: ResumeConfig) -> Self {
        Self::new(bank.customers(), bank.accounts(), bank.transactions(), config)
    }

    /// Gross total of one transaction type on one account
    pub async fn get_resume_by_type(
        &self,
        tx_type: Option<&str>,
        account_id: Option<i64>,
    ) -> Result<Resume, BankError> {
        info!(?tx_type, ?account_id, "Resume by type requested");
        self.account_resumes.resume_by_type(tx_type, account_id).await
    }

    /// Net total of one account
    pub async fn get_full_resume(&self, account_id: Option<i64>) -> Result<Resume, BankError> {
        info!(?account_id, "Full resume requested");
        self.account_resumes.full_resume(account_id).await
    }

    /// Consolidated report across all accounts of a customer
    pub async fn get_customer_report(
        &self,
        customer_id: CustomerId,
    ) -> Result<CustomerReport, BankError> {
        info!(customer_id, "Customer report requested");
        self.reports.build_report(customer_id).await
    }
}
