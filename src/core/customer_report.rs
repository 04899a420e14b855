//! Customer-wide report composition
//!
//! `CustomerResumeComposer` resolves a customer, lists the customer's
//! accounts, runs a full resume for every account concurrently and folds the
//! results into one [`CustomerReport`].
//!
//! # Architecture
//!
//! ```text
//! CustomerResumeComposer
//!     ├── Arc<dyn CustomerDirectory>   (step 1: resolve customer)
//!     ├── Arc<dyn AccountDirectory>    (step 2: list accounts)
//!     └── AccountResumeService         (step 3: one full resume per account)
//! ```
//!
//! # Concurrency
//!
//! Account resumes are driven as an order-preserving buffered stream inside
//! the caller's future. By default every account is in flight at once;
//! `max_concurrent_accounts` caps that when set. The first
//! failure ends the whole report, and dropping the report future drops every
//! in-flight fetch with it.

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use super::account_resume::AccountResumeService;
use super::aggregation::checked_sum;
use super::traits::{AccountDirectory, CustomerDirectory};
use crate::types::{
    AccountSummary, BankAccount, BankError, CustomerId, CustomerReport, TransactionView,
};

/// Builds consolidated per-customer reports
#[derive(Clone)]
pub struct CustomerResumeComposer {
    customers: Arc<dyn CustomerDirectory>,
    accounts: Arc<dyn AccountDirectory>,
    resumes: AccountResumeService,
}

impl CustomerResumeComposer {
    /// Create a new CustomerResumeComposer
    ///
    /// # Arguments
    ///
    /// * `customers` - Customer lookup
    /// * `accounts` - Account listing per customer
    /// * `resumes` - Per-account resume service (also supplies the config)
    pub fn new(
        customers: Arc<dyn CustomerDirectory>,
        accounts: Arc<dyn AccountDirectory>,
        resumes: AccountResumeService,
    ) -> Self {
        Self {
            customers,
            accounts,
            resumes,
        }
    }

    /// Build the consolidated report for one customer
    ///
    /// The grand total is the sum of each account's net total; raw
    /// transactions are not re-aggregated. Accounts appear in the order the
    /// account directory listed them.
    ///
    /// # Errors
    ///
    /// * `NotFound` - the customer does not exist
    /// * the first error raised by any collaborator or account resume
    pub async fn build_report(&self, customer_id: CustomerId) -> Result<CustomerReport, BankError> {
        let customer = self
            .customers
            .find_customer_by_id(customer_id)
            .await?
            .ok_or_else(|| BankError::customer_not_found(customer_id))?;

        let accounts = self
            .accounts
            .find_accounts_by_customer_id(customer.id)
            .await?;
        debug!(customer_id, accounts = accounts.len(), "Resolved customer accounts");

        let limit = self.resumes.config().fan_out_limit(accounts.len());
        let summaries: Vec<AccountSummary> = stream::iter(accounts)
            .map(move |account| self.summarize_account(account))
            .buffered(limit)
            .try_collect()
            .await?;

        let total_amount = checked_sum(
            summaries.iter().map(|summary| &summary.net_amount),
            "customer total",
        )?;

        info!(
            customer_id,
            accounts = summaries.len(),
            %total_amount,
            "Built customer report"
        );

        Ok(CustomerReport {
            customer_name: customer.name,
            accounts: summaries,
            total_amount,
        })
    }

    async fn summarize_account(&self, account: BankAccount) -> Result<AccountSummary, BankError> {
        let resume = self.resumes.full_resume(Some(account.id)).await?;

        Ok(AccountSummary {
            account_number: account.number,
            transactions: resume.transactions.iter().map(TransactionView::from).collect(),
            net_amount: resume.total_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResumeConfig;
    use crate::core::traits::TransactionLedger;
    use crate::store::InMemoryBank;
    use crate::types::{AccountId, Customer, ErrorKind, Transaction, TransactionType};
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn composer_for(bank: &InMemoryBank, config: ResumeConfig) -> CustomerResumeComposer {
        let resumes = AccountResumeService::new(bank.transactions(), config);
        CustomerResumeComposer::new(bank.customers(), bank.accounts(), resumes)
    }

    fn deposit(id: i64, account_id: AccountId, amount: i64) -> Transaction {
        Transaction::new(id, TransactionType::Deposit, account_id, Decimal::new(amount, 0))
    }

    fn withdrawal(id: i64, account_id: AccountId, amount: i64) -> Transaction {
        Transaction::new(id, TransactionType::Withdrawal, account_id, Decimal::new(amount, 0))
    }

    /// Customer 1 with two accounts netting 3500 and 500
    fn sample_bank() -> InMemoryBank {
        let bank = InMemoryBank::new();
        bank.add_customer(Customer::new(1, "Ada Lovelace", "555-0100", "ada@example.com"));
        bank.add_account(BankAccount::open(10, 1)).unwrap();
        bank.add_account(BankAccount::open(20, 1)).unwrap();
        bank.add_transaction(deposit(1, 10, 1500)).unwrap();
        bank.add_transaction(deposit(2, 10, 2000)).unwrap();
        bank.add_transaction(deposit(3, 20, 1000)).unwrap();
        bank.add_transaction(withdrawal(4, 20, 500)).unwrap();
        bank
    }

    /// Counts fetches that are currently pending
    struct InFlight(Arc<AtomicUsize>);

    impl InFlight {
        fn enter(counter: &Arc<AtomicUsize>) -> Self {
            counter.fetch_add(1, Ordering::SeqCst);
            Self(Arc::clone(counter))
        }
    }

    impl Drop for InFlight {
        fn drop(&mut self) {
            self.0.fetch_sub(1, Ordering::SeqCst);
        }
    }

    /// Ledger that delays each account by a fixed amount
    struct SlowLedger {
        inner: Arc<dyn TransactionLedger>,
        delays: HashMap<AccountId, Duration>,
        started: Arc<AtomicUsize>,
        in_flight: Arc<AtomicUsize>,
    }

    impl SlowLedger {
        fn new(inner: Arc<dyn TransactionLedger>, delays: HashMap<AccountId, Duration>) -> Self {
            Self {
                inner,
                delays,
                started: Arc::new(AtomicUsize::new(0)),
                in_flight: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl TransactionLedger for SlowLedger {
        async fn find_transactions_by_account_id(
            &self,
            account_id: AccountId,
            limit: usize,
        ) -> Result<Vec<Transaction>, BankError> {
            self.started.fetch_add(1, Ordering::SeqCst);
            let _pending = InFlight::enter(&self.in_flight);
            if let Some(delay) = self.delays.get(&account_id) {
                tokio::time::sleep(*delay).await;
            }
            self.inner
                .find_transactions_by_account_id(account_id, limit)
                .await
        }

        async fn find_transactions_by_type_and_account_id(
            &self,
            tx_type: TransactionType,
            account_id: AccountId,
            limit: usize,
        ) -> Result<Vec<Transaction>, BankError> {
            self.inner
                .find_transactions_by_type_and_account_id(tx_type, account_id, limit)
                .await
        }
    }

    /// Ledger that fails for one account only
    struct FailingLedger {
        inner: Arc<dyn TransactionLedger>,
        failing: AccountId,
    }

    #[async_trait]
    impl TransactionLedger for FailingLedger {
        async fn find_transactions_by_account_id(
            &self,
            account_id: AccountId,
            limit: usize,
        ) -> Result<Vec<Transaction>, BankError> {
            if account_id == self.failing {
                return Err(BankError::unexpected("ledger unavailable"));
            }
            self.inner
                .find_transactions_by_account_id(account_id, limit)
                .await
        }

        async fn find_transactions_by_type_and_account_id(
            &self,
            tx_type: TransactionType,
            account_id: AccountId,
            limit: usize,
        ) -> Result<Vec<Transaction>, BankError> {
            self.inner
                .find_transactions_by_type_and_account_id(tx_type, account_id, limit)
                .await
        }
    }

    #[tokio::test]
    async fn test_report_sums_account_net_totals() {
        let bank = sample_bank();
        let report = composer_for(&bank, ResumeConfig::default())
            .build_report(1)
            .await
            .unwrap();

        assert_eq!(report.customer_name, "Ada Lovelace");
        assert_eq!(report.accounts.len(), 2);
        assert_eq!(report.accounts[0].net_amount, Decimal::new(3500, 0));
        assert_eq!(report.accounts[1].net_amount, Decimal::new(500, 0));
        assert_eq!(report.total_amount, Decimal::new(4000, 0));
    }

    #[tokio::test]
    async fn test_report_projects_transactions_in_ledger_order() {
        let bank = sample_bank();
        let report = composer_for(&bank, ResumeConfig::default())
            .build_report(1)
            .await
            .unwrap();

        let second = &report.accounts[1];
        assert_eq!(
            second.transactions,
            vec![
                TransactionView {
                    tx_type: TransactionType::Deposit,
                    amount: Decimal::new(1000, 0)
                },
                TransactionView {
                    tx_type: TransactionType::Withdrawal,
                    amount: Decimal::new(500, 0)
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_report_uses_account_numbers() {
        let bank = sample_bank();
        let expected: Vec<String> = bank
            .accounts()
            .find_accounts_by_customer_id(1)
            .await
            .unwrap()
            .into_iter()
            .map(|account| account.number)
            .collect();

        let report = composer_for(&bank, ResumeConfig::default())
            .build_report(1)
            .await
            .unwrap();
        let numbers: Vec<String> = report
            .accounts
            .into_iter()
            .map(|summary| summary.account_number)
            .collect();

        assert_eq!(numbers, expected);
    }

    #[tokio::test]
    async fn test_customer_without_accounts() {
        let bank = InMemoryBank::new();
        bank.add_customer(Customer::new(2, "Grace Hopper", "555-0101", "grace@example.com"));

        let report = composer_for(&bank, ResumeConfig::default())
            .build_report(2)
            .await
            .unwrap();

        assert_eq!(report.customer_name, "Grace Hopper");
        assert!(report.accounts.is_empty());
        assert_eq!(report.total_amount, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_account_without_transactions_nets_zero() {
        let bank = InMemoryBank::new();
        bank.add_customer(Customer::new(3, "Alan Turing", "555-0102", "alan@example.com"));
        bank.add_account(BankAccount::open(30, 3)).unwrap();

        let report = composer_for(&bank, ResumeConfig::default())
            .build_report(3)
            .await
            .unwrap();

        assert_eq!(report.accounts.len(), 1);
        assert!(report.accounts[0].transactions.is_empty());
        assert_eq!(report.total_amount, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_unknown_customer_is_not_found() {
        let bank = sample_bank();
        let error = composer_for(&bank, ResumeConfig::default())
            .build_report(404)
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error, BankError::customer_not_found(404));
    }

    #[tokio::test]
    async fn test_report_respects_window_cap_per_account() {
        let bank = InMemoryBank::new();
        bank.add_customer(Customer::new(1, "Ada Lovelace", "555-0100", "ada@example.com"));
        bank.add_account(BankAccount::open(10, 1)).unwrap();
        for id in 1..=150 {
            bank.add_transaction(deposit(id, 10, 2)).unwrap();
        }

        let report = composer_for(&bank, ResumeConfig::default())
            .build_report(1)
            .await
            .unwrap();

        assert_eq!(report.accounts[0].transactions.len(), 100);
        assert_eq!(report.total_amount, Decimal::new(200, 0));
    }

    #[tokio::test]
    async fn test_one_failing_account_fails_the_report() {
        let bank = sample_bank();
        let ledger = Arc::new(FailingLedger {
            inner: bank.transactions(),
            failing: 20,
        });
        let resumes = AccountResumeService::new(ledger, ResumeConfig::default());
        let composer = CustomerResumeComposer::new(bank.customers(), bank.accounts(), resumes);

        let error = composer.build_report(1).await.unwrap_err();
        assert_eq!(error, BankError::unexpected("ledger unavailable"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_accounts_resumed_concurrently_in_order() {
        let bank = InMemoryBank::new();
        bank.add_customer(Customer::new(1, "Ada Lovelace", "555-0100", "ada@example.com"));
        let mut delays = HashMap::new();
        for (index, account_id) in [10, 20, 30, 40].into_iter().enumerate() {
            bank.add_account(BankAccount::open(account_id, 1)).unwrap();
            bank.add_transaction(deposit(account_id, account_id, account_id))
                .unwrap();
            // Earlier accounts are slower, so completion order is reversed
            delays.insert(account_id, Duration::from_millis(400 - 100 * index as u64));
        }
        let ledger = Arc::new(SlowLedger::new(bank.transactions(), delays));
        let resumes = AccountResumeService::new(ledger, ResumeConfig::new(100, Some(4)));
        let composer = CustomerResumeComposer::new(bank.customers(), bank.accounts(), resumes);

        let started = tokio::time::Instant::now();
        let report = composer.build_report(1).await.unwrap();
        let elapsed = started.elapsed();

        let nets: Vec<Decimal> = report.accounts.iter().map(|a| a.net_amount).collect();
        assert_eq!(
            nets,
            vec![
                Decimal::new(10, 0),
                Decimal::new(20, 0),
                Decimal::new(30, 0),
                Decimal::new(40, 0)
            ]
        );
        assert_eq!(report.total_amount, Decimal::new(100, 0));
        // Slowest account is 400ms; sequential execution would take 1000ms
        assert!(elapsed < Duration::from_millis(500), "took {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_config_runs_all_accounts_at_once() {
        let bank = InMemoryBank::new();
        bank.add_customer(Customer::new(1, "Ada Lovelace", "555-0100", "ada@example.com"));
        let account_count = (num_cpus::get() * 4) as i64;
        let mut delays = HashMap::new();
        for account_id in 1..=account_count {
            bank.add_account(BankAccount::open(account_id, 1)).unwrap();
            bank.add_transaction(deposit(account_id, account_id, 1)).unwrap();
            delays.insert(account_id, Duration::from_millis(100));
        }
        let ledger = Arc::new(SlowLedger::new(bank.transactions(), delays));
        let resumes = AccountResumeService::new(ledger, ResumeConfig::default());
        let composer = CustomerResumeComposer::new(bank.customers(), bank.accounts(), resumes);

        let started = tokio::time::Instant::now();
        let report = composer.build_report(1).await.unwrap();
        let elapsed = started.elapsed();

        assert_eq!(report.accounts.len(), account_count as usize);
        assert_eq!(report.total_amount, Decimal::new(account_count, 0));
        // More accounts than cores, still bounded by the slowest single fetch
        assert!(elapsed < Duration::from_millis(200), "took {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_report_cancels_account_fetches() {
        let bank = sample_bank();
        let delays = HashMap::from([
            (10, Duration::from_secs(60)),
            (20, Duration::from_secs(60)),
        ]);
        let ledger = Arc::new(SlowLedger::new(bank.transactions(), delays));
        let started = Arc::clone(&ledger.started);
        let in_flight = Arc::clone(&ledger.in_flight);
        let resumes = AccountResumeService::new(ledger, ResumeConfig::default());
        let composer = CustomerResumeComposer::new(bank.customers(), bank.accounts(), resumes);

        let result =
            tokio::time::timeout(Duration::from_secs(1), composer.build_report(1)).await;

        assert!(result.is_err());
        assert_eq!(started.load(Ordering::SeqCst), 2);
        assert_eq!(in_flight.load(Ordering::SeqCst), 0);
    }
}
