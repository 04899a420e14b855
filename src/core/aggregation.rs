//! Window aggregation for resumes
//!
//! This module reduces a materialized window of transactions into a
//! [`Resume`]. The window is fetched once by the caller; the total and the
//! echoed transaction list are both derived from that same `Vec`, so they can
//! never disagree even if the ledger changes in between.
//!
//! # Reduction Modes
//!
//! - **Plain sum**: every amount in the window is added, regardless of sign
//!   or type. Used by resume-by-type, where the window already holds a single
//!   type.
//! - **Net**: deposits minus withdrawals. Transfers stay in the transaction
//!   list but count on neither side. Used by the full account resume.

use rust_decimal::Decimal;

use crate::types::{BankError, Resume, Transaction, TransactionType};

/// How a window is reduced to a single total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionMode {
    /// `Σ amount`
    PlainSum,
    /// `Σ deposit − Σ withdrawal`
    Net,
}

/// Deposit and withdrawal sums of a window
///
/// Transfers fall in neither partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartitionTotals {
    pub deposits: Decimal,
    pub withdrawals: Decimal,
}

impl PartitionTotals {
    /// Sum deposit and withdrawal amounts separately
    pub fn from_window(window: &[Transaction]) -> Result<Self, BankError> {
        let mut totals = PartitionTotals::default();

        for transaction in window {
            let slot = match transaction.tx_type {
                TransactionType::Deposit => &mut totals.deposits,
                TransactionType::Withdrawal => &mut totals.withdrawals,
                TransactionType::Transfer => continue,
            };
            *slot = slot
                .checked_add(transaction.amount)
                .ok_or_else(|| BankError::arithmetic_overflow(transaction.tx_type.as_str()))?;
        }

        Ok(totals)
    }

    /// Deposits minus withdrawals
    pub fn net(&self) -> Result<Decimal, BankError> {
        self.deposits
            .checked_sub(self.withdrawals)
            .ok_or_else(|| BankError::arithmetic_overflow("net total"))
    }
}

/// Add up amounts with overflow checking
pub(crate) fn checked_sum<'a, I>(amounts: I, operation: &str) -> Result<Decimal, BankError>
where
    I: IntoIterator<Item = &'a Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(*amount)
            .ok_or_else(|| BankError::arithmetic_overflow(operation))
    })
}

/// Drop everything past the first `cap` transactions
pub fn cap_window(mut transactions: Vec<Transaction>, cap: usize) -> Vec<Transaction> {
    transactions.truncate(cap);
    transactions
}

/// Reduce a window to its total under the given mode
pub fn reduce(window: &[Transaction], mode: ReductionMode) -> Result<Decimal, BankError> {
    match mode {
        ReductionMode::PlainSum => checked_sum(window.iter().map(|tx| &tx.amount), "plain sum"),
        ReductionMode::Net => PartitionTotals::from_window(window)?.net(),
    }
}

/// Build a resume from a fetched window
///
/// The window is capped to `cap` first, then reduced. The returned resume
/// holds exactly the transactions that contributed to its total, in the order
/// they were given.
pub fn aggregate(
    transactions: Vec<Transaction>,
    cap: usize,
    mode: ReductionMode,
) -> Result<Resume, BankError> {
    let window = cap_window(transactions, cap);
    let total_amount = reduce(&window, mode)?;

    Ok(Resume {
        total_amount,
        transactions: window,
    })
}
