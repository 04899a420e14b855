//! Resume pipeline configuration

use tracing::warn;

/// Maximum number of transactions considered by a single aggregation call
///
/// Transactions past this many in ledger order are left out of both the
/// total and the returned list.
pub const DEFAULT_WINDOW_CAP: usize = 100;

/// Configuration for resume computations
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResumeConfig {
    /// Transactions per aggregation window
    pub window_cap: usize,
    /// Maximum number of account resumes in flight for one customer report
    ///
    /// `None` runs every account of the customer at once.
    pub max_concurrent_accounts: Option<usize>,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            window_cap: DEFAULT_WINDOW_CAP,
            max_concurrent_accounts: None,
        }
    }
}

impl ResumeConfig {
    /// Create a new ResumeConfig with custom values
    ///
    /// Zero values fall back to the defaults with a warning.
    pub fn new(window_cap: usize, max_concurrent_accounts: Option<usize>) -> Self {
        let default = Self::default();

        let window_cap = if window_cap == 0 {
            warn!(
                "Invalid window_cap ({}), using default ({})",
                window_cap, default.window_cap
            );
            default.window_cap
        } else {
            window_cap
        };

        let max_concurrent_accounts = match max_concurrent_accounts {
            Some(0) => {
                warn!("Invalid max_concurrent_accounts (0), using no limit");
                default.max_concurrent_accounts
            }
            other => other,
        };

        Self {
            window_cap,
            max_concurrent_accounts,
        }
    }

    /// Number of account resumes to drive at once for `accounts` accounts
    pub fn fan_out_limit(&self, accounts: usize) -> usize {
        self.max_concurrent_accounts
            .unwrap_or(accounts)
            .max(1)
    }
}
