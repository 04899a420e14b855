use crate::core::ResumeConfig;
use crate::io::BankFiles;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Summarize bank transactions per account and per customer
#[derive(Parser, Debug)]
#[command(name = "bank-resume")]
#[command(about = "Summarize bank transactions per account and per customer", long_about = None)]
pub struct CliArgs {
    /// Customers CSV file (`id,name,phone,email`)
    #[arg(long = "customers", value_name = "FILE")]
    pub customers_file: PathBuf,

    /// Accounts CSV file (`id,number,customer_id,created_at`)
    #[arg(long = "accounts", value_name = "FILE")]
    pub accounts_file: PathBuf,

    /// Transactions CSV file (`id,type,account_id,amount,created_at`)
    #[arg(long = "transactions", value_name = "FILE")]
    pub transactions_file: PathBuf,

    /// Maximum number of transactions per aggregation
    #[arg(
        long = "window-cap",
        value_name = "COUNT",
        help = "Maximum number of transactions per aggregation (default: 100)"
    )]
    pub window_cap: Option<usize>,

    /// Maximum number of account resumes in flight for one report
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Maximum number of accounts summarized concurrently (default: no limit)"
    )]
    pub max_concurrent_accounts: Option<usize>,

    /// Number of tokio worker threads
    #[arg(
        long = "worker-threads",
        value_name = "COUNT",
        help = "Number of runtime worker threads (default: CPU cores)"
    )]
    pub worker_threads: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

/// Query to run against the loaded data
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Consolidated report across all accounts of a customer
    CustomerReport {
        #[arg(value_name = "CUSTOMER_ID", allow_negative_numbers = true)]
        customer_id: i64,
    },
    /// Net total (deposits minus withdrawals) of one account
    FullResume {
        #[arg(value_name = "ACCOUNT_ID", allow_negative_numbers = true)]
        account_id: i64,
    },
    /// Gross total of one transaction type on one account
    ResumeByType {
        #[arg(value_name = "TYPE")]
        tx_type: String,
        #[arg(value_name = "ACCOUNT_ID", allow_negative_numbers = true)]
        account_id: i64,
    },
}

impl CliArgs {
    /// Create a ResumeConfig from CLI arguments
    ///
    /// Missing values take the defaults; zero values fall back to the
    /// defaults with a warning.
    pub fn to_resume_config(&self) -> ResumeConfig {
        if self.window_cap.is_some() || self.max_concurrent_accounts.is_some() {
            let default = ResumeConfig::default();
            ResumeConfig::new(
                self.window_cap.unwrap_or(default.window_cap),
                self.max_concurrent_accounts
                    .or(default.max_concurrent_accounts),
            )
        } else {
            ResumeConfig::default()
        }
    }

    /// Runtime worker threads, falling back to the CPU count
    pub fn worker_threads(&self) -> usize {
        match self.worker_threads {
            Some(0) | None => num_cpus::get(),
            Some(n) => n,
        }
    }

    /// Paths of the three data files
    pub fn bank_files(&self) -> BankFiles {
        BankFiles {
            customers: self.customers_file.clone(),
            accounts: self.accounts_file.clone(),
            transactions: self.transactions_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FILES: [&str; 7] = [
        "program",
        "--customers",
        "c.csv",
        "--accounts",
        "a.csv",
        "--transactions",
        "t.csv",
    ];

    fn parse(extra: &[&str]) -> Result<CliArgs, clap::Error> {
        let args: Vec<&str> = FILES.iter().chain(extra.iter()).copied().collect();
        CliArgs::try_parse_from(args)
    }

    #[rstest]
    #[case::customer_report(&["customer-report", "7"], Command::CustomerReport { customer_id: 7 })]
    #[case::full_resume(&["full-resume", "3"], Command::FullResume { account_id: 3 })]
    #[case::negative_account(&["full-resume", "-3"], Command::FullResume { account_id: -3 })]
    #[case::resume_by_type(
        &["resume-by-type", "Deposit", "3"],
        Command::ResumeByType { tx_type: "Deposit".to_string(), account_id: 3 }
    )]
    fn test_command_parsing(#[case] extra: &[&str], #[case] expected: Command) {
        let parsed = parse(extra).unwrap();
        assert_eq!(parsed.command, expected);
    }

    #[test]
    fn test_bank_files() {
        let parsed = parse(&["customer-report", "1"]).unwrap();
        let files = parsed.bank_files();
        assert_eq!(files.customers, PathBuf::from("c.csv"));
        assert_eq!(files.accounts, PathBuf::from("a.csv"));
        assert_eq!(files.transactions, PathBuf::from("t.csv"));
    }

    #[rstest]
    #[case::all_defaults(&["customer-report", "1"], 100, None)]
    #[case::custom_cap(&["--window-cap", "5", "customer-report", "1"], 5, None)]
    #[case::custom_concurrency(&["--max-concurrent", "2", "customer-report", "1"], 100, Some(2))]
    #[case::zero_cap_falls_back(&["--window-cap", "0", "customer-report", "1"], 100, None)]
    #[case::zero_concurrency_falls_back(&["--max-concurrent", "0", "customer-report", "1"], 100, None)]
    fn test_resume_config_conversion(
        #[case] extra: &[&str],
        #[case] expected_cap: usize,
        #[case] expected_concurrent: Option<usize>,
    ) {
        let config = parse(extra).unwrap().to_resume_config();
        assert_eq!(config.window_cap, expected_cap);
        assert_eq!(config.max_concurrent_accounts, expected_concurrent);
    }

    #[rstest]
    #[case::default(&["customer-report", "1"], num_cpus::get())]
    #[case::zero(&["--worker-threads", "0", "customer-report", "1"], num_cpus::get())]
    #[case::custom(&["--worker-threads", "3", "customer-report", "1"], 3)]
    fn test_worker_threads(#[case] extra: &[&str], #[case] expected: usize) {
        assert_eq!(parse(extra).unwrap().worker_threads(), expected);
    }

    #[rstest]
    #[case::missing_command(&[])]
    #[case::unknown_command(&["balance", "1"])]
    #[case::non_numeric_id(&["full-resume", "abc"])]
    #[case::missing_account(&["resume-by-type", "deposit"])]
    fn test_parsing_errors(#[case] extra: &[&str]) {
        assert!(parse(extra).is_err());
    }

    #[test]
    fn test_missing_data_file() {
        let result = CliArgs::try_parse_from(["program", "--customers", "c.csv", "customer-report", "1"]);
        assert!(result.is_err());
    }
}
