//! Bank Resume CLI
//!
//! Command-line interface for summarizing bank transactions loaded from CSV
//! files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --customers customers.csv --accounts accounts.csv \
//!     --transactions transactions.csv customer-report 1
//! cargo run -- --customers c.csv --accounts a.csv --transactions t.csv full-resume 10
//! cargo run -- --customers c.csv --accounts a.csv --transactions t.csv \
//!     --window-cap 50 resume-by-type deposit 10
//! ```
//!
//! The result is printed to stdout as JSON. Logs go to stderr; set
//! `RUST_LOG` (for example `RUST_LOG=info`) to see more than warnings.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing file, invalid argument, unknown customer or account, etc.)

use bank_resume_engine::{cli, runner};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = runner::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
