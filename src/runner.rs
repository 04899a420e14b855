//! Command execution
//!
//! Builds the tokio runtime, loads the bank from CSV, runs the requested
//! query through [`ResumeApi`] and writes the JSON result.
//!
//! # Error Handling
//!
//! Every failure (unreadable file, invalid argument, unknown id) is returned
//! as `Err(String)` for `main` to report. Individual malformed CSV rows are
//! logged and skipped during loading.

use std::io::Write;

use tracing::debug;

use crate::api::ResumeApi;
use crate::cli::{CliArgs, Command};
use crate::io::{load_bank, write_json};

/// Run the command described by `args`, writing JSON to `output`
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(args.worker_threads())
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

    runtime.block_on(async {
        let bank = load_bank(&args.bank_files())
            .await
            .map_err(|e| e.to_string())?;

        let config = args.to_resume_config();
        debug!(?config, "Resume configuration");
        let api = ResumeApi::in_memory(&bank, config);

        execute(&api, &args.command, output).await
    })
}

/// Dispatch one command against an already wired API
pub async fn execute(
    api: &ResumeApi,
    command: &Command,
    output: &mut dyn Write,
) -> Result<(), String> {
    match command {
        Command::CustomerReport { customer_id } => {
            let report = api
                .get_customer_report(*customer_id)
                .await
                .map_err(|e| e.to_string())?;
            write_json(&report, output)
        }
        Command::FullResume { account_id } => {
            let resume = api
                .get_full_resume(Some(*account_id))
                .await
                .map_err(|e| e.to_string())?;
            write_json(&resume, output)
        }
        Command::ResumeByType {
            tx_type,
            account_id,
        } => {
            let resume = api
                .get_resume_by_type(Some(tx_type.as_str()), Some(*account_id))
                .await
                .map_err(|e| e.to_string())?;
            write_json(&resume, output)
        }
    }
}
