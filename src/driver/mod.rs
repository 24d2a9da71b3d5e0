//! Driver module for the ACH builder commands
//!
//! This module defines the Strategy pattern for the program's commands. Each
//! driver assembles its inputs, builds or reads an ACH file, and reports to the
//! provided output. The command is selected at runtime from the CLI.

use crate::cli::Command;
use crate::core::build_ach;
use crate::io::dump_ach;
use crate::types::{AchError, Transaction};
use chrono::{Local, NaiveDateTime};
use std::io::Write;
use std::path::PathBuf;

pub mod chargeback;
pub mod read;
pub mod samples;
pub mod send;

pub use chargeback::ChargebackTransactions;
pub use read::ReadAch;
pub use send::SendTransactions;

/// File written by [`SendTransactions`] and read by default by [`ReadAch`]
pub const TRANSACTIONS_FILE: &str = "transactions.ach";

/// File written by [`ChargebackTransactions`]
pub const CHARGEBACKS_FILE: &str = "chargebacks.ach";

/// Settings shared by every driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory the `.ach` files are written to and read from
    pub output_dir: PathBuf,

    /// File creation timestamp; the local clock when unset
    pub created_at: Option<NaiveDateTime>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            output_dir: PathBuf::from("."),
            created_at: None,
        }
    }
}

impl BuildConfig {
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.created_at
            .unwrap_or_else(|| Local::now().naive_local())
    }
}

/// A runnable command
///
/// Implementations write their human-readable report to `output` and return
/// an error on the first failure; nothing is retried.
pub trait Driver: Send + Sync {
    /// Run the command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input CSV or ACH file cannot be opened or parsed
    /// - The ACH file fails validation
    /// - The output or the `.ach` file cannot be written
    fn run(&self, config: &BuildConfig, output: &mut dyn Write) -> Result<(), AchError>;
}

/// Create the driver for a CLI command
pub fn create_driver(command: Command) -> Box<dyn Driver> {
    match command {
        Command::All => Box::new(RunAll),
        Command::Send { input } => Box::new(SendTransactions { input }),
        Command::Chargeback => Box::new(ChargebackTransactions),
        Command::Read { file } => Box::new(ReadAch { path: file }),
    }
}

/// Send, chargeback, then read back the sent file
#[derive(Debug, Default, Clone, Copy)]
pub struct RunAll;

impl Driver for RunAll {
    fn run(&self, config: &BuildConfig, output: &mut dyn Write) -> Result<(), AchError> {
        SendTransactions::default().run(config, output)?;
        ChargebackTransactions.run(config, output)?;
        ReadAch::default().run(config, output)
    }
}

/// Print the transactions under `title`, build the sample file, print it, and
/// dump it to `file_name` in the output directory
pub(crate) fn build_and_dump(
    title: &str,
    transactions: &[Transaction],
    file_name: &str,
    config: &BuildConfig,
    output: &mut dyn Write,
) -> Result<(), AchError> {
    writeln!(output, "{}:", title)?;
    for transaction in transactions {
        writeln!(output, "{}", transaction)?;
    }

    let ach = build_ach(
        &samples::sample_metadata(),
        &samples::sample_originator(),
        transactions,
        config.timestamp(),
    )?;
    writeln!(output, "{}", ach)?;

    dump_ach(&ach, &config.output_path(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_writes_to_current_dir() {
        let config = BuildConfig::default();
        assert_eq!(config.output_path("a.ach"), PathBuf::from("./a.ach"));
        assert!(config.created_at.is_none());
    }

    #[test]
    fn test_fixed_timestamp_is_used() {
        let at = NaiveDate::from_ymd_opt(2023, 12, 28)
            .unwrap()
            .and_hms_opt(15, 4, 0)
            .unwrap();
        let config = BuildConfig {
            created_at: Some(at),
            ..BuildConfig::default()
        };
        assert_eq!(config.timestamp(), at);
    }

    #[test]
    fn test_run_all_writes_both_files_and_reads_back() {
        let dir = tempdir().unwrap();
        let config = BuildConfig {
            output_dir: dir.path().to_path_buf(),
            created_at: None,
        };
        let mut output = Vec::new();

        create_driver(Command::All)
            .run(&config, &mut output)
            .unwrap();

        assert!(dir.path().join(TRANSACTIONS_FILE).exists());
        assert!(dir.path().join(CHARGEBACKS_FILE).exists());

        let output = String::from_utf8(output).unwrap();
        let transactions = output.find("Transactions:").unwrap();
        let chargebacks = output.find("Chargebacks:").unwrap();
        let read = output.find("File Name:").unwrap();
        assert!(transactions < chargebacks && chargebacks < read);
        assert!(output.contains("Total Credit Amount: 1837830\n"));
    }

    #[test]
    fn test_run_all_stops_on_first_error() {
        let dir = tempdir().unwrap();
        let config = BuildConfig {
            output_dir: dir.path().join("missing"),
            created_at: None,
        };
        let mut output = Vec::new();

        let err = RunAll.run(&config, &mut output).unwrap_err();

        assert!(matches!(err, AchError::IoError { .. }));
        assert!(!String::from_utf8(output).unwrap().contains("Chargebacks:"));
    }
}
