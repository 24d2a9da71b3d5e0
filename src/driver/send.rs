//! Build and dump the outgoing transactions file

use super::{build_and_dump, samples, BuildConfig, Driver, TRANSACTIONS_FILE};
use crate::io::read_transactions_csv;
use crate::types::AchError;
use std::io::Write;
use std::path::PathBuf;

/// Builds `transactions.ach` from the sample credits and debits, or from the
/// rows of a CSV file when `input` is set
#[derive(Debug, Default, Clone)]
pub struct SendTransactions {
    pub input: Option<PathBuf>,
}

impl Driver for SendTransactions {
    fn run(&self, config: &BuildConfig, output: &mut dyn Write) -> Result<(), AchError> {
        let transactions = match &self.input {
            Some(path) => {
                log::info!("reading transactions from {}", path.display());
                read_transactions_csv(path)?
            }
            None => samples::sample_transactions(),
        };

        build_and_dump(
            "Transactions",
            &transactions,
            TRANSACTIONS_FILE,
            config,
            output,
        )
    }
}
