//! Read back and summarise an ACH file

use super::{BuildConfig, Driver, TRANSACTIONS_FILE};
use crate::io::cents_to_dollars;
use crate::nacha::read_file;
use crate::types::AchError;
use std::io::Write;
use std::path::PathBuf;

/// Reads and validates an ACH file, then prints its credit total and the SEC
/// code of each batch
///
/// Defaults to `transactions.ach` in the output directory.
#[derive(Debug, Default, Clone)]
pub struct ReadAch {
    pub path: Option<PathBuf>,
}

impl Driver for ReadAch {
    fn run(&self, config: &BuildConfig, output: &mut dyn Write) -> Result<(), AchError> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| config.output_path(TRANSACTIONS_FILE));

        let file = read_file(&path).map_err(|e| e.context("could not read ach"))?;
        file.validate()
            .map_err(|e| e.context("ach file is not valid"))?;

        let total_credit = file.control.total_credit_entry_dollar_amount_in_file;
        log::info!(
            "read {}: {} batches, credits ${} debits ${}",
            path.display(),
            file.batches.len(),
            cents_to_dollars(total_credit),
            cents_to_dollars(file.control.total_debit_entry_dollar_amount_in_file)
        );

        writeln!(output, "File Name: {}\n", path.display())?;
        writeln!(output, "Total Credit Amount: {}", total_credit)?;
        for batch in &file.batches {
            writeln!(
                output,
                "SEC Code: {}\n",
                batch.header().standard_entry_class_code
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::SendTransactions;
    use std::fs;
    use tempfile::tempdir;

    fn config(dir: &std::path::Path) -> BuildConfig {
        BuildConfig {
            output_dir: dir.to_path_buf(),
            created_at: None,
        }
    }

    #[test]
    fn test_read_summarises_sent_file() {
        let dir = tempdir().unwrap();
        let config = config(dir.path());
        SendTransactions::default()
            .run(&config, &mut Vec::new())
            .unwrap();
        let mut output = Vec::new();

        ReadAch::default().run(&config, &mut output).unwrap();

        let path = dir.path().join(TRANSACTIONS_FILE);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!(
                "File Name: {}\n\nTotal Credit Amount: 1837830\nSEC Code: PPD\n\n",
                path.display()
            )
        );
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = ReadAch::default()
            .run(&config(dir.path()), &mut Vec::new())
            .unwrap_err();

        match err {
            AchError::Build { context, source } => {
                assert_eq!(context, "could not read ach");
                assert!(matches!(*source, AchError::FileNotFound { .. }));
            }
            other => panic!("expected wrapped error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_rejects_tampered_file() {
        let dir = tempdir().unwrap();
        let config = config(dir.path());
        SendTransactions::default()
            .run(&config, &mut Vec::new())
            .unwrap();

        let path = dir.path().join(TRANSACTIONS_FILE);
        let text = fs::read_to_string(&path).unwrap();
        fs::write(&path, text.replacen("0000234430", "0000234431", 1)).unwrap();

        let err = ReadAch { path: Some(path) }
            .run(&config, &mut Vec::new())
            .unwrap_err();

        assert!(err.to_string().starts_with("ach file is not valid"));
    }
}
