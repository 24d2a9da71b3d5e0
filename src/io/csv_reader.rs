//! CSV transaction reader with iterator interface
//!
//! Provides a streaming iterator over transactions from a CSV file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Iterator Interface
//!
//! CsvTransactionReader implements the Iterator trait, yielding
//! `Result<Transaction, String>` for each CSV row:
//!
//! ```no_run
//! use ach_builder::io::csv_reader::CsvTransactionReader;
//! use std::path::Path;
//!
//! let reader = CsvTransactionReader::new(Path::new("transactions.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(transaction) => println!("{}", transaction),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record errors are yielded as Err variants in the iterator
//! - Line numbers are included in error messages for debugging

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{AchError, Transaction};
use csv::{Position, ReaderBuilder, StringRecord, Terminator, Trim};
use std::fs::File;
use std::path::Path;

/// Streaming reader over a transaction CSV file
#[derive(Debug)]
pub struct CsvTransactionReader {
    reader: csv::Reader<File>,
    headers: StringRecord,
}

impl CsvTransactionReader {
    /// Open a transaction CSV file
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (return columns are optional)
    /// - End records on `\n` only; a `\r` before it is trimmed with the field
    pub fn new(path: &Path) -> Result<Self, AchError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AchError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => AchError::from(e),
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .terminator(Terminator::Any(b'\n'))
            .from_reader(file);
        let headers = reader.headers()?.clone();

        Ok(Self { reader, headers })
    }

    /// Line on which `record` starts
    ///
    /// `before` is the reader's line before the record was read. Blank lines
    /// skipped ahead of the record and newlines inside quoted fields are both
    /// accounted for.
    fn record_start_line(&self, record: &StringRecord, before: u64) -> u64 {
        let embedded: u64 = record
            .iter()
            .map(|field| field.matches('\n').count() as u64)
            .sum();
        self.reader
            .position()
            .line()
            .saturating_sub(1 + embedded)
            .max(before)
    }
}

impl Iterator for CsvTransactionReader {
    type Item = Result<Transaction, String>;

    /// Get the next transaction from the CSV file
    ///
    /// Line numbers come from the CSV parser's position, so blank lines and
    /// quoted multi-line fields are counted.
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Transaction))` - Successfully parsed record
    /// * `Some(Err(String))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let before = self.reader.position().line();
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(false) => None,
            Ok(true) => {
                let line = self.record_start_line(&record, before);
                Some(
                    record
                        .deserialize::<CsvRecord>(Some(&self.headers))
                        .map_err(|e| format!("Line {}: CSV parse error: {}", line, e))
                        .and_then(|csv_record| {
                            convert_csv_record(csv_record)
                                .map_err(|e| format!("Line {}: {}", line, e))
                        }),
                )
            }
            Err(e) => {
                let line = e.position().map_or(0, Position::line);
                Some(Err(format!("Line {}: CSV parse error: {}", line, e)))
            }
        }
    }
}

/// Read every transaction from a CSV file
///
/// Rows that fail to parse are logged and skipped.
pub fn read_transactions_csv(path: &Path) -> Result<Vec<Transaction>, AchError> {
    let reader = CsvTransactionReader::new(path)?;
    let mut transactions = Vec::new();

    for result in reader {
        match result {
            Ok(transaction) => transactions.push(transaction),
            Err(e) => log::warn!("Skipping transaction row: {}", e),
        }
    }

    Ok(transactions)
}
