//! Error types for the ACH builder
//!
//! This module defines all error types that can occur while building, writing,
//! reading, or validating ACH files. Errors are designed to be descriptive and
//! user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed transaction input rows
//! - **Record Errors**: Fixed-width records that cannot be parsed or fail field validation
//! - **Control Errors**: Batch/file control totals that do not reconcile with the entries

use thiserror::Error;

/// Main error type for the ACH builder
///
/// Every failure path of the builder, the NACHA codec, and the drivers ends in
/// one of these variants. Drivers do not recover from any of them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AchError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred while reading transaction input
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A fixed-width record could not be parsed
    #[error("Record parse error at line {line}: {message}")]
    RecordParse {
        /// Line number of the offending record (1-based)
        line: u64,
        /// Description of the parsing error
        message: String,
    },

    /// A record field holds a value the format does not allow
    #[error("Invalid {field} in {record}: {message}")]
    InvalidField {
        /// Record kind (e.g. "file header", "entry detail")
        record: String,
        /// Field name
        field: String,
        /// What is wrong with the value
        message: String,
    },

    /// A control record disagrees with the values computed from its entries
    #[error("{record} {field} mismatch: expected {expected}, found {actual}")]
    ControlMismatch {
        /// Record kind ("batch control" or "file control")
        record: String,
        /// Control field name
        field: String,
        /// Value computed from the entries
        expected: u64,
        /// Value carried by the control record
        actual: u64,
    },

    /// A mandatory record is absent
    #[error("Missing {record}")]
    MissingRecord {
        /// Record kind that was expected
        record: String,
    },

    /// A batch was created or read without any entries
    #[error("Batch {batch_number} has no entries")]
    EmptyBatch {
        /// Batch number from the batch header
        batch_number: u32,
    },

    /// A lower-level error wrapped with the step that produced it
    #[error("{context}: {source}")]
    Build {
        /// The step that failed
        context: String,
        /// The underlying error
        source: Box<AchError>,
    },
}

// Conversion from io::Error to AchError
impl From<std::io::Error> for AchError {
    fn from(error: std::io::Error) -> Self {
        AchError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to AchError
impl From<csv::Error> for AchError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        AchError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl AchError {
    /// Create an InvalidField error
    pub fn invalid_field(record: &str, field: &str, message: impl Into<String>) -> Self {
        AchError::InvalidField {
            record: record.to_string(),
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Create a ControlMismatch error
    pub fn control_mismatch(record: &str, field: &str, expected: u64, actual: u64) -> Self {
        AchError::ControlMismatch {
            record: record.to_string(),
            field: field.to_string(),
            expected,
            actual,
        }
    }

    /// Create a MissingRecord error
    pub fn missing_record(record: &str) -> Self {
        AchError::MissingRecord {
            record: record.to_string(),
        }
    }

    /// Create a RecordParse error
    pub fn record_parse(line: u64, message: impl Into<String>) -> Self {
        AchError::RecordParse {
            line,
            message: message.into(),
        }
    }

    /// Wrap this error with the step that produced it
    pub fn context(self, context: &str) -> Self {
        AchError::Build {
            context: context.to_string(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        AchError::FileNotFound { path: "transactions.ach".to_string() },
        "File not found: transactions.ach"
    )]
    #[case::io_error(
        AchError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        AchError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        AchError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::record_parse(
        AchError::record_parse(3, "record must be 94 characters, found 80"),
        "Record parse error at line 3: record must be 94 characters, found 80"
    )]
    #[case::invalid_field(
        AchError::invalid_field("entry detail", "check digit", "expected 0, found 5"),
        "Invalid check digit in entry detail: expected 0, found 5"
    )]
    #[case::control_mismatch(
        AchError::control_mismatch("batch control", "total credit", 100, 90),
        "batch control total credit mismatch: expected 100, found 90"
    )]
    #[case::missing_record(
        AchError::missing_record("file control"),
        "Missing file control"
    )]
    #[case::empty_batch(
        AchError::EmptyBatch { batch_number: 7 },
        "Batch 7 has no entries"
    )]
    fn test_error_display(#[case] error: AchError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_context_wraps_source() {
        let error = AchError::EmptyBatch { batch_number: 1 }.context("unexpected error building batch");
        assert_eq!(
            error.to_string(),
            "unexpected error building batch: Batch 1 has no entries"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: AchError = io_error.into();
        assert!(matches!(error, AchError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
