//! Batch control (type 8) and file control (type 9) records
//!
//! Control records carry counts and totals derived from the entries they
//! close. They are produced by `create` and reconciled by `validate`.

use super::codes::ServiceClassCode;
use super::fields::{alpha_field, numeric_field, string_field, RecordLine};
use crate::types::AchError;

/// Entry hashes keep only the low-order ten digits
pub const ENTRY_HASH_MODULUS: u64 = 10_000_000_000;

/// Largest value the 12-digit control total fields can hold
pub const MAX_TOTAL_AMOUNT: u64 = 999_999_999_999;

/// Largest value the 6-digit batch entry/addenda count can hold
pub const MAX_BATCH_ENTRY_ADDENDA_COUNT: u32 = 999_999;

/// Largest value the 8-digit file entry/addenda count can hold
pub const MAX_FILE_ENTRY_ADDENDA_COUNT: u32 = 99_999_999;

/// Largest value the 6-digit batch and block count fields can hold
pub const MAX_FILE_COUNT: u32 = 999_999;

fn require_max(record: &str, field: &str, value: u64, max: u64) -> Result<(), AchError> {
    if value > max {
        return Err(AchError::invalid_field(
            record,
            field,
            format!("{} exceeds {}", value, max),
        ));
    }
    Ok(())
}

/// Batch control record
#[derive(Debug, Clone, PartialEq)]
pub struct BatchControl {
    pub service_class_code: ServiceClassCode,
    /// Entry detail plus addenda records in the batch
    pub entry_addenda_count: u32,
    /// Sum of the entries' 8-digit RDFI ids, modulo 10^10
    pub entry_hash: u64,
    pub total_debit_entry_dollar_amount: u64,
    pub total_credit_entry_dollar_amount: u64,
    pub company_identification: String,
    pub message_authentication_code: String,
    pub odfi_identification: String,
    pub batch_number: u32,
}

impl Default for BatchControl {
    fn default() -> Self {
        BatchControl {
            service_class_code: ServiceClassCode::MixedDebitsAndCredits,
            entry_addenda_count: 0,
            entry_hash: 0,
            total_debit_entry_dollar_amount: 0,
            total_credit_entry_dollar_amount: 0,
            company_identification: String::new(),
            message_authentication_code: String::new(),
            odfi_identification: String::new(),
            batch_number: 0,
        }
    }
}

impl BatchControl {
    /// Reject counts and totals too wide for their fields
    pub fn check_limits(&self) -> Result<(), AchError> {
        const RECORD: &str = "batch control";
        require_max(
            RECORD,
            "entry/addenda count",
            u64::from(self.entry_addenda_count),
            u64::from(MAX_BATCH_ENTRY_ADDENDA_COUNT),
        )?;
        require_max(
            RECORD,
            "total debit",
            self.total_debit_entry_dollar_amount,
            MAX_TOTAL_AMOUNT,
        )?;
        require_max(
            RECORD,
            "total credit",
            self.total_credit_entry_dollar_amount,
            MAX_TOTAL_AMOUNT,
        )
    }

    /// Format as a 94-character record
    pub fn to_record(&self) -> String {
        format!(
            "8{}{}{}{}{}{}{}{}{}{}",
            self.service_class_code.code(),
            numeric_field(u64::from(self.entry_addenda_count), 6),
            numeric_field(self.entry_hash, 10),
            numeric_field(self.total_debit_entry_dollar_amount, 12),
            numeric_field(self.total_credit_entry_dollar_amount, 12),
            alpha_field(&self.company_identification, 10),
            alpha_field(&self.message_authentication_code, 19),
            alpha_field("", 6),
            string_field(&self.odfi_identification, 8),
            numeric_field(u64::from(self.batch_number), 7),
        )
    }

    pub(crate) fn parse(line: &RecordLine<'_>) -> Result<Self, AchError> {
        let scc: u16 = line.number(2, 4, "service class code")?;
        let service_class_code = ServiceClassCode::from_code(scc).ok_or_else(|| {
            AchError::record_parse(line.line(), format!("unknown service class code {}", scc))
        })?;

        Ok(BatchControl {
            service_class_code,
            entry_addenda_count: line.number(5, 10, "entry/addenda count")?,
            entry_hash: line.number(11, 20, "entry hash")?,
            total_debit_entry_dollar_amount: line.number(21, 32, "total debit amount")?,
            total_credit_entry_dollar_amount: line.number(33, 44, "total credit amount")?,
            company_identification: line.alpha(45, 54),
            message_authentication_code: line.alpha(55, 73),
            odfi_identification: line.field(80, 87).to_string(),
            batch_number: line.number(88, 94, "batch number")?,
        })
    }
}

/// File control record
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileControl {
    pub batch_count: u32,
    /// Number of 10-record blocks, filler included
    pub block_count: u32,
    pub entry_addenda_count: u32,
    pub entry_hash: u64,
    pub total_debit_entry_dollar_amount_in_file: u64,
    pub total_credit_entry_dollar_amount_in_file: u64,
}

impl FileControl {
    /// Reject counts and totals too wide for their fields
    pub fn check_limits(&self) -> Result<(), AchError> {
        const RECORD: &str = "file control";
        require_max(
            RECORD,
            "batch count",
            u64::from(self.batch_count),
            u64::from(MAX_FILE_COUNT),
        )?;
        require_max(
            RECORD,
            "block count",
            u64::from(self.block_count),
            u64::from(MAX_FILE_COUNT),
        )?;
        require_max(
            RECORD,
            "entry/addenda count",
            u64::from(self.entry_addenda_count),
            u64::from(MAX_FILE_ENTRY_ADDENDA_COUNT),
        )?;
        require_max(
            RECORD,
            "total debit",
            self.total_debit_entry_dollar_amount_in_file,
            MAX_TOTAL_AMOUNT,
        )?;
        require_max(
            RECORD,
            "total credit",
            self.total_credit_entry_dollar_amount_in_file,
            MAX_TOTAL_AMOUNT,
        )
    }

    /// Format as a 94-character record
    pub fn to_record(&self) -> String {
        format!(
            "9{}{}{}{}{}{}{}",
            numeric_field(u64::from(self.batch_count), 6),
            numeric_field(u64::from(self.block_count), 6),
            numeric_field(u64::from(self.entry_addenda_count), 8),
            numeric_field(self.entry_hash, 10),
            numeric_field(self.total_debit_entry_dollar_amount_in_file, 12),
            numeric_field(self.total_credit_entry_dollar_amount_in_file, 12),
            alpha_field("", 39),
        )
    }

    pub(crate) fn parse(line: &RecordLine<'_>) -> Result<Self, AchError> {
        Ok(FileControl {
            batch_count: line.number(2, 7, "batch count")?,
            block_count: line.number(8, 13, "block count")?,
            entry_addenda_count: line.number(14, 21, "entry/addenda count")?,
            entry_hash: line.number(22, 31, "entry hash")?,
            total_debit_entry_dollar_amount_in_file: line.number(32, 43, "total debit amount")?,
            total_credit_entry_dollar_amount_in_file: line.number(
                44,
                55,
                "total credit amount",
            )?,
        })
    }
}
