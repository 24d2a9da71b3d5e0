//! ACH file assembly and reconciliation

use super::batch::Batch;
use super::control::{FileControl, ENTRY_HASH_MODULUS};
use super::fields::BLOCKING_FACTOR;
use super::file_header::FileHeader;
use crate::types::AchError;

const RECORD: &str = "file control";

/// An in-memory ACH file
///
/// Built up with [`AchFile::set_header`] and [`AchFile::add_batch`], then
/// finalised with [`AchFile::create`], which derives the [`FileControl`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AchFile {
    pub header: FileHeader,
    pub batches: Vec<Batch>,
    pub control: FileControl,
}

impl AchFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_header(&mut self, header: FileHeader) {
        self.header = header;
    }

    pub fn add_batch(&mut self, batch: Batch) {
        self.batches.push(batch);
    }

    /// Number of records before filler: header, batches, and control
    pub fn record_count(&self) -> usize {
        2 + self.batches.iter().map(Batch::record_count).sum::<usize>()
    }

    /// Validate the header and batches and populate the file control
    ///
    /// Batches are expected to have been created already; their controls feed
    /// the file totals, which must fit the file control fields.
    pub fn create(&mut self) -> Result<(), AchError> {
        self.header.validate()?;
        if self.batches.is_empty() {
            return Err(AchError::missing_record("batch"));
        }
        for batch in &self.batches {
            batch.validate()?;
        }

        let control = self.compute_control();
        control.check_limits()?;
        self.control = control;
        Ok(())
    }

    /// Check the header, every batch, and the file control totals
    pub fn validate(&self) -> Result<(), AchError> {
        self.header.validate()?;
        if self.batches.is_empty() {
            return Err(AchError::missing_record("batch"));
        }
        for batch in &self.batches {
            batch.validate()?;
        }

        let expected = self.compute_control();
        expected.check_limits()?;
        let control = &self.control;
        let fields = [
            (
                "batch count",
                u64::from(expected.batch_count),
                u64::from(control.batch_count),
            ),
            (
                "block count",
                u64::from(expected.block_count),
                u64::from(control.block_count),
            ),
            (
                "entry/addenda count",
                u64::from(expected.entry_addenda_count),
                u64::from(control.entry_addenda_count),
            ),
            ("entry hash", expected.entry_hash, control.entry_hash),
            (
                "total debit",
                expected.total_debit_entry_dollar_amount_in_file,
                control.total_debit_entry_dollar_amount_in_file,
            ),
            (
                "total credit",
                expected.total_credit_entry_dollar_amount_in_file,
                control.total_credit_entry_dollar_amount_in_file,
            ),
        ];
        for (field, expected, actual) in fields {
            if expected != actual {
                return Err(AchError::control_mismatch(RECORD, field, expected, actual));
            }
        }
        Ok(())
    }

    fn compute_control(&self) -> FileControl {
        let controls = self.batches.iter().map(Batch::control);

        FileControl {
            batch_count: self.batches.len() as u32,
            block_count: self.record_count().div_ceil(BLOCKING_FACTOR) as u32,
            entry_addenda_count: controls.clone().map(|c| c.entry_addenda_count).sum(),
            entry_hash: controls
                .clone()
                .fold(0, |hash, c| (hash + c.entry_hash) % ENTRY_HASH_MODULUS),
            total_debit_entry_dollar_amount_in_file: controls
                .clone()
                .map(|c| c.total_debit_entry_dollar_amount)
                .sum(),
            total_credit_entry_dollar_amount_in_file: controls
                .map(|c| c.total_credit_entry_dollar_amount)
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nacha::batch_header::BatchHeader;
    use crate::nacha::codes::TransactionCode;
    use crate::nacha::control::MAX_TOTAL_AMOUNT;
    use crate::nacha::entry::{EntryDetail, MAX_AMOUNT};

    fn file_header() -> FileHeader {
        FileHeader {
            immediate_destination: "123456780".to_string(),
            immediate_origin: "123456789".to_string(),
            file_creation_date: "231229".to_string(),
            file_creation_time: "0930".to_string(),
            immediate_destination_name: "DEST BANK".to_string(),
            immediate_origin_name: "ORIG BANK".to_string(),
            ..FileHeader::new()
        }
    }

    fn batch(batch_number: u32, amounts: &[(TransactionCode, u64)]) -> Batch {
        let mut header = BatchHeader {
            company_name: "COMPANYONE".to_string(),
            company_identification: "123456789".to_string(),
            company_entry_description: "VNDR PAY".to_string(),
            effective_entry_date: "231229".to_string(),
            batch_number,
            ..BatchHeader::new()
        };
        header.set_odfi("123456780");

        let mut batch = Batch::new(header);
        for (i, (code, amount)) in amounts.iter().enumerate() {
            let mut entry = EntryDetail::new(*code);
            entry.dfi_account_number = "1111111111".to_string();
            entry.amount = *amount;
            entry.set_rdfi("123456780");
            entry.set_trace_number("12345678", i as u32 + 1);
            batch.add_entry(entry);
        }
        batch.create().unwrap();
        batch
    }

    #[test]
    fn test_create_sums_batches() {
        let mut file = AchFile::new();
        file.set_header(file_header());
        file.add_batch(batch(
            1,
            &[
                (TransactionCode::CheckingCredit, 1000),
                (TransactionCode::CheckingDebit, 250),
            ],
        ));
        file.add_batch(batch(2, &[(TransactionCode::CheckingCredit, 4000)]));

        file.create().unwrap();

        assert_eq!(file.control.batch_count, 2);
        assert_eq!(file.control.entry_addenda_count, 3);
        assert_eq!(file.control.entry_hash, 3 * 12345678);
        assert_eq!(file.control.total_credit_entry_dollar_amount_in_file, 5000);
        assert_eq!(file.control.total_debit_entry_dollar_amount_in_file, 250);
        // 1 header + (2 + 2) + (2 + 1) + 1 control = 9 records
        assert_eq!(file.record_count(), 9);
        assert_eq!(file.control.block_count, 1);
        assert!(file.validate().is_ok());
    }

    #[test]
    fn test_block_count_rounds_up() {
        let entries: Vec<_> = (0..7).map(|_| (TransactionCode::CheckingCredit, 1)).collect();
        let mut file = AchFile::new();
        file.set_header(file_header());
        file.add_batch(batch(1, &entries));
        file.create().unwrap();

        assert_eq!(file.record_count(), 11);
        assert_eq!(file.control.block_count, 2);
    }

    #[test]
    fn test_create_requires_a_batch() {
        let mut file = AchFile::new();
        file.set_header(file_header());
        assert_eq!(
            file.create().unwrap_err(),
            AchError::missing_record("batch")
        );
    }

    #[test]
    fn test_create_validates_header() {
        let mut file = AchFile::new();
        file.add_batch(batch(1, &[(TransactionCode::CheckingCredit, 1)]));
        assert!(matches!(
            file.create().unwrap_err(),
            AchError::InvalidField { .. }
        ));
    }

    #[test]
    fn test_validate_detects_control_mismatch() {
        let mut file = AchFile::new();
        file.set_header(file_header());
        file.add_batch(batch(1, &[(TransactionCode::CheckingCredit, 700)]));
        file.create().unwrap();

        file.control.batch_count = 3;
        assert_eq!(
            file.validate().unwrap_err(),
            AchError::control_mismatch("file control", "batch count", 1, 3)
        );
    }

    #[test]
    fn test_create_rejects_file_total_wider_than_field() {
        let full: Vec<_> = (0..100)
            .map(|_| (TransactionCode::CheckingCredit, MAX_AMOUNT))
            .collect();
        let mut file = AchFile::new();
        file.set_header(file_header());
        file.add_batch(batch(1, &full));
        file.add_batch(batch(2, &full));

        assert_eq!(
            file.create().unwrap_err(),
            AchError::invalid_field(
                "file control",
                "total credit",
                format!("{} exceeds {}", 200 * MAX_AMOUNT, MAX_TOTAL_AMOUNT)
            )
        );
    }
}
