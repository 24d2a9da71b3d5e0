//! Batch assembly and reconciliation
//!
//! A [`Batch`] groups entries under one [`BatchHeader`]. [`Batch::create`]
//! validates the header and entries and derives the [`BatchControl`];
//! [`Batch::validate`] checks that an existing control still reconciles with
//! the entries, which is how files read from disk are verified.

use super::batch_header::BatchHeader;
use super::codes::Category;
use super::control::{BatchControl, ENTRY_HASH_MODULUS};
use super::entry::EntryDetail;
use crate::types::AchError;

const RECORD: &str = "batch control";

/// A batch of entries and its header/control records
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    header: BatchHeader,
    entries: Vec<EntryDetail>,
    control: BatchControl,
}

impl Batch {
    /// Create an empty batch for the given header
    pub fn new(header: BatchHeader) -> Self {
        Batch {
            header,
            entries: Vec::new(),
            control: BatchControl::default(),
        }
    }

    /// Reassemble a batch from parsed records without recomputing the control
    pub(crate) fn from_parts(
        header: BatchHeader,
        entries: Vec<EntryDetail>,
        control: BatchControl,
    ) -> Self {
        Batch {
            header,
            entries,
            control,
        }
    }

    pub fn header(&self) -> &BatchHeader {
        &self.header
    }

    pub fn entries(&self) -> &[EntryDetail] {
        &self.entries
    }

    pub fn control(&self) -> &BatchControl {
        &self.control
    }

    pub fn add_entry(&mut self, entry: EntryDetail) {
        self.entries.push(entry);
    }

    /// Number of records the batch occupies in a file, header and control included
    pub fn record_count(&self) -> usize {
        2 + self.control.entry_addenda_count as usize
    }

    /// Validate the header and entries and populate the batch control
    ///
    /// Return addenda inherit the trace number of the entry they follow.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The batch has no entries
    /// - The header or any entry fails field validation
    /// - Trace numbers are not ascending or do not start with the ODFI id
    /// - An entry's direction is not allowed by the service class code
    /// - A control total or count does not fit its field
    pub fn create(&mut self) -> Result<(), AchError> {
        self.header.validate()?;
        if self.entries.is_empty() {
            return Err(AchError::EmptyBatch {
                batch_number: self.header.batch_number,
            });
        }

        for entry in &mut self.entries {
            if let Some(addenda) = entry.addenda99.as_mut() {
                addenda.trace_number = entry.trace_number.clone();
            }
        }

        self.control = self.compute_control();
        self.validate()
    }

    /// Check the entries against the header and the control record
    pub fn validate(&self) -> Result<(), AchError> {
        self.header.validate()?;
        if self.entries.is_empty() {
            return Err(AchError::EmptyBatch {
                batch_number: self.header.batch_number,
            });
        }

        let mut previous_trace: Option<&str> = None;
        for entry in &self.entries {
            entry.validate()?;

            if !self.header.service_class_code.permits(entry.transaction_code) {
                return Err(AchError::invalid_field(
                    "entry detail",
                    "transaction code",
                    format!(
                        "{} is not allowed in a batch with service class code {}",
                        entry.transaction_code, self.header.service_class_code
                    ),
                ));
            }
            if !entry
                .trace_number
                .starts_with(&self.header.odfi_identification)
            {
                return Err(AchError::invalid_field(
                    "entry detail",
                    "trace number",
                    format!(
                        "{} does not start with ODFI {}",
                        entry.trace_number, self.header.odfi_identification
                    ),
                ));
            }
            if let Some(previous) = previous_trace {
                if entry.trace_number.as_str() <= previous {
                    return Err(AchError::invalid_field(
                        "entry detail",
                        "trace number",
                        format!(
                            "{} is not greater than the preceding {}",
                            entry.trace_number, previous
                        ),
                    ));
                }
            }
            if let Some(addenda) = &entry.addenda99 {
                if addenda.trace_number != entry.trace_number {
                    return Err(AchError::invalid_field(
                        "addenda 99",
                        "trace number",
                        format!(
                            "{} does not match entry trace number {}",
                            addenda.trace_number, entry.trace_number
                        ),
                    ));
                }
            }
            previous_trace = Some(entry.trace_number.as_str());
        }

        self.reconcile_control()
    }

    /// Number of returned entries in the batch
    pub fn return_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.category == Category::Return)
            .count()
    }

    fn compute_control(&self) -> BatchControl {
        BatchControl {
            service_class_code: self.header.service_class_code,
            entry_addenda_count: self
                .entries
                .iter()
                .map(|entry| 1 + entry.addenda_count())
                .sum(),
            entry_hash: self.entry_hash(),
            total_debit_entry_dollar_amount: self
                .entries
                .iter()
                .map(EntryDetail::debit_amount)
                .sum(),
            total_credit_entry_dollar_amount: self
                .entries
                .iter()
                .map(EntryDetail::credit_amount)
                .sum(),
            company_identification: self.header.company_identification.clone(),
            message_authentication_code: String::new(),
            odfi_identification: self.header.odfi_identification.clone(),
            batch_number: self.header.batch_number,
        }
    }

    fn entry_hash(&self) -> u64 {
        self.entries
            .iter()
            .map(EntryDetail::rdfi_hash)
            .fold(0, |hash, rdfi| (hash + rdfi) % ENTRY_HASH_MODULUS)
    }

    fn reconcile_control(&self) -> Result<(), AchError> {
        let expected = self.compute_control();
        expected.check_limits()?;
        let control = &self.control;

        if control.service_class_code != expected.service_class_code {
            return Err(AchError::control_mismatch(
                RECORD,
                "service class code",
                u64::from(expected.service_class_code.code()),
                u64::from(control.service_class_code.code()),
            ));
        }

        let counts = [
            (
                "entry/addenda count",
                u64::from(expected.entry_addenda_count),
                u64::from(control.entry_addenda_count),
            ),
            ("entry hash", expected.entry_hash, control.entry_hash),
            (
                "total debit",
                expected.total_debit_entry_dollar_amount,
                control.total_debit_entry_dollar_amount,
            ),
            (
                "total credit",
                expected.total_credit_entry_dollar_amount,
                control.total_credit_entry_dollar_amount,
            ),
            (
                "batch number",
                u64::from(expected.batch_number),
                u64::from(control.batch_number),
            ),
        ];
        for (field, expected, actual) in counts {
            if expected != actual {
                return Err(AchError::control_mismatch(RECORD, field, expected, actual));
            }
        }

        if control.odfi_identification != expected.odfi_identification {
            return Err(AchError::invalid_field(
                RECORD,
                "ODFI identification",
                format!(
                    "'{}' does not match batch header '{}'",
                    control.odfi_identification, expected.odfi_identification
                ),
            ));
        }
        if control.company_identification != expected.company_identification {
            return Err(AchError::invalid_field(
                RECORD,
                "company identification",
                format!(
                    "'{}' does not match batch header '{}'",
                    control.company_identification, expected.company_identification
                ),
            ));
        }
        Ok(())
    }
}
