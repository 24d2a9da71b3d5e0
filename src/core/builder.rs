//! ACH file builder
//!
//! This module maps driver-level data onto the `nacha` codec: one file header,
//! one mixed debit/credit batch, and one entry per transaction.
//!
//! # Field Mapping
//!
//! - File header: destination/origin routing and names, creation date/time,
//!   reference code
//! - Batch header: originator company name, company entry description from
//!   the originator's description (not its name), company id taken from the
//!   immediate origin, transactions date as both descriptive and effective
//!   entry date, ODFI from the originator's routing number, batch number from
//!   the file metadata (`Originator::batch_number` is not written)
//! - Entries: RDFI from the destination, trace numbers from the ODFI and the
//!   entry's position in the batch (starting at 1)

use crate::core::traits::EntryBuilder;
use crate::nacha::{
    write_to_string, AchFile, Batch, BatchHeader, FileHeader, ServiceClassCode,
};
use crate::types::{AchData, AchError, Originator, Transaction};
use chrono::NaiveDateTime;

/// Build an ACH file and render it as NACHA text
///
/// # Arguments
///
/// * `meta` - Routing, naming, and dating for the file
/// * `originator` - The company originating the entries
/// * `transactions` - Entries to place in the batch, in order
/// * `created_at` - File creation timestamp
///
/// # Errors
///
/// Returns the codec's validation error wrapped with the step that failed:
/// - "unexpected error building batch"
/// - "unexpected error building file"
/// - "could not write ach"
pub fn build_ach(
    meta: &AchData,
    originator: &Originator,
    transactions: &[Transaction],
    created_at: NaiveDateTime,
) -> Result<String, AchError> {
    let file = build_ach_file(meta, originator, transactions, created_at)?;
    write_to_string(&file).map_err(|e| e.context("could not write ach"))
}

/// Build and create the in-memory ACH file without serializing it
pub fn build_ach_file(
    meta: &AchData,
    originator: &Originator,
    transactions: &[Transaction],
    created_at: NaiveDateTime,
) -> Result<AchFile, AchError> {
    let mut fh = FileHeader::new();
    fh.immediate_destination = meta.destination.clone();
    fh.immediate_origin = meta.origin.clone();
    fh.file_creation_date = created_at.format("%y%m%d").to_string();
    fh.file_creation_time = created_at.format("%H%M").to_string();
    fh.immediate_destination_name = meta.destination_name.clone();
    fh.immediate_origin_name = meta.origin_name.clone();
    fh.reference_code = meta.reference_code.clone();

    let mut bh = BatchHeader::new();
    bh.service_class_code = ServiceClassCode::MixedDebitsAndCredits;
    bh.company_name = originator.company_name.clone();
    bh.company_identification = fh.immediate_origin.clone();
    bh.standard_entry_class_code = meta.standard_entry_class_code;
    bh.company_entry_description = originator.company_description.clone();
    bh.company_descriptive_date = meta.transactions_date.clone();
    bh.effective_entry_date = meta.transactions_date.clone();
    bh.set_odfi(&originator.identification);
    // originator.batch_number is informational
    bh.batch_number = meta.batch_number;

    let odfi = bh.odfi_identification.clone();
    let mut batch = Batch::new(bh);

    for (i, transaction) in transactions.iter().enumerate() {
        let mut entry = transaction.build_entry();
        entry.set_rdfi(&meta.destination);
        entry.set_trace_number(&odfi, i as u32 + 1);
        log::debug!(
            "entry {} trace {} amount {}",
            entry.transaction_code,
            entry.trace_number,
            entry.amount
        );
        batch.add_entry(entry);
    }

    batch
        .create()
        .map_err(|e| e.context("unexpected error building batch"))?;

    let mut file = AchFile::new();
    file.set_header(fh);
    file.add_batch(batch);

    file.create()
        .map_err(|e| e.context("unexpected error building file"))?;

    log::info!(
        "built ACH file: {} entries, credits {} debits {}",
        file.control.entry_addenda_count,
        file.control.total_credit_entry_dollar_amount_in_file,
        file.control.total_debit_entry_dollar_amount_in_file
    );
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nacha::entry::MAX_AMOUNT;
    use crate::nacha::{Category, StandardEntryClassCode, TransactionCode};
    use crate::types::{BaseTransaction, ChargebackTransaction, CreditTransaction, DebitTransaction};
    use chrono::NaiveDate;

    fn created_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 12, 28)
            .unwrap()
            .and_hms_opt(15, 4, 0)
            .unwrap()
    }

    fn meta() -> AchData {
        AchData {
            transactions_date: "231229".to_string(),
            reference_code: "1".to_string(),
            destination: "123456780".to_string(),
            destination_name: "DEST BANK".to_string(),
            origin: "123456789".to_string(),
            origin_name: "ORIG BANK".to_string(),
            standard_entry_class_code: StandardEntryClassCode::Ppd,
            batch_number: 4964830,
        }
    }

    fn originator() -> Originator {
        Originator {
            company_name: "COMPANYONE".to_string(),
            company_description: "VNDR PAY".to_string(),
            identification: "123456780".to_string(),
            batch_number: 0,
        }
    }

    fn base(account: &str, amount: u64) -> BaseTransaction {
        BaseTransaction {
            depository_account_number: account.to_string(),
            receiving_company: "CompOne".to_string(),
            original_trace_number: "8058467".to_string(),
            amount,
        }
    }

    #[test]
    fn test_build_ach_file_maps_headers() {
        let transactions: Vec<Transaction> = vec![CreditTransaction {
            base: base("1111111111", 234430),
        }
        .into()];
        let file = build_ach_file(&meta(), &originator(), &transactions, created_at()).unwrap();

        assert_eq!(file.header.file_creation_date, "231228");
        assert_eq!(file.header.file_creation_time, "1504");
        assert_eq!(file.header.immediate_destination, "123456780");
        assert_eq!(file.header.reference_code, "1");

        let header = file.batches[0].header();
        assert_eq!(
            header.service_class_code,
            ServiceClassCode::MixedDebitsAndCredits
        );
        assert_eq!(header.company_identification, "123456789");
        assert_eq!(header.company_entry_description, "VNDR PAY");
        assert_eq!(header.effective_entry_date, "231229");
        assert_eq!(header.odfi_identification, "12345678");
        assert_eq!(header.batch_number, 4964830);
    }

    #[test]
    fn test_company_entry_description_is_originator_description() {
        let originator = Originator {
            company_name: "COMPANYONE".to_string(),
            company_description: "PAYROLL".to_string(),
            ..originator()
        };
        let transactions: Vec<Transaction> = vec![CreditTransaction {
            base: base("1111111111", 1),
        }
        .into()];
        let file = build_ach_file(&meta(), &originator, &transactions, created_at()).unwrap();

        let header = file.batches[0].header();
        assert_eq!(header.company_name, "COMPANYONE");
        assert_eq!(header.company_entry_description, "PAYROLL");
        assert_ne!(header.company_entry_description, header.company_name);
    }

    #[test]
    fn test_batch_number_comes_from_metadata_not_originator() {
        let originator = Originator {
            batch_number: 17,
            ..originator()
        };
        let transactions: Vec<Transaction> = vec![CreditTransaction {
            base: base("1111111111", 1),
        }
        .into()];
        let file = build_ach_file(&meta(), &originator, &transactions, created_at()).unwrap();

        assert_eq!(file.batches[0].header().batch_number, 4964830);
        assert_eq!(file.batches[0].control().batch_number, 4964830);
    }

    #[test]
    fn test_build_ach_rejects_totals_wider_than_control_field() {
        let transactions: Vec<Transaction> = (1..=101)
            .map(|_| {
                Transaction::from(CreditTransaction {
                    base: base("1111111111", MAX_AMOUNT),
                })
            })
            .collect();

        let err = build_ach(&meta(), &originator(), &transactions, created_at()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "unexpected error building batch: Invalid total credit in batch control: {} exceeds 999999999999",
                101 * MAX_AMOUNT
            )
        );
    }

    #[test]
    fn test_build_ach_file_assigns_routing_and_traces() {
        let transactions: Vec<Transaction> = vec![
            CreditTransaction {
                base: base("1111111111", 234430),
            }
            .into(),
            DebitTransaction {
                base: base("1111111112", 100000),
            }
            .into(),
        ];
        let file = build_ach_file(&meta(), &originator(), &transactions, created_at()).unwrap();

        let entries = file.batches[0].entries();
        assert_eq!(entries[0].rdfi_identification, "12345678");
        assert_eq!(entries[0].check_digit, "0");
        assert_eq!(entries[0].trace_number, "123456780000001");
        assert_eq!(entries[1].trace_number, "123456780000002");
        assert_eq!(entries[1].transaction_code, TransactionCode::CheckingDebit);

        assert_eq!(file.control.total_credit_entry_dollar_amount_in_file, 234430);
        assert_eq!(file.control.total_debit_entry_dollar_amount_in_file, 100000);
    }

    #[test]
    fn test_build_ach_chargeback_writes_addenda() {
        let transactions: Vec<Transaction> = vec![ChargebackTransaction {
            base: base("1111111117", 103400),
            return_code: "R10".to_string(),
            original_trace: "1111111111".to_string(),
            addenda_information: "Authorization Revoked".to_string(),
            original_depository_institution: "123456780".to_string(),
        }
        .into()];
        let text = build_ach(&meta(), &originator(), &transactions, created_at()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[2].starts_with("642"));
        assert!(lines[3].starts_with("799R10"));
        assert!(lines[3].ends_with("123456780000001"));

        let file = build_ach_file(&meta(), &originator(), &transactions, created_at()).unwrap();
        assert_eq!(file.batches[0].entries()[0].category, Category::Return);
    }

    #[test]
    fn test_build_ach_wraps_batch_errors() {
        let err = build_ach(&meta(), &originator(), &[], created_at()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected error building batch: Batch 4964830 has no entries"
        );
    }

    #[test]
    fn test_build_ach_rejects_bad_destination_check_digit() {
        let meta = AchData {
            destination: "123456785".to_string(),
            ..meta()
        };
        let transactions: Vec<Transaction> = vec![CreditTransaction {
            base: base("1111111111", 1),
        }
        .into()];
        let err = build_ach(&meta, &originator(), &transactions, created_at()).unwrap_err();
        assert!(matches!(err, AchError::Build { ref context, .. } if context == "unexpected error building batch"));
        assert!(err.to_string().contains("check digit"));
    }

    #[test]
    fn test_build_ach_wraps_file_errors() {
        let meta = AchData {
            origin: "12AB".to_string(),
            ..meta()
        };
        let transactions: Vec<Transaction> = vec![CreditTransaction {
            base: base("1111111111", 1),
        }
        .into()];
        let err = build_ach(&meta, &originator(), &transactions, created_at()).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("unexpected error building file: Invalid immediate origin"));
    }
}
