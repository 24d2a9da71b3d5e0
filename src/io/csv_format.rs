//! CSV format handling for transaction input
//!
//! This module centralizes all CSV format concerns, providing:
//! - CsvRecord structure for deserialization
//! - Conversion from CSV records to domain transactions
//! - Conversion of decimal dollar amounts to cents
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Columns
//!
//! `type,account,company,trace,amount,return_code,original_trace,addenda_information,original_dfi`
//!
//! The last four columns are only read for chargebacks.

use crate::types::{
    BaseTransaction, Cents, ChargebackTransaction, CreditTransaction, DebitTransaction,
    Transaction,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// CSV record structure for deserialization
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    #[serde(rename = "type")]
    pub tx_type: String,
    pub account: String,
    pub company: String,
    pub trace: String,
    pub amount: String,
    pub return_code: Option<String>,
    pub original_trace: Option<String>,
    pub addenda_information: Option<String>,
    pub original_dfi: Option<String>,
}

/// Convert a dollar amount such as `2344.30` to cents
///
/// Rejects negative amounts and amounts with fractions of a cent.
pub fn parse_amount(amount: &str) -> Result<Cents, String> {
    let amount = amount.trim();
    let decimal =
        Decimal::from_str(amount).map_err(|_| format!("Invalid amount '{}'", amount))?;

    if decimal.is_sign_negative() {
        return Err(format!("Negative amount '{}'", amount));
    }

    let cents = decimal * Decimal::ONE_HUNDRED;
    if !cents.fract().is_zero() {
        return Err(format!("Amount '{}' has more than two decimal places", amount));
    }

    cents
        .to_u64()
        .ok_or_else(|| format!("Amount '{}' is out of range", amount))
}

/// Convert cents back to a two-place dollar amount for display
pub fn cents_to_dollars(cents: Cents) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(cents), 2)
}

/// Convert a CsvRecord to a Transaction
///
/// This function:
/// - Parses the transaction type string (case-insensitive)
/// - Converts the amount to cents
/// - Requires the return columns for chargebacks
///
/// # Returns
///
/// - Ok(Transaction) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<Transaction, String> {
    let amount = parse_amount(&csv_record.amount)
        .map_err(|e| format!("{} for trace {}", e, csv_record.trace))?;

    let base = BaseTransaction {
        depository_account_number: csv_record.account,
        receiving_company: csv_record.company,
        original_trace_number: csv_record.trace,
        amount,
    };

    match csv_record.tx_type.to_lowercase().as_str() {
        "credit" => Ok(CreditTransaction { base }.into()),
        "debit" => Ok(DebitTransaction { base }.into()),
        "chargeback" => {
            let trace = base.original_trace_number.clone();
            let require = |value: Option<String>, column: &str| {
                value
                    .filter(|v| !v.trim().is_empty())
                    .ok_or_else(|| format!("Chargeback {} requires {}", trace, column))
            };

            Ok(ChargebackTransaction {
                return_code: require(csv_record.return_code, "return_code")?,
                original_trace: require(csv_record.original_trace, "original_trace")?,
                original_depository_institution: require(
                    csv_record.original_dfi,
                    "original_dfi",
                )?,
                addenda_information: csv_record.addenda_information.unwrap_or_default(),
                base,
            }
            .into())
        }
        _ => Err(format!(
            "Invalid transaction type: '{}' for trace {}",
            csv_record.tx_type, base.original_trace_number
        )),
    }
}
