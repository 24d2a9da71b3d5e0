//! Sample file metadata and transactions used by the drivers

use crate::nacha::StandardEntryClassCode;
use crate::types::{
    AchData, BaseTransaction, ChargebackTransaction, CreditTransaction, DebitTransaction,
    Originator, Transaction,
};

pub fn sample_metadata() -> AchData {
    AchData {
        destination: "123456780".to_string(),
        destination_name: "DEST BANK".to_string(),
        origin: "123456789".to_string(),
        origin_name: "ORIG BANK".to_string(),
        transactions_date: "231229".to_string(),
        reference_code: "1".to_string(),
        standard_entry_class_code: StandardEntryClassCode::Ppd,
        batch_number: 4964830,
    }
}

pub fn sample_originator() -> Originator {
    Originator {
        company_name: "COMPANYONE".to_string(),
        company_description: "VNDR PAY".to_string(),
        identification: "123456780".to_string(),
        batch_number: 0,
    }
}

fn base(account: &str, company: &str, trace: &str, amount: u64) -> BaseTransaction {
    BaseTransaction {
        depository_account_number: account.to_string(),
        receiving_company: company.to_string(),
        original_trace_number: trace.to_string(),
        amount,
    }
}

fn credit(account: &str, company: &str, trace: &str, amount: u64) -> Transaction {
    CreditTransaction {
        base: base(account, company, trace, amount),
    }
    .into()
}

fn debit(account: &str, company: &str, trace: &str, amount: u64) -> Transaction {
    DebitTransaction {
        base: base(account, company, trace, amount),
    }
    .into()
}

/// Five credits and two debits
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        credit("1111111111", "CompOne", "8058467", 234430),
        debit("1111111112", "CompTwo", "8058468", 100000),
        credit("1111111113", "CompThree", "8058469", 200000),
        credit("1111111114", "CompFour", "8058470", 500000),
        credit("1111111115", "CompFive", "8058471", 800000),
        debit("1111111116", "CompSix", "8058472", 107000),
        credit("1111111117", "CompSeven", "8058473", 103400),
    ]
}

/// A single R10 (authorization revoked) return
pub fn sample_chargebacks() -> Vec<Transaction> {
    vec![ChargebackTransaction {
        base: base("1111111117", "CompEight", "8058474", 103400),
        return_code: "R10".to_string(),
        original_trace: "1111111111".to_string(),
        addenda_information: "Authorization Revoked".to_string(),
        original_depository_institution: "123456780".to_string(),
    }
    .into()]
}
