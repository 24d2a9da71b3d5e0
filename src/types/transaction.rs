//! Transaction types for the ACH builder
//!
//! This module defines the transactions a driver hands to the builder. Each
//! kind knows how to turn itself into an ACH entry detail record; everything
//! else (routing, trace numbers, control totals) is filled in by the builder
//! and the `nacha` codec.

use crate::core::EntryBuilder;
use crate::nacha::{Addenda99, EntryDetail, TransactionCode};
use std::fmt;

/// Monetary amount in cents
pub type Cents = u64;

/// Fields shared by every transaction kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseTransaction {
    /// Receiver's account number at the receiving institution
    pub depository_account_number: String,

    /// Name of the receiving company, written to the individual name field
    pub receiving_company: String,

    /// Receiver's reference for the transaction, written to the
    /// identification number field
    pub original_trace_number: String,

    /// Transaction amount in cents
    pub amount: Cents,
}

impl BaseTransaction {
    /// Build an entry with the shared fields and the given transaction code
    fn entry(&self, code: TransactionCode) -> EntryDetail {
        let mut entry = EntryDetail::new(code);
        entry.dfi_account_number = self.depository_account_number.clone();
        entry.amount = self.amount;
        entry.set_original_trace_number(&self.original_trace_number);
        entry.set_receiving_company(&self.receiving_company);
        entry
    }
}

impl fmt::Display for BaseTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Depository AccountNumber: {}",
            self.depository_account_number
        )?;
        writeln!(f, "Receiving Company: {}", self.receiving_company)?;
        writeln!(f, "Original Trace Number: {}", self.original_trace_number)?;
        writeln!(f, "Amount: {}", self.amount)
    }
}

/// Credit to the receiver's checking account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditTransaction {
    pub base: BaseTransaction,
}

impl EntryBuilder for CreditTransaction {
    fn build_entry(&self) -> EntryDetail {
        self.base.entry(TransactionCode::CheckingCredit)
    }
}

impl fmt::Display for CreditTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Type: CREDIT")?;
        write!(f, "{}", self.base)
    }
}

/// Debit from the receiver's checking account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebitTransaction {
    pub base: BaseTransaction,
}

impl EntryBuilder for DebitTransaction {
    fn build_entry(&self) -> EntryDetail {
        self.base.entry(TransactionCode::CheckingDebit)
    }
}

impl fmt::Display for DebitTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Type: DEBIT")?;
        write!(f, "{}", self.base)
    }
}

/// Return of a previously settled entry
///
/// Written as a general ledger credit followed by a return addenda that
/// identifies the original entry and the reason for the return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargebackTransaction {
    pub base: BaseTransaction,

    /// Return reason code, e.g. `R10`
    pub return_code: String,

    /// Trace number of the entry being returned
    pub original_trace: String,

    /// Free text carried in the addenda
    pub addenda_information: String,

    /// Routing number of the institution that received the original entry
    pub original_depository_institution: String,
}

impl EntryBuilder for ChargebackTransaction {
    fn build_entry(&self) -> EntryDetail {
        let mut entry = self.base.entry(TransactionCode::GLCredit);

        let mut addenda = Addenda99::new();
        addenda.return_code = self.return_code.clone();
        addenda.original_trace = self.original_trace.clone();
        addenda.addenda_information = self.addenda_information.clone();
        addenda.set_original_dfi(&self.original_depository_institution);
        entry.set_addenda99(addenda);

        entry
    }
}

impl fmt::Display for ChargebackTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Type: CHARGEBACK")?;
        write!(f, "{}", self.base)?;
        writeln!(f, "Return Code: {}", self.return_code)?;
        writeln!(f, "Original Trace: {}", self.original_trace)?;
        writeln!(f, "Addenda Information: {}", self.addenda_information)?;
        writeln!(
            f,
            "Original Depository Institution: {}",
            self.original_depository_institution
        )
    }
}

/// Any transaction the builder accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Credit(CreditTransaction),
    Debit(DebitTransaction),
    Chargeback(ChargebackTransaction),
}

impl Transaction {
    pub fn base(&self) -> &BaseTransaction {
        match self {
            Transaction::Credit(t) => &t.base,
            Transaction::Debit(t) => &t.base,
            Transaction::Chargeback(t) => &t.base,
        }
    }
}

impl EntryBuilder for Transaction {
    fn build_entry(&self) -> EntryDetail {
        match self {
            Transaction::Credit(t) => t.build_entry(),
            Transaction::Debit(t) => t.build_entry(),
            Transaction::Chargeback(t) => t.build_entry(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transaction::Credit(t) => fmt::Display::fmt(t, f),
            Transaction::Debit(t) => fmt::Display::fmt(t, f),
            Transaction::Chargeback(t) => fmt::Display::fmt(t, f),
        }
    }
}

impl From<CreditTransaction> for Transaction {
    fn from(t: CreditTransaction) -> Self {
        Transaction::Credit(t)
    }
}

impl From<DebitTransaction> for Transaction {
    fn from(t: DebitTransaction) -> Self {
        Transaction::Debit(t)
    }
}

impl From<ChargebackTransaction> for Transaction {
    fn from(t: ChargebackTransaction) -> Self {
        Transaction::Chargeback(t)
    }
}
