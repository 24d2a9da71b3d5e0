//! Core traits for turning transactions into ACH records
//!
//! The builder only needs each transaction to produce an entry detail
//! record; routing, trace numbers, and controls are applied afterwards.

use crate::nacha::EntryDetail;

/// Trait for producing an ACH entry from a transaction
///
/// Implemented by every transaction kind. The returned entry carries the
/// transaction code, account, amount, names, and any addenda; the builder
/// sets the RDFI and trace number.
pub trait EntryBuilder {
    /// Build the entry detail record for this transaction
    fn build_entry(&self) -> EntryDetail;
}
