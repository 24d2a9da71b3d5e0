//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Credit, debit, and chargeback transactions
//! - `metadata`: File routing data and originator details
//! - `error`: Error types for the ACH builder

pub mod error;
pub mod metadata;
pub mod transaction;

pub use error::AchError;
pub use metadata::{AchData, Originator};
pub use transaction::{
    BaseTransaction, Cents, ChargebackTransaction, CreditTransaction, DebitTransaction,
    Transaction,
};
