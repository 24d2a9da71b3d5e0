//! ACH Builder Library
//! # Overview
//!
//! This library builds NACHA-formatted ACH files from simple credit, debit,
//! and chargeback descriptions, writes them to disk, and reads them back with
//! full control-total validation.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (transactions, file metadata, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Mapping transactions onto an ACH file:
//!   - [`core::builder`] - File header, batch, and entry assembly
//!   - [`core::traits`] - Per-transaction entry construction
//! - [`nacha`] - Fixed-width record codec, batch/file validation, reader and
//!   writer
//! - [`io`] - CSV transaction input and `.ach` file output
//! - [`driver`] - The send, chargeback, and read commands
//!
//! # Transaction Types
//!
//! - **Credit**: Checking credit (transaction code 22)
//! - **Debit**: Checking debit (transaction code 27)
//! - **Chargeback**: General ledger credit (code 42) with a return addenda
//!
//! # File Layout
//!
//! Every file holds one file header, one mixed debit/credit batch, and a file
//! control, padded with filler records to a multiple of ten 94-character
//! lines.

// Module declarations
pub mod cli;
pub mod core;
pub mod driver;
pub mod io;
pub mod nacha;
pub mod types;

pub use core::{build_ach, build_ach_file, EntryBuilder};
pub use driver::{create_driver, BuildConfig, Driver};
pub use io::{dump_ach, read_transactions_csv};
pub use nacha::{read_file, write_to_string, AchFile};
pub use types::{
    AchData, AchError, BaseTransaction, Cents, ChargebackTransaction, CreditTransaction,
    DebitTransaction, Originator, Transaction,
};
