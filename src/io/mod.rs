//! I/O module
//!
//! Handles transaction input and ACH file output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, amount parsing)
//! - `csv_reader` - CSV transaction reader with iterator interface
//! - `dump` - Writing rendered ACH text to disk

pub mod csv_format;
pub mod csv_reader;
pub mod dump;

pub use csv_format::{cents_to_dollars, convert_csv_record, parse_amount, CsvRecord};
pub use csv_reader::{read_transactions_csv, CsvTransactionReader};
pub use dump::dump_ach;
