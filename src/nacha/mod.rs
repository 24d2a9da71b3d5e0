//! NACHA ACH file codec
//!
//! Builds, validates, writes, and reads ACH files in the NACHA fixed-width
//! format. The drivers only talk to this module through its public types.
//!
//! # Components
//!
//! - `fields` - Fixed-width formatting/parsing helpers and routing check digits
//! - `codes` - Transaction, service class, and standard entry class codes
//! - `file_header`, `batch_header`, `entry`, `control` - Record types
//! - `batch` - Batch assembly, control derivation, and reconciliation
//! - `file` - File assembly and reconciliation
//! - `writer` / `reader` - Text serialization and parsing
//!
//! # File Structure
//!
//! ```text
//! 1  File header
//! 5    Batch header
//! 6      Entry detail
//! 7        Addenda (returns only)
//! 8    Batch control
//! 9  File control
//! 9999...  Filler to a multiple of 10 records
//! ```

pub mod batch;
pub mod batch_header;
pub mod codes;
pub mod control;
pub mod entry;
pub mod fields;
pub mod file;
pub mod file_header;
pub mod reader;
pub mod writer;

pub use batch::Batch;
pub use batch_header::BatchHeader;
pub use codes::{Category, ServiceClassCode, StandardEntryClassCode, TransactionCode};
pub use control::{BatchControl, FileControl};
pub use entry::{Addenda99, EntryDetail};
pub use file::AchFile;
pub use file_header::FileHeader;
pub use reader::{read_file, Reader};
pub use writer::{write_to_string, Writer};
