//! Core business logic module
//!
//! This module contains the ACH building components:
//! - `traits` - The `EntryBuilder` abstraction implemented by each transaction kind
//! - `builder` - Maps file metadata and transactions onto the `nacha` codec

pub mod builder;
pub mod traits;

pub use builder::{build_ach, build_ach_file};
pub use traits::EntryBuilder;
