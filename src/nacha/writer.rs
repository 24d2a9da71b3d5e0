//! NACHA file writer
//!
//! Serializes an [`AchFile`] to the fixed-width text format: one 94-character
//! record per line, batches in order with each entry followed by its addenda,
//! and filler records of `9`s padding the file to a whole number of blocks.

use super::fields::{BLOCKING_FACTOR, RECORD_LENGTH};
use super::file::AchFile;
use crate::types::AchError;
use std::io::Write;

/// Writes ACH files to an underlying writer
///
/// # Examples
///
/// ```no_run
/// use ach_builder::nacha::{AchFile, Writer};
///
/// let file = AchFile::new();
/// let mut buf = Vec::new();
/// Writer::new(&mut buf).write(&file).expect("file is not valid");
/// ```
#[derive(Debug)]
pub struct Writer<W: Write> {
    inner: W,
}

impl<W: Write> Writer<W> {
    pub fn new(inner: W) -> Self {
        Writer { inner }
    }

    /// Validate `file` and write it out
    ///
    /// Nothing is written if validation fails.
    pub fn write(&mut self, file: &AchFile) -> Result<(), AchError> {
        file.validate()?;

        let mut lines = Vec::with_capacity(file.record_count() + BLOCKING_FACTOR);
        lines.push(file.header.to_record());
        for batch in &file.batches {
            lines.push(batch.header().to_record());
            for entry in batch.entries() {
                lines.push(entry.to_record());
                if let Some(addenda) = &entry.addenda99 {
                    lines.push(addenda.to_record());
                }
            }
            lines.push(batch.control().to_record());
        }
        lines.push(file.control.to_record());

        let filler = "9".repeat(RECORD_LENGTH);
        while lines.len() % BLOCKING_FACTOR != 0 {
            lines.push(filler.clone());
        }

        for line in &lines {
            writeln!(self.inner, "{}", line)?;
        }
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Serialize `file` to a string
pub fn write_to_string(file: &AchFile) -> Result<String, AchError> {
    let mut buf = Vec::new();
    Writer::new(&mut buf).write(file)?;
    String::from_utf8(buf).map_err(|e| AchError::IoError {
        message: e.to_string(),
    })
}
