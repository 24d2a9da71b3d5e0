//! NACHA file reader
//!
//! Parses fixed-width text back into an [`AchFile`]. Records are dispatched on
//! their type digit and assembled in order; control records are kept exactly
//! as read so that [`AchFile::validate`] can reconcile them against the
//! entries. Filler records after the file control are skipped.

use super::batch::Batch;
use super::batch_header::BatchHeader;
use super::codes::Category;
use super::control::{BatchControl, FileControl};
use super::entry::{Addenda99, EntryDetail};
use super::fields::RecordLine;
use super::file::AchFile;
use super::file_header::FileHeader;
use crate::types::AchError;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Reads ACH files from an underlying buffered reader
#[derive(Debug)]
pub struct Reader<R: BufRead> {
    inner: R,
}

impl<R: BufRead> Reader<R> {
    pub fn new(inner: R) -> Self {
        Reader { inner }
    }

    /// Parse the whole input into an [`AchFile`]
    ///
    /// The result is not validated; call [`AchFile::validate`] to reconcile
    /// the control records.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A line is not a 94-character ASCII record
    /// - A record type is unknown or appears out of order
    /// - A numeric field cannot be parsed
    /// - The file header, a batch control, or the file control is missing
    pub fn read(&mut self) -> Result<AchFile, AchError> {
        let mut header: Option<FileHeader> = None;
        let mut control: Option<FileControl> = None;
        let mut batches = Vec::new();
        let mut current: Option<(BatchHeader, Vec<EntryDetail>)> = None;

        for (index, line) in self.inner.by_ref().lines().enumerate() {
            let line_num = index as u64 + 1;
            let line = line?;
            let text = line.trim_end_matches('\r');
            if text.is_empty() {
                continue;
            }

            let record = RecordLine::new(text, line_num)?;
            let is_filler = text.bytes().all(|b| b == b'9');

            if control.is_some() {
                if is_filler {
                    continue;
                }
                return Err(AchError::record_parse(
                    line_num,
                    "record found after file control",
                ));
            }

            match record.record_type() {
                '1' => {
                    if header.is_some() {
                        return Err(AchError::record_parse(line_num, "duplicate file header"));
                    }
                    header = Some(FileHeader::parse(&record)?);
                }
                '5' => {
                    if header.is_none() {
                        return Err(AchError::record_parse(
                            line_num,
                            "batch header before file header",
                        ));
                    }
                    if current.is_some() {
                        return Err(AchError::record_parse(
                            line_num,
                            "batch header before the previous batch control",
                        ));
                    }
                    current = Some((BatchHeader::parse(&record)?, Vec::new()));
                }
                '6' => {
                    let (_, entries) = current.as_mut().ok_or_else(|| {
                        AchError::record_parse(line_num, "entry detail outside of a batch")
                    })?;
                    entries.push(EntryDetail::parse(&record)?);
                }
                '7' => {
                    let entry = current
                        .as_mut()
                        .and_then(|(_, entries)| entries.last_mut())
                        .ok_or_else(|| {
                            AchError::record_parse(line_num, "addenda without a preceding entry")
                        })?;
                    if entry.addenda_record_indicator != 1 || entry.addenda99.is_some() {
                        return Err(AchError::record_parse(
                            line_num,
                            format!("unexpected addenda for entry {}", entry.trace_number),
                        ));
                    }
                    entry.addenda99 = Some(Addenda99::parse(&record)?);
                    entry.category = Category::Return;
                }
                '8' => {
                    let (batch_header, entries) = current.take().ok_or_else(|| {
                        AchError::record_parse(line_num, "batch control outside of a batch")
                    })?;
                    if entries.is_empty() {
                        return Err(AchError::EmptyBatch {
                            batch_number: batch_header.batch_number,
                        });
                    }
                    let batch_control = BatchControl::parse(&record)?;
                    batches.push(Batch::from_parts(batch_header, entries, batch_control));
                }
                '9' => {
                    if is_filler {
                        return Err(AchError::record_parse(
                            line_num,
                            "filler record before file control",
                        ));
                    }
                    if current.is_some() {
                        return Err(AchError::missing_record("batch control"));
                    }
                    control = Some(FileControl::parse(&record)?);
                }
                other => {
                    return Err(AchError::record_parse(
                        line_num,
                        format!("unknown record type '{}'", other),
                    ))
                }
            }
        }

        let header = header.ok_or_else(|| AchError::missing_record("file header"))?;
        if current.is_some() {
            return Err(AchError::missing_record("batch control"));
        }
        let control = control.ok_or_else(|| AchError::missing_record("file control"))?;

        Ok(AchFile {
            header,
            batches,
            control,
        })
    }
}

impl<R: Read> Reader<BufReader<R>> {
    /// Wrap an unbuffered reader
    pub fn from_reader(inner: R) -> Self {
        Reader::new(BufReader::new(inner))
    }
}

/// Open and parse the ACH file at `path`
pub fn read_file(path: &Path) -> Result<AchFile, AchError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AchError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => AchError::from(e),
    })?;
    Reader::from_reader(file).read()
}
