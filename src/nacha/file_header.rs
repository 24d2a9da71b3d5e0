//! File header record (type 1)

use super::fields::{
    alpha_field, require_alphanumeric, require_date, require_digits, string_field, RecordLine,
};
use crate::types::AchError;

const RECORD: &str = "file header";

/// File header record
///
/// Identifies the sending and receiving institutions and the moment the file
/// was created. Record size, blocking factor, and format code are constants of
/// the format and are written and checked, not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct FileHeader {
    pub priority_code: String,
    /// Routing number of the receiving point (9 digits)
    pub immediate_destination: String,
    /// Routing number or company id of the sending point (9 or 10 digits)
    pub immediate_origin: String,
    /// `YYMMDD`
    pub file_creation_date: String,
    /// `HHMM`, may be blank
    pub file_creation_time: String,
    pub file_id_modifier: char,
    pub immediate_destination_name: String,
    pub immediate_origin_name: String,
    pub reference_code: String,
}

impl Default for FileHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileHeader {
    /// Create a header with the format defaults (priority `01`, modifier `A`)
    pub fn new() -> Self {
        FileHeader {
            priority_code: "01".to_string(),
            immediate_destination: String::new(),
            immediate_origin: String::new(),
            file_creation_date: String::new(),
            file_creation_time: String::new(),
            file_id_modifier: 'A',
            immediate_destination_name: String::new(),
            immediate_origin_name: String::new(),
            reference_code: String::new(),
        }
    }

    /// Check every field against the record rules
    pub fn validate(&self) -> Result<(), AchError> {
        require_digits(RECORD, "priority code", &self.priority_code, 2, 2)?;
        require_digits(
            RECORD,
            "immediate destination",
            self.immediate_destination.trim(),
            9,
            10,
        )?;
        require_digits(RECORD, "immediate origin", self.immediate_origin.trim(), 9, 10)?;
        require_date(RECORD, "file creation date", &self.file_creation_date)?;
        if !self.file_creation_time.is_empty() {
            require_digits(RECORD, "file creation time", &self.file_creation_time, 4, 4)?;
        }
        if !self.file_id_modifier.is_ascii_uppercase() && !self.file_id_modifier.is_ascii_digit()
        {
            return Err(AchError::invalid_field(
                RECORD,
                "file id modifier",
                format!("'{}' must be A-Z or 0-9", self.file_id_modifier),
            ));
        }
        require_alphanumeric(
            RECORD,
            "immediate destination name",
            &self.immediate_destination_name,
        )?;
        require_alphanumeric(RECORD, "immediate origin name", &self.immediate_origin_name)?;
        require_alphanumeric(RECORD, "reference code", &self.reference_code)?;
        Ok(())
    }

    /// Format as a 94-character record
    pub fn to_record(&self) -> String {
        format!(
            "1{}{}{}{}{}{}094101{}{}{}",
            string_field(&self.priority_code, 2),
            routing_field(&self.immediate_destination),
            routing_field(&self.immediate_origin),
            alpha_field(&self.file_creation_date, 6),
            alpha_field(&self.file_creation_time, 4),
            self.file_id_modifier,
            alpha_field(&self.immediate_destination_name, 23),
            alpha_field(&self.immediate_origin_name, 23),
            alpha_field(&self.reference_code, 8),
        )
    }

    pub(crate) fn parse(line: &RecordLine<'_>) -> Result<Self, AchError> {
        if line.field(35, 37) != "094" {
            return Err(AchError::record_parse(
                line.line(),
                format!("unsupported record size '{}'", line.field(35, 37)),
            ));
        }
        if line.field(38, 39) != "10" {
            return Err(AchError::record_parse(
                line.line(),
                format!("unsupported blocking factor '{}'", line.field(38, 39)),
            ));
        }
        if line.field(40, 40) != "1" {
            return Err(AchError::record_parse(
                line.line(),
                format!("unsupported format code '{}'", line.field(40, 40)),
            ));
        }

        Ok(FileHeader {
            priority_code: line.field(2, 3).to_string(),
            immediate_destination: line.field(4, 13).trim().to_string(),
            immediate_origin: line.field(14, 23).trim().to_string(),
            file_creation_date: line.field(24, 29).to_string(),
            file_creation_time: line.field(30, 33).trim().to_string(),
            file_id_modifier: line.field(34, 34).chars().next().unwrap_or(' '),
            immediate_destination_name: line.alpha(41, 63),
            immediate_origin_name: line.alpha(64, 86),
            reference_code: line.alpha(87, 94),
        })
    }
}

/// Routing numbers are written as a blank followed by nine digits; ten-digit
/// identifiers fill the whole field.
fn routing_field(value: &str) -> String {
    let value = value.trim();
    if value.len() == 10 {
        value.to_string()
    } else {
        format!(" {}", string_field(value, 9))
    }
}
