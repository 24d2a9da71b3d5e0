//! Fixed-width field formatting and parsing helpers
//!
//! NACHA records are 94 ASCII characters split into positional fields.
//! Alphanumeric fields are left-justified and space-padded, numeric fields are
//! right-justified and zero-padded. Positions used by the parsers follow the
//! published record layouts: 1-based and inclusive on both ends.

use crate::types::AchError;
use std::str::FromStr;

/// Length of every record in a NACHA file
pub const RECORD_LENGTH: usize = 94;

/// Number of records per block; files are padded to a multiple of this
pub const BLOCKING_FACTOR: usize = 10;

/// Left-justify `value` in a space-padded field of `width` characters
pub(crate) fn alpha_field(value: &str, width: usize) -> String {
    let mut field: String = value.chars().take(width).collect();
    let len = field.chars().count();
    field.extend(std::iter::repeat(' ').take(width - len));
    field
}

/// Right-justify `value` in a zero-padded field, keeping the low-order digits
pub(crate) fn numeric_field(value: u64, width: usize) -> String {
    let digits = format!("{:0width$}", value, width = width);
    digits[digits.len() - width..].to_string()
}

/// Zero-pad a digit string on the left, or keep its first `width` characters
pub(crate) fn string_field(value: &str, width: usize) -> String {
    let value = value.trim();
    let len = value.chars().count();
    if len >= width {
        value.chars().take(width).collect()
    } else {
        format!("{}{}", "0".repeat(width - len), value)
    }
}

/// True when every character may appear in an alphanumeric field
pub(crate) fn is_alphanumeric(value: &str) -> bool {
    value.chars().all(|c| (' '..='~').contains(&c))
}

/// True when `value` is non-empty and made only of ASCII digits
pub(crate) fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Compute the routing number check digit for an 8-digit institution id
///
/// Uses the ABA weights 3, 7, 1 repeated across the eight digits.
pub fn check_digit(routing: &str) -> Option<u32> {
    if routing.len() != 8 || !is_numeric(routing) {
        return None;
    }

    let sum: u32 = routing
        .bytes()
        .map(|b| u32::from(b - b'0'))
        .zip([3, 7, 1, 3, 7, 1, 3, 7])
        .map(|(digit, weight)| digit * weight)
        .sum();

    Some((10 - sum % 10) % 10)
}

/// Reject values containing characters that cannot be written to a record
pub(crate) fn require_alphanumeric(
    record: &str,
    field: &str,
    value: &str,
) -> Result<(), AchError> {
    if is_alphanumeric(value) {
        Ok(())
    } else {
        Err(AchError::invalid_field(
            record,
            field,
            format!("'{}' contains non-printable characters", value),
        ))
    }
}

/// Reject values that are not a run of digits of length `min..=max`
pub(crate) fn require_digits(
    record: &str,
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), AchError> {
    if is_numeric(value) && (min..=max).contains(&value.len()) {
        Ok(())
    } else if min == max {
        Err(AchError::invalid_field(
            record,
            field,
            format!("'{}' must be {} digits", value, min),
        ))
    } else {
        Err(AchError::invalid_field(
            record,
            field,
            format!("'{}' must be {} to {} digits", value, min, max),
        ))
    }
}

/// Reject dates that are not a valid `YYMMDD`
pub(crate) fn require_date(record: &str, field: &str, value: &str) -> Result<(), AchError> {
    chrono::NaiveDate::parse_from_str(value, "%y%m%d")
        .map(|_| ())
        .map_err(|_| {
            AchError::invalid_field(record, field, format!("'{}' is not a YYMMDD date", value))
        })
}

/// A single record line being parsed
///
/// Guarantees the text is ASCII and exactly [`RECORD_LENGTH`] long so that
/// positional slicing cannot panic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RecordLine<'a> {
    text: &'a str,
    line: u64,
}

impl<'a> RecordLine<'a> {
    pub(crate) fn new(text: &'a str, line: u64) -> Result<Self, AchError> {
        if !text.is_ascii() {
            return Err(AchError::record_parse(line, "record contains non-ASCII characters"));
        }
        if text.len() != RECORD_LENGTH {
            return Err(AchError::record_parse(
                line,
                format!(
                    "record must be {} characters, found {}",
                    RECORD_LENGTH,
                    text.len()
                ),
            ));
        }
        Ok(Self { text, line })
    }

    pub(crate) fn line(&self) -> u64 {
        self.line
    }

    pub(crate) fn record_type(&self) -> char {
        self.text.as_bytes()[0] as char
    }

    /// Raw field text at 1-based inclusive positions
    pub(crate) fn field(&self, start: usize, end: usize) -> &'a str {
        &self.text[start - 1..end]
    }

    /// Alphanumeric field with trailing padding removed
    pub(crate) fn alpha(&self, start: usize, end: usize) -> String {
        self.field(start, end).trim_end().to_string()
    }

    /// Numeric field parsed into `T`
    ///
    /// Only digits and space padding are accepted, so signs are rejected.
    pub(crate) fn number<T: FromStr>(
        &self,
        start: usize,
        end: usize,
        name: &str,
    ) -> Result<T, AchError> {
        let raw = self.field(start, end);
        if !raw.bytes().all(|b| b.is_ascii_digit() || b == b' ') {
            return Err(AchError::record_parse(
                self.line,
                format!("invalid {} '{}'", name, raw),
            ));
        }
        raw.trim().parse().map_err(|_| {
            AchError::record_parse(self.line, format!("invalid {} '{}'", name, raw))
        })
    }
}
