//! Batch header record (type 5)

use super::codes::{ServiceClassCode, StandardEntryClassCode};
use super::fields::{
    alpha_field, numeric_field, require_alphanumeric, require_date, require_digits, string_field,
    RecordLine,
};
use crate::types::AchError;

const RECORD: &str = "batch header";

/// Largest value the 7-digit batch number field can hold
pub const MAX_BATCH_NUMBER: u32 = 9_999_999;

/// Batch header record
///
/// Describes the originator of every entry in the batch and the date the
/// entries should settle.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchHeader {
    pub service_class_code: ServiceClassCode,
    pub company_name: String,
    pub company_discretionary_data: String,
    pub company_identification: String,
    pub standard_entry_class_code: StandardEntryClassCode,
    pub company_entry_description: String,
    pub company_descriptive_date: String,
    /// `YYMMDD`
    pub effective_entry_date: String,
    /// Julian settlement date, filled in by the ACH operator
    pub settlement_date: String,
    pub originator_status_code: u8,
    /// First eight digits of the originating institution's routing number
    pub odfi_identification: String,
    pub batch_number: u32,
}

impl Default for BatchHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchHeader {
    /// Create a PPD header for mixed debits and credits
    pub fn new() -> Self {
        BatchHeader {
            service_class_code: ServiceClassCode::MixedDebitsAndCredits,
            company_name: String::new(),
            company_discretionary_data: String::new(),
            company_identification: String::new(),
            standard_entry_class_code: StandardEntryClassCode::Ppd,
            company_entry_description: String::new(),
            company_descriptive_date: String::new(),
            effective_entry_date: String::new(),
            settlement_date: String::new(),
            originator_status_code: 1,
            odfi_identification: String::new(),
            batch_number: 1,
        }
    }

    /// Set the ODFI from a routing number, keeping the 8-digit institution id
    pub fn set_odfi(&mut self, routing: &str) {
        self.odfi_identification = routing.trim().chars().take(8).collect();
    }

    /// Check every field against the record rules
    pub fn validate(&self) -> Result<(), AchError> {
        if self.company_name.trim().is_empty() {
            return Err(AchError::invalid_field(RECORD, "company name", "must not be blank"));
        }
        require_alphanumeric(RECORD, "company name", &self.company_name)?;
        require_alphanumeric(
            RECORD,
            "company discretionary data",
            &self.company_discretionary_data,
        )?;
        if self.company_identification.trim().is_empty() {
            return Err(AchError::invalid_field(
                RECORD,
                "company identification",
                "must not be blank",
            ));
        }
        require_alphanumeric(RECORD, "company identification", &self.company_identification)?;
        if self.company_entry_description.trim().is_empty() {
            return Err(AchError::invalid_field(
                RECORD,
                "company entry description",
                "must not be blank",
            ));
        }
        require_alphanumeric(
            RECORD,
            "company entry description",
            &self.company_entry_description,
        )?;
        require_alphanumeric(
            RECORD,
            "company descriptive date",
            &self.company_descriptive_date,
        )?;
        require_date(RECORD, "effective entry date", &self.effective_entry_date)?;
        if !self.settlement_date.trim().is_empty() {
            require_digits(RECORD, "settlement date", &self.settlement_date, 3, 3)?;
        }
        if self.originator_status_code > 2 {
            return Err(AchError::invalid_field(
                RECORD,
                "originator status code",
                format!("'{}' must be 0, 1 or 2", self.originator_status_code),
            ));
        }
        require_digits(RECORD, "ODFI identification", &self.odfi_identification, 8, 8)?;
        if self.batch_number > MAX_BATCH_NUMBER {
            return Err(AchError::invalid_field(
                RECORD,
                "batch number",
                format!("{} exceeds {}", self.batch_number, MAX_BATCH_NUMBER),
            ));
        }
        Ok(())
    }

    /// Format as a 94-character record
    pub fn to_record(&self) -> String {
        format!(
            "5{}{}{}{}{}{}{}{}{}{}{}{}",
            self.service_class_code.code(),
            alpha_field(&self.company_name, 16),
            alpha_field(&self.company_discretionary_data, 20),
            alpha_field(&self.company_identification, 10),
            self.standard_entry_class_code.as_str(),
            alpha_field(&self.company_entry_description, 10),
            alpha_field(&self.company_descriptive_date, 6),
            alpha_field(&self.effective_entry_date, 6),
            alpha_field(&self.settlement_date, 3),
            self.originator_status_code % 10,
            string_field(&self.odfi_identification, 8),
            numeric_field(u64::from(self.batch_number), 7),
        )
    }

    pub(crate) fn parse(line: &RecordLine<'_>) -> Result<Self, AchError> {
        let scc: u16 = line.number(2, 4, "service class code")?;
        let service_class_code = ServiceClassCode::from_code(scc).ok_or_else(|| {
            AchError::record_parse(line.line(), format!("unknown service class code {}", scc))
        })?;
        let standard_entry_class_code = line
            .field(51, 53)
            .parse::<StandardEntryClassCode>()
            .map_err(|e: String| AchError::record_parse(line.line(), e))?;

        Ok(BatchHeader {
            service_class_code,
            company_name: line.alpha(5, 20),
            company_discretionary_data: line.alpha(21, 40),
            company_identification: line.alpha(41, 50),
            standard_entry_class_code,
            company_entry_description: line.alpha(54, 63),
            company_descriptive_date: line.alpha(64, 69),
            effective_entry_date: line.alpha(70, 75),
            settlement_date: line.alpha(76, 78),
            originator_status_code: line.number(79, 79, "originator status code")?,
            odfi_identification: line.field(80, 87).to_string(),
            batch_number: line.number(88, 94, "batch number")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> BatchHeader {
        let mut header = BatchHeader {
            company_name: "COMPANYONE".to_string(),
            company_identification: "123456789".to_string(),
            company_entry_description: "VNDR PAY".to_string(),
            company_descriptive_date: "231229".to_string(),
            effective_entry_date: "231229".to_string(),
            batch_number: 4964830,
            ..BatchHeader::new()
        };
        header.set_odfi("123456780");
        header
    }

    #[test]
    fn test_batch_header_record_layout() {
        let record = sample_header().to_record();
        assert_eq!(
            record,
            "5200COMPANYONE                          123456789 PPDVNDR PAY  231229231229   1123456784964830"
        );
        assert_eq!(record.len(), 94);
    }

    #[test]
    fn test_batch_header_parse_reads_written_record() {
        let header = sample_header();
        let record = header.to_record();
        let parsed = BatchHeader::parse(&RecordLine::new(&record, 2).unwrap()).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_set_odfi_keeps_institution_id() {
        assert_eq!(sample_header().odfi_identification, "12345678");
    }

    #[test]
    fn test_batch_header_validate_rejects_blank_company_name() {
        let header = BatchHeader {
            company_name: "   ".to_string(),
            ..sample_header()
        };
        let err = header.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid company name in batch header: must not be blank"
        );
    }

    #[test]
    fn test_batch_header_validate_rejects_oversized_batch_number() {
        let header = BatchHeader {
            batch_number: 10_000_000,
            ..sample_header()
        };
        assert!(header.validate().is_err());
    }

    #[test]
    fn test_batch_header_parse_rejects_unknown_sec_code() {
        let record = sample_header().to_record().replacen("PPD", "XYZ", 1);
        let err = BatchHeader::parse(&RecordLine::new(&record, 2).unwrap()).unwrap_err();
        assert!(err.to_string().contains("standard entry class code"));
    }
}
