//! Entry detail (type 6) and return addenda (type 7, addenda type 99) records

use super::codes::{Category, TransactionCode};
use super::fields::{
    alpha_field, check_digit, numeric_field, require_alphanumeric, require_digits, string_field,
    RecordLine,
};
use crate::types::AchError;

const ENTRY: &str = "entry detail";
const ADDENDA: &str = "addenda 99";

/// Largest amount, in cents, the 10-digit amount field can hold
pub const MAX_AMOUNT: u64 = 9_999_999_999;

/// Entry detail record
///
/// One debit or credit to a receiver's account. Return entries carry an
/// [`Addenda99`] describing the original entry being returned.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDetail {
    pub transaction_code: TransactionCode,
    /// First eight digits of the receiving institution's routing number
    pub rdfi_identification: String,
    /// Ninth digit of the receiving institution's routing number
    pub check_digit: String,
    pub dfi_account_number: String,
    /// Amount in cents
    pub amount: u64,
    pub identification_number: String,
    pub individual_name: String,
    pub discretionary_data: String,
    pub addenda_record_indicator: u8,
    pub trace_number: String,
    pub addenda99: Option<Addenda99>,
    pub category: Category,
}

impl EntryDetail {
    /// Create an empty forward entry with the given transaction code
    pub fn new(transaction_code: TransactionCode) -> Self {
        EntryDetail {
            transaction_code,
            rdfi_identification: String::new(),
            check_digit: String::new(),
            dfi_account_number: String::new(),
            amount: 0,
            identification_number: String::new(),
            individual_name: String::new(),
            discretionary_data: String::new(),
            addenda_record_indicator: 0,
            trace_number: String::new(),
            addenda99: None,
            category: Category::Forward,
        }
    }

    /// Split a 9-digit routing number into institution id and check digit
    pub fn set_rdfi(&mut self, routing: &str) {
        let routing = string_field(routing, 9);
        self.rdfi_identification = routing.chars().take(8).collect();
        self.check_digit = routing.chars().skip(8).collect();
    }

    /// Trace number: the ODFI's 8-digit id followed by a 7-digit sequence
    pub fn set_trace_number(&mut self, odfi: &str, sequence: u32) {
        self.trace_number = format!(
            "{}{}",
            string_field(odfi, 8),
            numeric_field(u64::from(sequence), 7)
        );
    }

    /// The receiver's reference to the original transaction
    pub fn set_original_trace_number(&mut self, trace: &str) {
        self.identification_number = trace.to_string();
    }

    pub fn set_receiving_company(&mut self, name: &str) {
        self.individual_name = name.to_string();
    }

    /// Attach a return addenda and mark the entry as a return
    pub fn set_addenda99(&mut self, addenda: Addenda99) {
        self.addenda99 = Some(addenda);
        self.addenda_record_indicator = 1;
        self.category = Category::Return;
    }

    pub fn credit_amount(&self) -> u64 {
        if self.transaction_code.is_credit() {
            self.amount
        } else {
            0
        }
    }

    pub fn debit_amount(&self) -> u64 {
        if self.transaction_code.is_debit() {
            self.amount
        } else {
            0
        }
    }

    /// Number of addenda records that follow this entry
    pub fn addenda_count(&self) -> u32 {
        u32::from(self.addenda99.is_some())
    }

    /// The 8-digit RDFI id as a number, for the entry hash
    pub fn rdfi_hash(&self) -> u64 {
        self.rdfi_identification.parse().unwrap_or(0)
    }

    /// Check every field against the record rules
    pub fn validate(&self) -> Result<(), AchError> {
        require_digits(ENTRY, "RDFI identification", &self.rdfi_identification, 8, 8)?;
        let expected = check_digit(&self.rdfi_identification).unwrap_or_default();
        if self.check_digit != expected.to_string() {
            return Err(AchError::invalid_field(
                ENTRY,
                "check digit",
                format!("expected {}, found '{}'", expected, self.check_digit),
            ));
        }
        if self.dfi_account_number.trim().is_empty() {
            return Err(AchError::invalid_field(
                ENTRY,
                "DFI account number",
                "must not be blank",
            ));
        }
        if self.dfi_account_number.chars().count() > 17 {
            return Err(AchError::invalid_field(
                ENTRY,
                "DFI account number",
                format!("'{}' exceeds 17 characters", self.dfi_account_number),
            ));
        }
        require_alphanumeric(ENTRY, "DFI account number", &self.dfi_account_number)?;
        if self.amount > MAX_AMOUNT {
            return Err(AchError::invalid_field(
                ENTRY,
                "amount",
                format!("{} exceeds {}", self.amount, MAX_AMOUNT),
            ));
        }
        if self.transaction_code.is_prenote() && self.amount != 0 {
            return Err(AchError::invalid_field(
                ENTRY,
                "amount",
                format!(
                    "prenote transaction code {} requires a zero amount",
                    self.transaction_code
                ),
            ));
        }
        require_alphanumeric(ENTRY, "identification number", &self.identification_number)?;
        require_alphanumeric(ENTRY, "individual name", &self.individual_name)?;
        require_alphanumeric(ENTRY, "discretionary data", &self.discretionary_data)?;
        require_digits(ENTRY, "trace number", &self.trace_number, 15, 15)?;

        match (self.addenda_record_indicator, &self.addenda99) {
            (0, None) => {}
            (1, Some(addenda)) => addenda.validate()?,
            (indicator, addenda) => {
                return Err(AchError::invalid_field(
                    ENTRY,
                    "addenda record indicator",
                    format!(
                        "indicator {} does not match {} addenda record(s)",
                        indicator,
                        u32::from(addenda.is_some())
                    ),
                ))
            }
        }
        if self.category == Category::Return && self.addenda99.is_none() {
            return Err(AchError::invalid_field(
                ENTRY,
                "addenda 99",
                format!("return entry {} has no return addenda", self.trace_number),
            ));
        }
        Ok(())
    }

    /// Format as a 94-character record
    pub fn to_record(&self) -> String {
        format!(
            "6{}{}{}{}{}{}{}{}{}{}",
            self.transaction_code.code(),
            string_field(&self.rdfi_identification, 8),
            alpha_field(&self.check_digit, 1),
            alpha_field(&self.dfi_account_number, 17),
            numeric_field(self.amount, 10),
            alpha_field(&self.identification_number, 15),
            alpha_field(&self.individual_name, 22),
            alpha_field(&self.discretionary_data, 2),
            self.addenda_record_indicator % 10,
            string_field(&self.trace_number, 15),
        )
    }

    pub(crate) fn parse(line: &RecordLine<'_>) -> Result<Self, AchError> {
        let code: u8 = line.number(2, 3, "transaction code")?;
        let transaction_code = TransactionCode::from_code(code).ok_or_else(|| {
            AchError::record_parse(line.line(), format!("unknown transaction code {}", code))
        })?;

        Ok(EntryDetail {
            transaction_code,
            rdfi_identification: line.field(4, 11).to_string(),
            check_digit: line.field(12, 12).to_string(),
            dfi_account_number: line.alpha(13, 29),
            amount: line.number(30, 39, "amount")?,
            identification_number: line.alpha(40, 54),
            individual_name: line.alpha(55, 76),
            discretionary_data: line.alpha(77, 78),
            addenda_record_indicator: line.number(79, 79, "addenda record indicator")?,
            trace_number: line.field(80, 94).to_string(),
            addenda99: None,
            category: Category::Forward,
        })
    }
}

/// Return addenda record
///
/// Identifies the entry being returned and the reason it was returned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Addenda99 {
    /// Return reason code, `R` followed by two digits
    pub return_code: String,
    pub original_trace: String,
    pub date_of_death: String,
    /// First eight digits of the original receiving institution's routing number
    pub original_dfi: String,
    pub addenda_information: String,
    /// Copied from the owning entry when the batch is created
    pub trace_number: String,
}

impl Addenda99 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the original RDFI from a routing number, keeping the 8-digit id
    pub fn set_original_dfi(&mut self, routing: &str) {
        self.original_dfi = routing.trim().chars().take(8).collect();
    }

    pub fn validate(&self) -> Result<(), AchError> {
        let code = self.return_code.as_bytes();
        if code.len() != 3 || code[0] != b'R' || !code[1..].iter().all(u8::is_ascii_digit) {
            return Err(AchError::invalid_field(
                ADDENDA,
                "return code",
                format!("'{}' must be R followed by two digits", self.return_code),
            ));
        }
        require_digits(ADDENDA, "original trace", self.original_trace.trim(), 1, 15)?;
        if !self.date_of_death.trim().is_empty() {
            require_digits(ADDENDA, "date of death", &self.date_of_death, 6, 6)?;
        }
        require_digits(ADDENDA, "original DFI", &self.original_dfi, 8, 8)?;
        require_alphanumeric(ADDENDA, "addenda information", &self.addenda_information)?;
        require_digits(ADDENDA, "trace number", &self.trace_number, 15, 15)?;
        Ok(())
    }

    /// Format as a 94-character record
    pub fn to_record(&self) -> String {
        format!(
            "799{}{}{}{}{}{}",
            alpha_field(&self.return_code, 3),
            string_field(&self.original_trace, 15),
            alpha_field(&self.date_of_death, 6),
            string_field(&self.original_dfi, 8),
            alpha_field(&self.addenda_information, 44),
            string_field(&self.trace_number, 15),
        )
    }

    pub(crate) fn parse(line: &RecordLine<'_>) -> Result<Self, AchError> {
        if line.field(2, 3) != "99" {
            return Err(AchError::record_parse(
                line.line(),
                format!("unsupported addenda type code '{}'", line.field(2, 3)),
            ));
        }

        Ok(Addenda99 {
            return_code: line.alpha(4, 6),
            original_trace: line.field(7, 21).to_string(),
            date_of_death: line.alpha(22, 27),
            original_dfi: line.field(28, 35).to_string(),
            addenda_information: line.alpha(36, 79),
            trace_number: line.field(80, 94).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn credit_entry() -> EntryDetail {
        let mut entry = EntryDetail::new(TransactionCode::CheckingCredit);
        entry.dfi_account_number = "1111111111".to_string();
        entry.amount = 234430;
        entry.set_original_trace_number("8058467");
        entry.set_receiving_company("CompOne");
        entry.set_rdfi("123456780");
        entry.set_trace_number("123456780", 1);
        entry
    }

    fn return_addenda() -> Addenda99 {
        let mut addenda = Addenda99 {
            return_code: "R10".to_string(),
            original_trace: "1111111111".to_string(),
            addenda_information: "Authorization Revoked".to_string(),
            trace_number: "123456780000001".to_string(),
            ..Addenda99::new()
        };
        addenda.set_original_dfi("123456780");
        addenda
    }

    #[test]
    fn test_entry_record_layout() {
        let record = credit_entry().to_record();
        assert_eq!(
            record,
            "6221234567801111111111       00002344308058467        CompOne                 0123456780000001"
        );
        assert_eq!(record.len(), 94);
    }

    #[test]
    fn test_set_rdfi_splits_check_digit() {
        let entry = credit_entry();
        assert_eq!(entry.rdfi_identification, "12345678");
        assert_eq!(entry.check_digit, "0");
    }

    #[test]
    fn test_set_trace_number_pads_sequence() {
        assert_eq!(credit_entry().trace_number, "123456780000001");
    }

    #[test]
    fn test_entry_parse_reads_written_record() {
        let entry = credit_entry();
        let record = entry.to_record();
        let parsed = EntryDetail::parse(&RecordLine::new(&record, 3).unwrap()).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_credit_and_debit_amounts() {
        let credit = credit_entry();
        assert_eq!(credit.credit_amount(), 234430);
        assert_eq!(credit.debit_amount(), 0);

        let debit = EntryDetail {
            transaction_code: TransactionCode::CheckingDebit,
            ..credit_entry()
        };
        assert_eq!(debit.credit_amount(), 0);
        assert_eq!(debit.debit_amount(), 234430);
    }

    #[rstest]
    #[case::bad_check_digit(EntryDetail { check_digit: "5".to_string(), ..credit_entry() }, "check digit")]
    #[case::blank_account(EntryDetail { dfi_account_number: " ".to_string(), ..credit_entry() }, "DFI account number")]
    #[case::amount_overflow(EntryDetail { amount: MAX_AMOUNT + 1, ..credit_entry() }, "amount")]
    #[case::prenote_with_amount(EntryDetail { transaction_code: TransactionCode::CheckingPrenoteCredit, ..credit_entry() }, "amount")]
    #[case::short_trace(EntryDetail { trace_number: "1234".to_string(), ..credit_entry() }, "trace number")]
    #[case::indicator_without_addenda(EntryDetail { addenda_record_indicator: 1, ..credit_entry() }, "addenda record indicator")]
    #[case::return_without_addenda(EntryDetail { category: Category::Return, ..credit_entry() }, "addenda 99")]
    fn test_entry_validate_rejects(#[case] entry: EntryDetail, #[case] field: &str) {
        match entry.validate() {
            Err(AchError::InvalidField { field: actual, .. }) => assert_eq!(actual, field),
            other => panic!("expected invalid {}, got {:?}", field, other),
        }
    }

    #[test]
    fn test_set_addenda99_marks_return() {
        let mut entry = credit_entry();
        entry.set_addenda99(return_addenda());
        assert_eq!(entry.addenda_record_indicator, 1);
        assert_eq!(entry.category, Category::Return);
        assert_eq!(entry.addenda_count(), 1);
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_addenda99_record_layout() {
        let record = return_addenda().to_record();
        assert_eq!(
            record,
            "799R10000001111111111      12345678Authorization Revoked                       123456780000001"
        );
        assert_eq!(record.len(), 94);
    }

    #[test]
    fn test_addenda99_parse_reads_written_record() {
        let record = return_addenda().to_record();
        let parsed = Addenda99::parse(&RecordLine::new(&record, 4).unwrap()).unwrap();
        assert_eq!(parsed.return_code, "R10");
        assert_eq!(parsed.original_trace, "000001111111111");
        assert_eq!(parsed.original_dfi, "12345678");
        assert_eq!(parsed.addenda_information, "Authorization Revoked");
        assert!(parsed.validate().is_ok());
    }

    #[rstest]
    #[case::lowercase("r10")]
    #[case::too_long("R100")]
    #[case::letters("RAB")]
    fn test_addenda99_rejects_bad_return_code(#[case] code: &str) {
        let addenda = Addenda99 {
            return_code: code.to_string(),
            ..return_addenda()
        };
        assert!(addenda.validate().is_err());
    }
}
