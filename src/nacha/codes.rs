//! Code tables used by NACHA records
//!
//! - [`TransactionCode`] - account type and direction of an entry
//! - [`ServiceClassCode`] - direction of the entries a batch may carry
//! - [`StandardEntryClassCode`] - authorization type of a batch
//! - [`Category`] - whether an entry is a forward entry or a return

use std::fmt;
use std::str::FromStr;

/// Entry transaction code (record 6, positions 2-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionCode {
    CheckingReturnCredit,
    CheckingCredit,
    CheckingPrenoteCredit,
    CheckingReturnDebit,
    CheckingDebit,
    CheckingPrenoteDebit,
    SavingsReturnCredit,
    SavingsCredit,
    SavingsPrenoteCredit,
    SavingsReturnDebit,
    SavingsDebit,
    SavingsPrenoteDebit,
    GLReturnCredit,
    GLCredit,
    GLPrenoteCredit,
    GLReturnDebit,
    GLDebit,
    GLPrenoteDebit,
    LoanReturnCredit,
    LoanCredit,
    LoanPrenoteCredit,
    LoanDebit,
}

impl TransactionCode {
    /// Two-digit numeric code
    pub fn code(self) -> u8 {
        use TransactionCode::*;
        match self {
            CheckingReturnCredit => 21,
            CheckingCredit => 22,
            CheckingPrenoteCredit => 23,
            CheckingReturnDebit => 26,
            CheckingDebit => 27,
            CheckingPrenoteDebit => 28,
            SavingsReturnCredit => 31,
            SavingsCredit => 32,
            SavingsPrenoteCredit => 33,
            SavingsReturnDebit => 36,
            SavingsDebit => 37,
            SavingsPrenoteDebit => 38,
            GLReturnCredit => 41,
            GLCredit => 42,
            GLPrenoteCredit => 43,
            GLReturnDebit => 46,
            GLDebit => 47,
            GLPrenoteDebit => 48,
            LoanReturnCredit => 51,
            LoanCredit => 52,
            LoanPrenoteCredit => 53,
            LoanDebit => 55,
        }
    }

    /// Look up a numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        use TransactionCode::*;
        let tc = match code {
            21 => CheckingReturnCredit,
            22 => CheckingCredit,
            23 => CheckingPrenoteCredit,
            26 => CheckingReturnDebit,
            27 => CheckingDebit,
            28 => CheckingPrenoteDebit,
            31 => SavingsReturnCredit,
            32 => SavingsCredit,
            33 => SavingsPrenoteCredit,
            36 => SavingsReturnDebit,
            37 => SavingsDebit,
            38 => SavingsPrenoteDebit,
            41 => GLReturnCredit,
            42 => GLCredit,
            43 => GLPrenoteCredit,
            46 => GLReturnDebit,
            47 => GLDebit,
            48 => GLPrenoteDebit,
            51 => LoanReturnCredit,
            52 => LoanCredit,
            53 => LoanPrenoteCredit,
            55 => LoanDebit,
            _ => return None,
        };
        Some(tc)
    }

    /// Whether the entry moves funds into the receiver's account
    pub fn is_credit(self) -> bool {
        (1..=4).contains(&(self.code() % 10))
    }

    /// Whether the entry moves funds out of the receiver's account
    pub fn is_debit(self) -> bool {
        !self.is_credit()
    }

    /// Prenotification entries carry no funds
    pub fn is_prenote(self) -> bool {
        matches!(self.code() % 10, 3 | 8)
    }
}

impl fmt::Display for TransactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Batch service class code (record 5 and 8, positions 2-4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceClassCode {
    MixedDebitsAndCredits,
    CreditsOnly,
    DebitsOnly,
}

impl ServiceClassCode {
    pub fn code(self) -> u16 {
        match self {
            ServiceClassCode::MixedDebitsAndCredits => 200,
            ServiceClassCode::CreditsOnly => 220,
            ServiceClassCode::DebitsOnly => 225,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            200 => Some(ServiceClassCode::MixedDebitsAndCredits),
            220 => Some(ServiceClassCode::CreditsOnly),
            225 => Some(ServiceClassCode::DebitsOnly),
            _ => None,
        }
    }

    /// Whether an entry with this transaction code may appear in the batch
    pub fn permits(self, code: TransactionCode) -> bool {
        match self {
            ServiceClassCode::MixedDebitsAndCredits => true,
            ServiceClassCode::CreditsOnly => code.is_credit(),
            ServiceClassCode::DebitsOnly => code.is_debit(),
        }
    }
}

impl fmt::Display for ServiceClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Standard Entry Class code (record 5, positions 51-53)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardEntryClassCode {
    /// Prearranged payment and deposit
    Ppd,
    /// Corporate credit or debit
    Ccd,
    /// Internet-initiated entry
    Web,
    /// Telephone-initiated entry
    Tel,
    /// Notification of change
    Cor,
}

impl StandardEntryClassCode {
    pub fn as_str(self) -> &'static str {
        match self {
            StandardEntryClassCode::Ppd => "PPD",
            StandardEntryClassCode::Ccd => "CCD",
            StandardEntryClassCode::Web => "WEB",
            StandardEntryClassCode::Tel => "TEL",
            StandardEntryClassCode::Cor => "COR",
        }
    }
}

impl FromStr for StandardEntryClassCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PPD" => Ok(StandardEntryClassCode::Ppd),
            "CCD" => Ok(StandardEntryClassCode::Ccd),
            "WEB" => Ok(StandardEntryClassCode::Web),
            "TEL" => Ok(StandardEntryClassCode::Tel),
            "COR" => Ok(StandardEntryClassCode::Cor),
            other => Err(format!("unsupported standard entry class code '{}'", other)),
        }
    }
}

impl fmt::Display for StandardEntryClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Forward,
    /// Returned entry carrying an addenda 99 record
    Return,
}
