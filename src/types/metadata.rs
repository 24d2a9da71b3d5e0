//! File and batch metadata supplied by the drivers

use crate::nacha::StandardEntryClassCode;

/// Routing and dating information for one ACH file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchData {
    /// `YYMMDD`, used as both descriptive and effective entry date
    pub transactions_date: String,
    pub reference_code: String,
    /// Routing number of the receiving institution
    pub destination: String,
    pub destination_name: String,
    /// Routing number or company id of the sender
    pub origin: String,
    pub origin_name: String,
    pub standard_entry_class_code: StandardEntryClassCode,
    pub batch_number: u32,
}

/// The company originating the entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Originator {
    pub company_name: String,
    /// Written to the batch's company entry description
    pub company_description: String,
    /// Routing number of the originating institution
    pub identification: String,
    /// Last batch number issued for this originator. Informational only:
    /// the builder numbers the batch from [`AchData::batch_number`].
    pub batch_number: u32,
}
