//! Build and dump the returns file

use super::{build_and_dump, samples, BuildConfig, Driver, CHARGEBACKS_FILE};
use crate::types::AchError;
use std::io::Write;

/// Builds `chargebacks.ach` holding the sample return
#[derive(Debug, Default, Clone, Copy)]
pub struct ChargebackTransactions;

impl Driver for ChargebackTransactions {
    fn run(&self, config: &BuildConfig, output: &mut dyn Write) -> Result<(), AchError> {
        build_and_dump(
            "Chargebacks",
            &samples::sample_chargebacks(),
            CHARGEBACKS_FILE,
            config,
            output,
        )
    }
}
