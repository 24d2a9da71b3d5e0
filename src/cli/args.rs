use crate::driver::BuildConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build and read NACHA ACH files
#[derive(Parser, Debug)]
#[command(name = "ach-builder")]
#[command(about = "Build and read NACHA ACH files", long_about = None)]
pub struct CliArgs {
    /// Directory the .ach files are written to and read from
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory for transactions.ach and chargebacks.ach"
    )]
    pub output_dir: PathBuf,

    /// Command to run; `all` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Send, chargeback, then read back transactions.ach
    All,

    /// Build transactions.ach from the sample transactions or a CSV file
    Send {
        #[arg(
            long = "input",
            value_name = "CSV",
            help = "CSV of transactions (type,account,company,trace,amount,...)"
        )]
        input: Option<PathBuf>,
    },

    /// Build chargebacks.ach from the sample return
    Chargeback,

    /// Read, validate, and summarise an ACH file
    Read {
        #[arg(value_name = "FILE", help = "ACH file (default: <DIR>/transactions.ach)")]
        file: Option<PathBuf>,
    },
}

impl CliArgs {
    /// Create a BuildConfig from CLI arguments
    ///
    /// The creation timestamp is left unset so the local clock is used.
    pub fn to_build_config(&self) -> BuildConfig {
        BuildConfig {
            output_dir: self.output_dir.clone(),
            ..BuildConfig::default()
        }
    }

    /// The selected command, defaulting to [`Command::All`]
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::All)
    }
}
