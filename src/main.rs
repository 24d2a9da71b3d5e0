//! ACH Builder CLI
//!
//! Command-line interface for building and reading NACHA ACH files.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --output-dir out send --input transactions.csv
//! cargo run -- chargeback
//! cargo run -- read out/transactions.ach
//! ```
//!
//! Without a command the program builds `transactions.ach` and
//! `chargebacks.ach` from sample data, then reads `transactions.ach` back.
//! Reports go to stdout; logs go to stderr (`RUST_LOG`, default `info`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, invalid ACH file, write failure, etc.)

use ach_builder::cli;
use ach_builder::driver;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::parse_args();
    let config = args.to_build_config();
    let driver = driver::create_driver(args.command());

    let mut output = std::io::stdout();
    if let Err(e) = driver.run(&config, &mut output) {
        log::error!("{}", e);
        process::exit(1);
    }
}
