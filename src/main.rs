//! Confgen: runtime config generator for the PQDAG allocation system.
//!
//! This is the main entry point for the `confgen` CLI. It parses arguments,
//! runs the generator, and handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod generate;
pub mod template;
pub mod workspace;

#[cfg(test)]
mod test_support;

use clap::error::ErrorKind;
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders its own usage/help text; --help and --version are
            // successful exits, anything else is a user error.
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    ExitCode::from(exit_codes::SUCCESS as u8)
                }
                _ => ExitCode::from(exit_codes::FAILURE as u8),
            };
        }
    };

    match commands::run(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
