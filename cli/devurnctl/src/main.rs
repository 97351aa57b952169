//! devurn - CLI for RFC 9039 device URNs
//!
//! Runs subtype detection, validation, generation and breakdown locally,
//! without a server.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            // Print error in a user-friendly way
            error::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
