//! # Tally Register Entry Point
//!
//! Starts the register on stdin/stdout. See `tally_register::run` for the
//! startup sequence.

use std::process::ExitCode;

fn main() -> ExitCode {
    match tally_register::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Register stopped");
            eprintln!("tally-register: {}", e);
            ExitCode::FAILURE
        }
    }
}
