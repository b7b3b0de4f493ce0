//! Rescue Ledger - record keeping for animal rescues

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = rescue_ledger::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
