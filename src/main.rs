//! crew - people, friendships and kanban status boards

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = crew_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
