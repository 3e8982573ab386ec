use std::process::ExitCode;

use link_budget::frontend::cli::cli;


fn main() -> ExitCode {
    match cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");

            ExitCode::FAILURE
        }
    }
}
