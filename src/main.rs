//! Binary entrypoint for the `gh-issue-export` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is the common case.
    let _ = dotenvy::dotenv();

    // Errors are already on stderr by the time they get here.
    match gh_issue_export::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
