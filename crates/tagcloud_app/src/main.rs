mod cli;

use std::process::ExitCode;

use tagcloud_logging::{cloud_error, terminal_shows_errors};

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cloud_error!("{err:#}");
            // The logger may be file-only, silenced, or not installed yet.
            if !terminal_shows_errors() {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
