//! insta-extractor: download one Instagram post through an external
//! downloader and report the outcome as a single JSON object on stdout.
//!
//! Every run prints exactly one JSON object. Failures of this tool itself
//! are printed as `{"error": "..."}` with a non-zero exit code; failures of
//! the downloader are reported inside a successful record.

mod cli;
mod commands;
pub mod config;
pub mod downloader;
pub mod error;
pub mod exit_codes;
pub mod fs;
mod logging;
pub mod report;
pub mod shortcode;

use cli::Cli;
use error::ExtractorError;
use report::ErrorReport;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::parse_args() {
        Ok(cli) => cli,
        Err(err) => return report_failure(&err),
    };
    logging::init_logging(cli.log_level);

    match commands::cmd_extract(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            tracing::error!(error = %err, "extraction failed");
            report_failure(&err)
        }
    }
}

/// Print `{"error": ...}` on stdout and map the error to its exit code.
fn report_failure(err: &ExtractorError) -> ExitCode {
    let mut stdout = std::io::stdout();
    if let Err(write_err) = report::emit(&mut stdout, &ErrorReport::from(err)) {
        eprintln!("Error: {}", write_err);
    }

    ExitCode::from(err.exit_code() as u8)
}
