//! Downloader subprocess executor.
//!
//! Runs the downloader to completion and captures its exit status and both
//! output streams. No timeout, no retries.

use super::command::DownloaderCommand;
use crate::error::{ExtractorError, Result};
use crate::shortcode::Shortcode;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

/// Captured result of one downloader run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    /// Exit status; `-N` when terminated by signal `N`.
    pub returncode: i32,
    pub stdout: String,
    pub stderr: String,
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        self.returncode == 0
    }
}

/// Run the downloader for one post and wait for it to exit.
///
/// A non-zero exit is not an error: it is returned in the outcome for the
/// caller to report. Only a failure to launch or await the process is.
pub fn run_downloader(
    downloader: &DownloaderCommand,
    out_dir: &Path,
    shortcode: &Shortcode,
) -> Result<DownloadOutcome> {
    let args = downloader.args_for(out_dir, shortcode);

    info!(
        program = %downloader.program,
        shortcode = %shortcode,
        out_dir = %out_dir.display(),
        "starting downloader"
    );
    debug!(?args, source = ?downloader.source, "downloader argv");

    let output = Command::new(&downloader.program)
        .args(&args)
        .output()
        .map_err(|e| {
            ExtractorError::Downloader(format!(
                "failed to execute downloader command '{}': {}\n\
                 Fix: ensure the downloader is installed and in PATH, or set --downloader.",
                downloader.display_line(),
                e
            ))
        })?;

    let outcome = DownloadOutcome {
        returncode: returncode(output.status),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    info!(
        returncode = outcome.returncode,
        success = outcome.is_success(),
        "downloader exited"
    );

    Ok(outcome)
}

#[cfg(unix)]
fn returncode(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => -signal,
        (None, None) => -1,
    }
}

#[cfg(not(unix))]
fn returncode(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
