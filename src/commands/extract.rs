//! Implementation of the extract command (the only command).
//!
//! # What it does
//!
//! 1. Requires a shortcode and normalizes it to carry the `-` post marker
//! 2. Loads config and resolves the downloader command
//! 3. Creates `<cwd>/<dir_prefix><shortcode>` if missing
//! 4. Runs the downloader into that directory and waits for it
//! 5. Writes one JSON report with the downloader's exit code and output
//!
//! The downloader's exit code never becomes this command's exit code.

use crate::cli::Cli;
use crate::config::Config;
use crate::downloader::{DOWNLOADER_ENV_VAR, DownloaderCommand, run_downloader};
use crate::error::{ExtractorError, Result};
use crate::fs::prepare_output_dir;
use crate::report::{ExtractionReport, emit};
use crate::shortcode::Shortcode;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

/// Execute the extract command against the real process environment.
pub fn cmd_extract(args: &Cli) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| ExtractorError::io("failed to get current working directory", e))?;
    let env_downloader = std::env::var(DOWNLOADER_ENV_VAR).ok();
    let stdout = std::io::stdout();

    run_extract(args, &cwd, env_downloader.as_deref(), &mut stdout.lock())
}

/// Execute the extract command with an explicit working directory,
/// downloader override from the environment, and output sink.
pub fn run_extract<W: Write>(
    args: &Cli,
    cwd: &Path,
    env_downloader: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let raw = args
        .shortcode
        .as_deref()
        .ok_or(ExtractorError::MissingShortcode)?;

    if !args.ignored.is_empty() {
        warn!(ignored = ?args.ignored, "ignoring arguments after the shortcode");
    }

    let config = Config::discover(args.config.as_deref(), cwd)?;
    let downloader = DownloaderCommand::resolve(args.downloader.as_deref(), env_downloader, &config)?;

    let shortcode = Shortcode::normalize(raw);
    let out_dir = prepare_output_dir(cwd, &config.dir_prefix, &shortcode)?;

    let outcome = run_downloader(&downloader, &out_dir, &shortcode)?;
    if !outcome.is_success() {
        info!(
            returncode = outcome.returncode,
            "downloader reported failure, passing it through"
        );
    }

    let report = ExtractionReport::new(&shortcode, &out_dir, outcome);
    emit(out, &report)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::Value;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["insta-extractor"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn run(args: &[&str], cwd: &Path) -> Result<Value> {
        let mut buf = Vec::new();
        run_extract(&cli(args), cwd, None, &mut buf)?;
        Ok(serde_json::from_slice(&buf).unwrap())
    }

    #[test]
    fn test_missing_shortcode_is_error_and_creates_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut buf = Vec::new();

        let err = run_extract(&cli(&[]), temp_dir.path(), None, &mut buf).unwrap_err();

        assert!(matches!(err, ExtractorError::MissingShortcode));
        assert!(buf.is_empty());
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_shortcode_checked_before_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("insta-extractor.yaml"), "dir_prefix: \"\"").unwrap();
        let mut buf = Vec::new();

        let err = run_extract(&cli(&[]), temp_dir.path(), None, &mut buf).unwrap_err();

        assert!(matches!(err, ExtractorError::MissingShortcode));
    }

    #[test]
    fn test_reports_downloader_run() {
        let temp_dir = TempDir::new().unwrap();

        let value = run(&["--downloader", "echo", "abc123"], temp_dir.path()).unwrap();

        let out_dir = temp_dir.path().join("insta_-abc123");
        assert!(out_dir.is_dir());
        assert_eq!(value["shortcode"], "-abc123");
        assert_eq!(value["out_dir"], out_dir.to_str().unwrap());
        assert_eq!(value["returncode"], 0);
        assert_eq!(
            value["stdout"],
            format!("--dirname-pattern {} -- -abc123\n", out_dir.display())
        );
        assert_eq!(value["stderr"], "");
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_failed_downloader_is_still_ok() {
        let temp_dir = TempDir::new().unwrap();

        let value = run(
            &["--downloader", "sh -c 'echo nope >&2; exit 3' sh", "abc"],
            temp_dir.path(),
        )
        .unwrap();

        assert_eq!(value["returncode"], 3);
        assert_eq!(value["stderr"], "nope\n");
    }

    #[test]
    fn test_repeat_run_reuses_directory() {
        let temp_dir = TempDir::new().unwrap();

        let first = run(&["--downloader", "true", "-abc"], temp_dir.path()).unwrap();
        let second = run(&["--downloader", "true", "abc"], temp_dir.path()).unwrap();

        assert_eq!(first["out_dir"], second["out_dir"]);
        assert_eq!(second["shortcode"], "-abc");
    }

    #[test]
    fn test_config_file_prefix_and_downloader() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("insta-extractor.yaml"),
            "downloader: echo configured\ndir_prefix: posts/ig_\n",
        )
        .unwrap();

        let value = run(&["xyz"], temp_dir.path()).unwrap();

        let out_dir = temp_dir.path().join("posts/ig_-xyz");
        assert!(out_dir.is_dir());
        assert!(value["stdout"].as_str().unwrap().starts_with("configured --dirname-pattern"));
    }

    #[test]
    fn test_environment_override_beats_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("insta-extractor.yaml"),
            "downloader: echo configured\n",
        )
        .unwrap();
        let mut buf = Vec::new();

        run_extract(&cli(&["xyz"]), temp_dir.path(), Some("echo from-env"), &mut buf).unwrap();

        let value: Value = serde_json::from_slice(&buf).unwrap();
        assert!(value["stdout"].as_str().unwrap().starts_with("from-env "));
    }

    #[test]
    fn test_unlaunchable_downloader_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut buf = Vec::new();

        let err = run_extract(
            &cli(&["--downloader", "nonexistent_downloader_xyz_123", "abc"]),
            temp_dir.path(),
            None,
            &mut buf,
        )
        .unwrap_err();

        assert!(matches!(err, ExtractorError::Downloader(_)));
        assert!(buf.is_empty());
    }
}
