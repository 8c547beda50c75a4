//! CLI argument parsing for insta-extractor.
//!
//! Uses clap derive macros. No short flags are defined, not even `-h`/`-V`:
//! shortcodes may start with `-` and must never be taken for a flag.

use crate::error::{ExtractorError, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// Download a single Instagram post by shortcode and report the result as JSON.
///
/// The downloader runs with `--dirname-pattern <dir> -- <shortcode>`. Its exit
/// code and output are reported in the JSON record on stdout; this command
/// itself exits 0 whenever a shortcode was given.
#[derive(Parser, Debug)]
#[command(name = "insta-extractor")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Post shortcode. A leading `-` is added when missing.
    #[arg(value_name = "SHORTCODE", allow_hyphen_values = true)]
    pub shortcode: Option<String>,

    /// Arguments after the shortcode. Accepted and ignored.
    #[arg(
        value_name = "IGNORED",
        allow_hyphen_values = true,
        trailing_var_arg = true,
        hide = true
    )]
    pub ignored: Vec<String>,

    /// Path to the config file (YAML).
    ///
    /// Default: `insta-extractor.yaml` in the current directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Downloader command line, overriding config and `INSTA_EXTRACTOR_DOWNLOADER`.
    #[arg(long, value_name = "COMMAND")]
    pub downloader: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `INSTA_EXTRACTOR_LOG` or `warn` is used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print help.
    #[allow(dead_code)]
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version.
    #[allow(dead_code)]
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Cli {
    /// Parse the process arguments.
    ///
    /// `--help` and `--version` print and exit 0. Any other parse failure
    /// becomes [`ExtractorError::Usage`] so it is reported as JSON.
    pub fn parse_args() -> Result<Self> {
        Self::parse_args_from(std::env::args_os())
    }

    pub fn parse_args_from<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).or_else(|err| match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => Err(ExtractorError::Usage(err.to_string().trim_end().to_string())),
        })
    }
}
