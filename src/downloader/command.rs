//! Downloader command resolution.
//!
//! # Resolution Order
//!
//! 1. `--downloader` flag
//! 2. `INSTA_EXTRACTOR_DOWNLOADER` environment variable
//! 3. `downloader` from the config file (or its default)

use crate::config::Config;
use crate::error::{ExtractorError, Result};
use crate::shortcode::Shortcode;
use std::ffi::OsString;
use std::path::Path;

/// Environment variable that overrides the configured downloader.
pub const DOWNLOADER_ENV_VAR: &str = "INSTA_EXTRACTOR_DOWNLOADER";

/// Where the downloader command line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSource {
    /// `--downloader` on the command line.
    Flag,
    /// The environment variable.
    Environment,
    /// Config file or built-in default.
    Config,
}

/// A parsed downloader command: program plus leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloaderCommand {
    pub program: String,
    pub base_args: Vec<String>,
    pub source: CommandSource,
}

impl DownloaderCommand {
    /// Pick the command line by precedence and parse it.
    ///
    /// Blank overrides are treated as absent.
    pub fn resolve(flag: Option<&str>, env: Option<&str>, config: &Config) -> Result<Self> {
        let non_blank = |s: &&str| !s.trim().is_empty();

        let (line, source) = if let Some(line) = flag.filter(non_blank) {
            (line, CommandSource::Flag)
        } else if let Some(line) = env.filter(non_blank) {
            (line, CommandSource::Environment)
        } else {
            (config.downloader.as_str(), CommandSource::Config)
        };

        Self::parse(line, source)
    }

    /// Split a command line shell-style into program and arguments.
    pub fn parse(line: &str, source: CommandSource) -> Result<Self> {
        let mut words = shell_words::split(line).map_err(|e| {
            ExtractorError::UserError(format!(
                "failed to parse downloader command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                line, e
            ))
        })?;

        if words.is_empty() {
            return Err(ExtractorError::UserError(format!(
                "downloader command is empty after parsing: '{}'",
                line
            )));
        }

        let program = words.remove(0);
        Ok(Self {
            program,
            base_args: words,
            source,
        })
    }

    /// Full argument list for one post: the base arguments followed by
    /// `--dirname-pattern <out_dir> -- <shortcode>`.
    ///
    /// The `--` keeps the marker-prefixed shortcode from being read as an option.
    /// `out_dir` is passed as-is, so non-UTF-8 paths reach the downloader intact.
    pub fn args_for(&self, out_dir: &Path, shortcode: &Shortcode) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.base_args.iter().map(OsString::from).collect();
        args.push("--dirname-pattern".into());
        args.push(out_dir.as_os_str().to_os_string());
        args.push("--".into());
        args.push(shortcode.as_str().into());
        args
    }

    /// Human-readable command line, for logs and error messages.
    pub fn display_line(&self) -> String {
        let mut words = Vec::with_capacity(self.base_args.len() + 1);
        words.push(self.program.as_str());
        words.extend(self.base_args.iter().map(String::as_str));
        shell_words::join(words)
    }
}
