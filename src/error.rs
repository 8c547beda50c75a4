//! Error types for the insta-extractor CLI.
//!
//! Uses thiserror for derive macros. Every variant maps to an exit code and
//! its message is what ends up in the `{"error": ...}` object on stdout.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for extractor operations.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// No shortcode was given on the command line.
    #[error("No shortcode provided")]
    MissingShortcode,

    /// Command-line arguments rejected by the parser.
    #[error("{0}")]
    Usage(String),

    /// Invalid configuration or downloader command.
    #[error("{0}")]
    UserError(String),

    /// Filesystem operation failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The downloader process could not be run.
    #[error("Downloader failed: {0}")]
    Downloader(String),

    /// The report could not be encoded.
    #[error("failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExtractorError {
    /// Wrap an I/O error with a description of what was being attempted.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        ExtractorError::Io {
            context: context.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExtractorError::MissingShortcode => exit_codes::USER_ERROR,
            ExtractorError::Usage(_) => exit_codes::USER_ERROR,
            ExtractorError::UserError(_) => exit_codes::USER_ERROR,
            ExtractorError::Io { .. } => exit_codes::IO_FAILURE,
            ExtractorError::Downloader(_) => exit_codes::DOWNLOADER_FAILURE,
            ExtractorError::Serialization(_) => exit_codes::SERIALIZATION_FAILURE,
        }
    }
}

/// Result type alias for extractor operations.
pub type Result<T> = std::result::Result<T, ExtractorError>;
