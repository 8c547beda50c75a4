//! External downloader invocation.
//!
//! - **Command**: which downloader to run and how its argv is assembled
//! - **Executor**: synchronous subprocess execution with output capture
//!
//! The downloader is an opaque collaborator. Its exit status and streams are
//! captured verbatim and never interpreted here.

mod command;
mod executor;

pub use command::{CommandSource, DOWNLOADER_ENV_VAR, DownloaderCommand};
pub use executor::{DownloadOutcome, run_downloader};
