//! Exit code constants for the insta-extractor CLI.
//!
//! - 0: Report emitted (the downloader's own status lives in `returncode`)
//! - 1: User error (missing shortcode, bad config)
//! - 2: Filesystem failure (working directory or output directory)
//! - 3: Downloader could not be launched or awaited
//! - 4: Report serialization failure

/// A report was emitted.
pub const SUCCESS: i32 = 0;

/// User error: missing shortcode, invalid configuration or downloader command.
pub const USER_ERROR: i32 = 1;

/// Filesystem failure: current directory unresolvable or output directory not creatable.
pub const IO_FAILURE: i32 = 2;

/// The downloader process could not be spawned or waited on.
pub const DOWNLOADER_FAILURE: i32 = 3;

/// The report could not be encoded as JSON.
pub const SERIALIZATION_FAILURE: i32 = 4;
