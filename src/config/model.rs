//! Config struct definition and default implementation.

use serde::Deserialize;

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "insta-extractor.yaml";

/// Downloader command line used when nothing overrides it.
pub const DEFAULT_DOWNLOADER: &str = "python3 -m instaloader";

/// Prefix of the per-post output directory.
pub const DEFAULT_DIR_PREFIX: &str = "insta_";

/// Configuration for the extractor.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Downloader command line, split shell-style into program and leading args.
    /// The extractor appends `--dirname-pattern <dir> -- <shortcode>`.
    #[serde(default = "default_downloader")]
    pub downloader: String,

    /// Prefix joined with the normalized shortcode to name the output directory.
    /// May contain a relative parent path (`downloads/insta_`); must not be absolute.
    #[serde(default = "default_dir_prefix")]
    pub dir_prefix: String,
}

fn default_downloader() -> String {
    DEFAULT_DOWNLOADER.to_string()
}

fn default_dir_prefix() -> String {
    DEFAULT_DIR_PREFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            downloader: default_downloader(),
            dir_prefix: default_dir_prefix(),
        }
    }
}
