//! Per-post output directory.
//!
//! The directory is `<cwd>/<dir_prefix><shortcode>`. Creation is idempotent:
//! an existing directory is reused as-is, so repeated runs for the same post
//! write into the same place.

use crate::error::{ExtractorError, Result};
use crate::shortcode::Shortcode;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Absolute output directory for `shortcode` under `base`.
///
/// `base` must be absolute (the working directory); `prefix` is relative to it.
pub fn output_dir_path(base: &Path, prefix: &str, shortcode: &Shortcode) -> PathBuf {
    base.join(shortcode.dir_name(prefix))
}

/// Compute and create the output directory, including missing parents.
pub fn prepare_output_dir(base: &Path, prefix: &str, shortcode: &Shortcode) -> Result<PathBuf> {
    let out_dir = output_dir_path(base, prefix, shortcode);

    fs::create_dir_all(&out_dir).map_err(|e| {
        ExtractorError::io(
            format!("failed to create output directory '{}'", out_dir.display()),
            e,
        )
    })?;

    debug!(out_dir = %out_dir.display(), "output directory ready");
    Ok(out_dir)
}
