//! Post shortcode normalization.
//!
//! The downloader treats an argument starting with `-` as a post shortcode
//! (as opposed to a profile name), so every shortcode carries that marker.

use std::fmt;

/// Marker that tells the downloader the target is a single post.
pub const POST_MARKER: char = '-';

/// A shortcode guaranteed to start with [`POST_MARKER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcode(String);

impl Shortcode {
    /// Normalize a raw shortcode, prepending the marker when it is absent.
    ///
    /// Idempotent: normalizing an already-normalized value returns it unchanged.
    pub fn normalize(raw: &str) -> Self {
        if raw.starts_with(POST_MARKER) {
            Shortcode(raw.to_string())
        } else {
            Shortcode(format!("{POST_MARKER}{raw}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the output directory for this shortcode under `prefix`.
    pub fn dir_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.0)
    }
}

impl fmt::Display for Shortcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Shortcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
