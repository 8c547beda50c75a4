//! Config loading, discovery, and validation.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{ExtractorError, Result};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ExtractorError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Without one, `insta-extractor.yaml` in
    /// `cwd` is used if present, otherwise defaults apply.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config from --config");
            return Self::load(path);
        }

        let candidate = cwd.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading config from working directory");
            Self::load(&candidate)
        } else {
            debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                ExtractorError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `downloader` must contain at least one word
    /// - `dir_prefix` must be non-empty and relative
    pub fn validate(&self) -> Result<()> {
        if self.downloader.trim().is_empty() {
            return Err(ExtractorError::UserError(
                "config validation failed: downloader must not be empty".to_string(),
            ));
        }

        if self.dir_prefix.is_empty() {
            return Err(ExtractorError::UserError(
                "config validation failed: dir_prefix must not be empty".to_string(),
            ));
        }

        if Path::new(&self.dir_prefix).is_absolute() {
            return Err(ExtractorError::UserError(format!(
                "config validation failed: dir_prefix must be relative to the working directory (found '{}')",
                self.dir_prefix
            )));
        }

        Ok(())
    }
}
