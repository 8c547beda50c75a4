//! Configuration for insta-extractor.
//!
//! This module defines the Config struct that represents `insta-extractor.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod model;
mod operations;


pub use model::{Config, DEFAULT_CONFIG_FILE, DEFAULT_DIR_PREFIX, DEFAULT_DOWNLOADER};
