//! Filesystem utilities for insta-extractor.

mod output_dir;

pub use output_dir::{output_dir_path, prepare_output_dir};
