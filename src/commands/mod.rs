//! Command implementations for insta-extractor.

mod extract;

pub use extract::cmd_extract;
