//! JSON records written to stdout.
//!
//! Every run writes exactly one JSON object followed by a newline: an
//! [`ExtractionReport`] when the downloader ran, an [`ErrorReport`] otherwise.

use crate::downloader::DownloadOutcome;
use crate::error::{ExtractorError, Result};
use crate::shortcode::Shortcode;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Outcome of delegating one shortcode to the downloader.
///
/// Field order is the output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    pub shortcode: String,
    /// Lossy for non-UTF-8 paths.
    pub out_dir: String,
    pub returncode: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExtractionReport {
    pub fn new(shortcode: &Shortcode, out_dir: &Path, outcome: DownloadOutcome) -> Self {
        Self {
            shortcode: shortcode.as_str().to_string(),
            out_dir: out_dir.to_string_lossy().into_owned(),
            returncode: outcome.returncode,
            stdout: outcome.stdout,
            stderr: outcome.stderr,
        }
    }
}

/// `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error: String,
}

impl From<&ExtractorError> for ErrorReport {
    fn from(err: &ExtractorError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Serialize `record` as one line of JSON into `writer`.
///
/// Nothing is written unless the whole record serialized.
pub fn emit<W: Write, T: Serialize>(writer: &mut W, record: &T) -> Result<()> {
    let mut line = serde_json::to_vec(record)?;
    line.push(b'\n');

    writer
        .write_all(&line)
        .and_then(|()| writer.flush())
        .map_err(|e| ExtractorError::io("failed to write report", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serializer;
    use serde_json::{Value, json};
    use std::path::PathBuf;

    fn sample() -> ExtractionReport {
        ExtractionReport::new(
            &Shortcode::normalize("abc123"),
            Path::new("/work/insta_-abc123"),
            DownloadOutcome {
                returncode: 1,
                stdout: "out\n".to_string(),
                stderr: "Fatal error\n".to_string(),
            },
        )
    }

    #[test]
    fn report_has_exactly_five_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["out_dir", "returncode", "shortcode", "stderr", "stdout"]
        );
    }

    #[test]
    fn report_serializes_fields_in_order() {
        let mut buf = Vec::new();
        emit(&mut buf, &sample()).unwrap();

        let line = String::from_utf8(buf).unwrap();
        assert_eq!(
            line,
            "{\"shortcode\":\"-abc123\",\"out_dir\":\"/work/insta_-abc123\",\
             \"returncode\":1,\"stdout\":\"out\\n\",\"stderr\":\"Fatal error\\n\"}\n"
        );
    }

    #[test]
    fn error_report_matches_missing_shortcode_shape() {
        let mut buf = Vec::new();
        emit(&mut buf, &ErrorReport::from(&ExtractorError::MissingShortcode)).unwrap();

        let value: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value, json!({"error": "No shortcode provided"}));
    }

    #[test]
    fn emit_writes_single_line() {
        let mut buf = Vec::new();
        emit(&mut buf, &sample()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches('\n').count(), 1);
        assert!(text.ends_with('\n'));
    }

    struct FailsMidway;

    impl Serialize for FailsMidway {
        fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
            use serde::ser::{Error, SerializeStruct};

            let mut state = serializer.serialize_struct("FailsMidway", 2)?;
            state.serialize_field("shortcode", "-abc")?;
            Err(S::Error::custom("cannot encode field"))
        }
    }

    #[test]
    fn failed_serialization_writes_nothing() {
        let mut buf = Vec::new();

        let err = emit(&mut buf, &FailsMidway).unwrap_err();

        assert_eq!(err.exit_code(), crate::exit_codes::SERIALIZATION_FAILURE);
        assert!(buf.is_empty(), "partial record written: {buf:?}");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_out_dir_still_serializes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let out_dir = PathBuf::from(OsStr::from_bytes(b"/work/dl\xff/insta_-abc"));
        let report = ExtractionReport::new(
            &Shortcode::normalize("abc"),
            &out_dir,
            DownloadOutcome {
                returncode: 0,
                stdout: String::new(),
                stderr: String::new(),
            },
        );

        let mut buf = Vec::new();
        emit(&mut buf, &report).unwrap();

        let value: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["out_dir"], "/work/dl\u{FFFD}/insta_-abc");
    }
}
