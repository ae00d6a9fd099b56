//! Finished report handed to the transport layer.

use crate::package::constants::content_type;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// Filename used when the record does not suggest one.
pub const DEFAULT_FILENAME: &str = "analysis_report.docx";

/// A generated `.docx` package plus its response directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
    pub filename: String,
}

impl GeneratedDocument {
    pub(crate) fn new(bytes: Vec<u8>, suggested_name: Option<&str>) -> Self {
        Self {
            bytes,
            mime_type: content_type::WML_DOCUMENT,
            filename: sanitize_filename(suggested_name.unwrap_or_default()),
        }
    }

    /// `Content-Disposition` value offering the package as a download.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }

    /// Base64 encoding of the package, for JSON-only transports.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.bytes)
    }
}

/// Turns a user-supplied name into a safe `.docx` filename.
///
/// Characters outside `[A-Za-z0-9._-]` become `_`, an existing `.doc`/`.docx`
/// extension is replaced, and blank names fall back to [`DEFAULT_FILENAME`].
pub fn sanitize_filename(name: &str) -> String {
    let name = name.trim();
    let lower = name.to_ascii_lowercase();
    let stem = if lower.ends_with(".docx") {
        &name[..name.len() - 5]
    } else if lower.ends_with(".doc") {
        &name[..name.len() - 4]
    } else {
        name
    };

    let stem: String = stem
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_') {
                ch
            } else {
                '_'
            }
        })
        .collect();

    if stem.trim_matches(|c: char| c == '.' || c == '_').is_empty() {
        return DEFAULT_FILENAME.to_string();
    }
    format!("{stem}.docx")
}
