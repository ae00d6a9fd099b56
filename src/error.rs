//! Error types for paper-report.

use serde::Serialize;
use thiserror::Error;

/// Result type for paper-report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while generating a report package.
///
/// Rendering and composition never fail; only reading the input record and
/// writing the zip container can.
#[derive(Error, Debug)]
pub enum Error {
    /// The input could not be decoded as a field record.
    #[error("Invalid field record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    /// Stable machine-readable code for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidRecord(_) => "invalid_record",
            Error::Io(_) => "io",
            Error::Zip(_) => "zip_write",
        }
    }
}

/// Failure body handed to the transport layer when generation fails.
///
/// No partial package ever accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationFailure {
    pub error: String,
    pub kind: String,
    pub details: String,
}

impl From<&Error> for GenerationFailure {
    fn from(err: &Error) -> Self {
        Self {
            error: "Failed to generate document".to_string(),
            kind: err.kind().to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_failure_from_zip_error() {
        let err = Error::Zip(zip::result::ZipError::FileNotFound);
        let failure = GenerationFailure::from(&err);
        assert_eq!(failure.error, "Failed to generate document");
        assert_eq!(failure.kind, "zip_write");
        assert!(failure.details.starts_with("ZIP error:"));
    }

    #[test]
    fn test_generation_failure_serializes() {
        let err = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        let json = serde_json::to_string(&GenerationFailure::from(&err)).expect("serialize");
        assert!(json.contains("\"kind\":\"io\""));
        assert!(json.contains("disk full"));
    }
}
