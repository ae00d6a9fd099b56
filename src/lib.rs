//! # paper-report
//!
//! Turns the analysis record of a research paper into a minimal, openable
//! `.docx` report.
//!
//! ## Example
//!
//! ```no_run
//! use paper_report::{FieldRecord, ReportGenerator, ReportOptions};
//!
//! let record = FieldRecord::from_json(r#"{"title": "On Measurement", "topic_measurement": true}"#)?;
//! let generator = ReportGenerator::new(ReportOptions::default());
//! let document = generator.generate(&record)?;
//! std::fs::write(&document.filename, &document.bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod composer;
pub mod core;
pub mod error;
pub mod localization;
pub mod output;
pub mod package;
pub mod render;

pub use composer::{DocumentComposer, SectionFormatter};
pub use crate::core::{ContentBlock, FieldRecord, NuggetFlags, TopicFlags};
pub use error::{Error, GenerationFailure, Result};
pub use localization::{DefaultLocalization, KoreanLocalization, Locale, LocalizationStrategy};
pub use output::{sanitize_filename, GeneratedDocument, DEFAULT_FILENAME};
pub use package::{DocumentPackage, PackageAssembler};

use chrono::NaiveDate;
use log::info;

/// Options for report generation.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Date printed on the title page. `None` uses today's local date.
    pub report_date: Option<NaiveDate>,
    /// How newlines inside a single text block are rendered.
    pub line_breaks: LineBreakMode,
    /// Locale used for the title-page date.
    pub locale: Locale,
}

/// Specifies how a newline inside one text block is rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineBreakMode {
    /// Emit a `<w:br/>` line break for every newline.
    #[default]
    Explicit,
    /// Keep the newline inside a single text node; word processors show it
    /// as whitespace.
    Collapse,
}

/// Generates report packages from field records.
///
/// Holds only configuration, so one instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    options: ReportOptions,
}

impl ReportGenerator {
    /// Creates a new generator with the given options.
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Creates a new generator with default options.
    pub fn with_defaults() -> Self {
        Self::new(ReportOptions::default())
    }

    /// Composes the report blocks for `record` without packaging them.
    pub fn compose(&self, record: &FieldRecord) -> Vec<ContentBlock> {
        self.composer().compose(record)
    }

    /// Generates the `.docx` package for `record`.
    ///
    /// # Returns
    /// The package bytes with their MIME type and suggested filename.
    pub fn generate(&self, record: &FieldRecord) -> Result<GeneratedDocument> {
        let blocks = self.compose(record);
        let bytes = PackageAssembler::new(self.options.line_breaks).assemble(&blocks)?;
        let document = GeneratedDocument::new(bytes, record.filename.as_deref());

        info!(
            "generated {} ({} blocks, {} bytes)",
            document.filename,
            blocks.len(),
            document.bytes.len()
        );
        Ok(document)
    }

    /// Parses a JSON record and generates its package.
    pub fn generate_from_json(&self, json: &str) -> Result<GeneratedDocument> {
        let record = FieldRecord::from_json(json)?;
        self.generate(&record)
    }

    fn composer(&self) -> DocumentComposer {
        match self.options.report_date {
            Some(date) => DocumentComposer::new(date, self.options.locale),
            None => DocumentComposer::today(self.options.locale),
        }
    }
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::ReportGenerator;
    use pyo3::prelude::*;
    use pyo3::types::PyBytes;

    /// Generates a DOCX report from a JSON field record.
    #[pyfunction]
    fn generate_docx(py: Python<'_>, json: String) -> PyResult<Py<PyBytes>> {
        let generator = ReportGenerator::with_defaults();
        let document = generator
            .generate_from_json(&json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string()))?;
        Ok(PyBytes::new(py, &document.bytes).unbind())
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn paper_report(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(generate_docx, m)?)?;
        Ok(())
    }
}
