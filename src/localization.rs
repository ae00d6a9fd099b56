//! Localization strategy for language-specific formatting.

use chrono::NaiveDate;

/// Strategy for handling language-specific formatting conventions.
pub trait LocalizationStrategy: Send + Sync {
    /// Formats the report date shown on the title page.
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Default localization strategy (US English, e.g. "March 9, 2024").
pub struct DefaultLocalization;

impl LocalizationStrategy for DefaultLocalization {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%B %-d, %Y").to_string()
    }
}

/// Korean localization strategy (e.g. "2024년 3월 9일").
pub struct KoreanLocalization;

impl LocalizationStrategy for KoreanLocalization {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y년 %-m월 %-d일").to_string()
    }
}

/// Report locale selected by the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    /// Resolves a language code; unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "ko" | "ko-kr" | "kr" => Locale::Ko,
            _ => Locale::En,
        }
    }

    pub fn strategy(self) -> &'static dyn LocalizationStrategy {
        match self {
            Locale::En => &DefaultLocalization,
            Locale::Ko => &KoreanLocalization,
        }
    }
}
