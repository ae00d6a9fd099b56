//! Composer modules turning a field record into report content blocks.

mod section;

use crate::core::record::non_blank;
use crate::core::{ContentBlock, FieldRecord};
use crate::localization::Locale;
use chrono::NaiveDate;
use log::debug;

pub use self::section::SectionFormatter;

/// Builds the ordered block sequence of an analysis report.
///
/// Composition is total: absent fields render as placeholders and empty
/// analysis sections are left out entirely.
#[derive(Debug, Clone, Copy)]
pub struct DocumentComposer {
    report_date: NaiveDate,
    locale: Locale,
}

impl DocumentComposer {
    /// Creates a composer stamping reports with `report_date`.
    pub fn new(report_date: NaiveDate, locale: Locale) -> Self {
        Self {
            report_date,
            locale,
        }
    }

    /// Creates a composer using today's local date.
    pub fn today(locale: Locale) -> Self {
        Self::new(chrono::Local::now().date_naive(), locale)
    }

    /// Composes the full report for `record`.
    pub fn compose(&self, record: &FieldRecord) -> Vec<ContentBlock> {
        let mut blocks = Vec::new();

        self.push_title_page(record, &mut blocks);
        Self::push_executive_summary(record, &mut blocks);

        let sections = [
            ("Synthesis", record.synthesis()),
            ("Critical Archaeological Analysis", record.critical()),
            ("Strategic Prospector Analysis", record.prospector()),
        ];
        for (heading, text) in sections {
            let Some(text) = text else {
                continue;
            };
            blocks.push(ContentBlock::Heading1(heading.to_string()));
            blocks.extend(SectionFormatter::format(Some(text)));
            blocks.push(ContentBlock::PageBreak);
        }

        // Full text is reproduced as-is, without label inference.
        if let Some(fulltext) = record.fulltext() {
            blocks.push(ContentBlock::Heading1("Original Paper Excerpt".to_string()));
            blocks.push(ContentBlock::paragraph(fulltext));
        }

        debug!("composed {} content blocks", blocks.len());
        blocks
    }

    fn push_title_page(&self, record: &FieldRecord, blocks: &mut Vec<ContentBlock>) {
        blocks.push(ContentBlock::Title(
            field_or(&record.title, "Untitled Paper").to_string(),
        ));
        blocks.push(ContentBlock::paragraph(field_or(
            &record.authors,
            "Unknown Authors",
        )));
        blocks.push(ContentBlock::paragraph(field_or(
            &record.citation,
            "No citation available",
        )));
        blocks.push(ContentBlock::paragraph("Analysis Report - PhD Research"));
        blocks.push(ContentBlock::paragraph(format!(
            "Notion ID: {}",
            field_or(&record.notion_id, "N/A")
        )));
        blocks.push(ContentBlock::paragraph(
            self.locale.strategy().format_date(self.report_date),
        ));
        blocks.push(ContentBlock::PageBreak);
    }

    fn push_executive_summary(record: &FieldRecord, blocks: &mut Vec<ContentBlock>) {
        blocks.push(ContentBlock::Heading1("Executive Summary".to_string()));

        blocks.push(ContentBlock::paragraph(format!(
            "Quality Assessment: {}",
            field_or(&record.quality_assessment, "Not assessed")
        )));

        let gender_level = record
            .gender_level
            .map(|level| level.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        blocks.push(ContentBlock::paragraph(format!(
            "Gender Level: {} ({})",
            gender_level,
            field_or(&record.gender_treatment, "Not specified")
        )));

        blocks.push(ContentBlock::paragraph(format!(
            "Disjuncture: {} at {} level",
            field_or(&record.disjuncture_type, "Not specified"),
            field_or(&record.disjuncture_level, "unspecified")
        )));

        blocks.push(ContentBlock::paragraph(format!(
            "Building Potential: {}",
            field_or(&record.building_potential, "Not assessed")
        )));

        let topics = record.topics.active_labels();
        let topics = if topics.is_empty() {
            "None identified".to_string()
        } else {
            topics.join(", ")
        };
        blocks.push(ContentBlock::paragraph(format!("Research Topics: {topics}")));

        blocks.push(ContentBlock::paragraph("Available Nuggets:"));
        for (label, available) in record.nuggets.entries() {
            let answer = if available { "Yes" } else { "No" };
            blocks.push(ContentBlock::indented(format!("• {label}: {answer}")));
        }

        blocks.push(ContentBlock::PageBreak);
    }
}

fn field_or<'a>(field: &'a Option<String>, placeholder: &'a str) -> &'a str {
    non_blank(field).map(str::trim).unwrap_or(placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NuggetFlags, TopicFlags};
    use pretty_assertions::assert_eq;

    fn composer() -> DocumentComposer {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date");
        DocumentComposer::new(date, Locale::En)
    }

    fn texts(blocks: &[ContentBlock]) -> Vec<&str> {
        blocks.iter().filter_map(ContentBlock::text).collect()
    }

    fn paragraph_starting_with<'a>(blocks: &'a [ContentBlock], prefix: &str) -> &'a str {
        texts(blocks)
            .into_iter()
            .find(|text| text.starts_with(prefix))
            .unwrap_or_else(|| panic!("no paragraph starting with {prefix:?}"))
    }

    #[test]
    fn test_empty_record_uses_placeholders() {
        let blocks = composer().compose(&FieldRecord::default());
        assert_eq!(
            blocks,
            vec![
                ContentBlock::Title("Untitled Paper".into()),
                ContentBlock::paragraph("Unknown Authors"),
                ContentBlock::paragraph("No citation available"),
                ContentBlock::paragraph("Analysis Report - PhD Research"),
                ContentBlock::paragraph("Notion ID: N/A"),
                ContentBlock::paragraph("March 9, 2024"),
                ContentBlock::PageBreak,
                ContentBlock::Heading1("Executive Summary".into()),
                ContentBlock::paragraph("Quality Assessment: Not assessed"),
                ContentBlock::paragraph("Gender Level: N/A (Not specified)"),
                ContentBlock::paragraph("Disjuncture: Not specified at unspecified level"),
                ContentBlock::paragraph("Building Potential: Not assessed"),
                ContentBlock::paragraph("Research Topics: None identified"),
                ContentBlock::paragraph("Available Nuggets:"),
                ContentBlock::indented("• Conceptual: No"),
                ContentBlock::indented("• Practitioner: No"),
                ContentBlock::indented("• Builder: No"),
                ContentBlock::PageBreak,
            ]
        );
    }

    #[test]
    fn test_summary_fields() {
        let record = FieldRecord {
            quality_assessment: Some("High".into()),
            gender_level: Some(3.0),
            gender_treatment: Some("central".into()),
            disjuncture_type: Some("methodological".into()),
            disjuncture_level: Some("high".into()),
            building_potential: Some("Strong".into()),
            ..Default::default()
        };
        let blocks = composer().compose(&record);
        assert_eq!(
            paragraph_starting_with(&blocks, "Gender Level"),
            "Gender Level: 3 (central)"
        );
        assert_eq!(
            paragraph_starting_with(&blocks, "Disjuncture"),
            "Disjuncture: methodological at high level"
        );
        assert_eq!(
            paragraph_starting_with(&blocks, "Quality"),
            "Quality Assessment: High"
        );
        assert_eq!(
            paragraph_starting_with(&blocks, "Building"),
            "Building Potential: Strong"
        );
    }

    #[test]
    fn test_non_finite_gender_level_renders_placeholder() {
        let record = FieldRecord::from_json(r#"{"gender_level": "inf", "gender_treatment": "x"}"#)
            .expect("record should parse");
        let blocks = composer().compose(&record);
        assert_eq!(
            paragraph_starting_with(&blocks, "Gender Level"),
            "Gender Level: N/A (x)"
        );
    }

    #[test]
    fn test_single_topic() {
        let record = FieldRecord {
            topics: TopicFlags {
                gender_bias: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let blocks = composer().compose(&record);
        assert_eq!(
            paragraph_starting_with(&blocks, "Research Topics"),
            "Research Topics: Gender & Bias"
        );
    }

    #[test]
    fn test_all_topics_in_fixed_order() {
        let record = FieldRecord {
            topics: TopicFlags {
                ai_ethics: true,
                future_of_work: true,
                gender_bias: true,
                measurement: true,
                performance_mgmt: true,
            },
            ..Default::default()
        };
        let blocks = composer().compose(&record);
        assert_eq!(
            paragraph_starting_with(&blocks, "Research Topics"),
            "Research Topics: AI Ethics, Future of Work, Gender & Bias, Measurement, Performance Management"
        );
    }

    #[test]
    fn test_nugget_order_is_fixed() {
        let record = FieldRecord {
            nuggets: NuggetFlags {
                conceptual: false,
                practitioner: true,
                builder: true,
            },
            ..Default::default()
        };
        let blocks = composer().compose(&record);
        let nuggets: Vec<_> = blocks
            .iter()
            .filter(|b| matches!(b, ContentBlock::Paragraph { indented: true, .. }))
            .filter_map(ContentBlock::text)
            .collect();
        assert_eq!(
            nuggets,
            vec!["• Conceptual: No", "• Practitioner: Yes", "• Builder: Yes"]
        );
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let record = FieldRecord {
            synthesis: Some(String::new()),
            critical: Some("CLAIM: bold\n\nplain".into()),
            prospector: None,
            ..Default::default()
        };
        let blocks = composer().compose(&record);
        let headings: Vec<_> = blocks
            .iter()
            .filter_map(|b| match b {
                ContentBlock::Heading1(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            headings,
            vec!["Executive Summary", "Critical Archaeological Analysis"]
        );
        assert_eq!(
            &blocks[blocks.len() - 4..],
            &[
                ContentBlock::bold("CLAIM:"),
                ContentBlock::paragraph("bold"),
                ContentBlock::paragraph("plain"),
                ContentBlock::PageBreak,
            ]
        );
    }

    #[test]
    fn test_section_order_and_fulltext() {
        let record = FieldRecord {
            synthesis: Some("s".into()),
            critical: Some("c".into()),
            prospector: Some("p".into()),
            fulltext: Some("ABSTRACT: kept verbatim\n\nsecond".into()),
            ..Default::default()
        };
        let blocks = composer().compose(&record);
        let tail = &blocks[18..];
        assert_eq!(
            tail,
            &[
                ContentBlock::Heading1("Synthesis".into()),
                ContentBlock::paragraph("s"),
                ContentBlock::PageBreak,
                ContentBlock::Heading1("Critical Archaeological Analysis".into()),
                ContentBlock::paragraph("c"),
                ContentBlock::PageBreak,
                ContentBlock::Heading1("Strategic Prospector Analysis".into()),
                ContentBlock::paragraph("p"),
                ContentBlock::PageBreak,
                ContentBlock::Heading1("Original Paper Excerpt".into()),
                ContentBlock::paragraph("ABSTRACT: kept verbatim\n\nsecond"),
            ]
        );
    }

    #[test]
    fn test_compose_is_deterministic() {
        let record = FieldRecord {
            title: Some("<Fair> & 'Square'".into()),
            synthesis: Some("A: b\n\nc".into()),
            ..Default::default()
        };
        let composer = composer();
        assert_eq!(composer.compose(&record), composer.compose(&record));
    }

    #[test]
    fn test_localized_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date");
        let blocks = DocumentComposer::new(date, Locale::Ko).compose(&FieldRecord::default());
        assert_eq!(blocks[5], ContentBlock::paragraph("2024년 3월 9일"));
    }
}
