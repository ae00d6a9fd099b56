//! Section formatter - infers labelled sections in freeform analysis text.

use crate::core::ContentBlock;
use regex::Regex;
use std::sync::LazyLock;

static RE_PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n){2,}").expect("valid paragraph break pattern"));

// Prefix test only: a chunk qualifies if it *starts* with an uppercase label
// and a colon, no matter what follows.
static RE_SECTION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z\s&\-/]+:").expect("valid section label pattern"));

/// Splits freeform text into paragraph blocks, promoting `LABEL:` prefixes
/// to bold label paragraphs.
pub struct SectionFormatter;

impl SectionFormatter {
    /// Formats `text` into blocks. Empty or missing text yields no blocks.
    pub fn format(text: Option<&str>) -> Vec<ContentBlock> {
        let Some(text) = text else {
            return Vec::new();
        };

        let mut blocks = Vec::new();
        for chunk in RE_PARAGRAPH_BREAK.split(text) {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                continue;
            }
            Self::format_chunk(chunk, &mut blocks);
        }
        blocks
    }

    fn format_chunk(chunk: &str, blocks: &mut Vec<ContentBlock>) {
        if !RE_SECTION_LABEL.is_match(chunk) {
            blocks.push(ContentBlock::paragraph(chunk));
            return;
        }

        // The label pattern guarantees a colon is present.
        let (label, remainder) = chunk.split_once(':').unwrap_or((chunk, ""));
        blocks.push(ContentBlock::bold(format!("{}:", label.trim_end())));

        let remainder = remainder.trim();
        if !remainder.is_empty() {
            blocks.push(ContentBlock::paragraph(remainder));
        }
    }
}
