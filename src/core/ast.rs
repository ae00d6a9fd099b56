/// A unit of formatted report content.
///
/// Text is kept unescaped; it is escaped once, when the block is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Title(String),
    Heading1(String),
    Paragraph {
        text: String,
        bold: bool,
        indented: bool,
    },
    PageBreak,
}

impl ContentBlock {
    /// Plain body paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            text: text.into(),
            bold: false,
            indented: false,
        }
    }

    /// Bold body paragraph, used for inferred section labels.
    pub fn bold(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            text: text.into(),
            bold: true,
            indented: false,
        }
    }

    /// Paragraph indented by one step (720 twentieths of a point).
    pub fn indented(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            text: text.into(),
            bold: false,
            indented: true,
        }
    }

    /// Returns the unescaped text payload, if the block carries one.
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentBlock::Title(text) | ContentBlock::Heading1(text) => Some(text),
            ContentBlock::Paragraph { text, .. } => Some(text),
            ContentBlock::PageBreak => None,
        }
    }
}
