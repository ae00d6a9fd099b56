use super::escape_xml;
use crate::core::ContentBlock;
use crate::render::Renderer;
use crate::LineBreakMode;

/// WordprocessingML main namespace.
pub const WML_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Renders content blocks as WordprocessingML `<w:p>` elements.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordMlRenderer {
    line_breaks: LineBreakMode,
}

impl WordMlRenderer {
    pub fn new(line_breaks: LineBreakMode) -> Self {
        Self { line_breaks }
    }

    /// Renders one block to a `<w:p>` fragment.
    pub fn render_block(&self, block: &ContentBlock) -> String {
        match block {
            ContentBlock::Title(text) => format!(
                "<w:p><w:pPr><w:spacing w:before=\"240\" w:after=\"240\"/><w:jc w:val=\"center\"/></w:pPr>\
                 <w:r><w:rPr><w:b/><w:sz w:val=\"32\"/></w:rPr>{}</w:r></w:p>",
                self.text_nodes(text, false)
            ),
            ContentBlock::Heading1(text) => format!(
                "<w:p><w:pPr><w:spacing w:before=\"240\" w:after=\"120\"/><w:jc w:val=\"left\"/></w:pPr>\
                 <w:r><w:rPr><w:b/><w:sz w:val=\"28\"/></w:rPr>{}</w:r></w:p>",
                self.text_nodes(text, false)
            ),
            ContentBlock::Paragraph {
                text,
                bold,
                indented,
            } => {
                let mut xml = String::from("<w:p>");
                if *indented {
                    xml.push_str("<w:pPr><w:ind w:left=\"720\"/></w:pPr>");
                }
                xml.push_str("<w:r>");
                if *bold {
                    xml.push_str("<w:rPr><w:b/></w:rPr>");
                }
                xml.push_str(&self.text_nodes(text, true));
                xml.push_str("</w:r></w:p>");
                xml
            }
            ContentBlock::PageBreak => "<w:p><w:r><w:br w:type=\"page\"/></w:r></w:p>".to_string(),
        }
    }

    // In explicit mode each embedded newline becomes a `<w:br/>` between text nodes.
    fn text_nodes(&self, text: &str, preserve: bool) -> String {
        let open = if preserve {
            "<w:t xml:space=\"preserve\">"
        } else {
            "<w:t>"
        };
        match self.line_breaks {
            LineBreakMode::Collapse => format!("{open}{}</w:t>", escape_xml(text)),
            LineBreakMode::Explicit => text
                .split('\n')
                .map(|line| format!("{open}{}</w:t>", escape_xml(line.trim_end_matches('\r'))))
                .collect::<Vec<_>>()
                .join("<w:br/>"),
        }
    }
}

impl Renderer for WordMlRenderer {
    fn render(&self, blocks: &[ContentBlock]) -> String {
        let mut out = String::with_capacity(blocks.len() * 128 + 256);
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        out.push('\n');
        out.push_str(&format!("<w:document xmlns:w=\"{WML_NAMESPACE}\"><w:body>"));
        for block in blocks {
            out.push_str(&self.render_block(block));
        }
        out.push_str("</w:body></w:document>");
        out
    }
}
