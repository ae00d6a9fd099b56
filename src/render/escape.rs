/// Escapes the five reserved XML characters.
///
/// `&` is handled in the same pass as the others, so entities produced here
/// are never escaped a second time. Apostrophes use the named `&apos;` form.
/// Characters XML 1.0 forbids (C0 controls other than tab, LF and CR, plus
/// U+FFFE and U+FFFF) become a space.
pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c if !is_xml_char(c) => escaped.push(' '),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Whether `ch` may appear in an XML 1.0 document.
pub fn is_xml_char(ch: char) -> bool {
    !matches!(
        ch,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

/// Escapes optional text; `None` becomes the empty string.
pub fn escape(value: Option<&str>) -> String {
    value.map(escape_xml).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unescape(value: &str) -> String {
        value
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(
            escape_xml("a\"b<c>d&e'"),
            "a&quot;b&lt;c&gt;d&amp;e&apos;"
        );
    }

    #[test]
    fn test_escape_none_and_empty() {
        assert_eq!(escape(None), "");
        assert_eq!(escape(Some("")), "");
    }

    #[test]
    fn test_existing_entities_are_escaped_once() {
        assert_eq!(escape_xml("&amp;"), "&amp;amp;");
        assert_eq!(escape_xml("Gender & Bias"), "Gender &amp; Bias");
    }

    #[test]
    fn test_illegal_xml_chars_become_spaces() {
        assert_eq!(
            escape_xml("Page 1\u{000C}Page 2\u{0}\u{1F}\u{FFFE}\u{FFFF}end"),
            "Page 1 Page 2    end"
        );
        assert_eq!(escape_xml("tab\tlf\ncr\r"), "tab\tlf\ncr\r");
        assert!(is_xml_char('\u{FFFD}'));
        assert!(!is_xml_char('\u{7}'));
    }

    #[test]
    fn test_escape_round_trip() {
        let samples = [
            "R&D <pilot> \"quoted\" 'single'",
            "&&<<>>\"\"''",
            "&lt; already looks escaped",
            "plain text with no specials",
            "ünïcödé & émoji 🎓 <tag/>",
        ];
        for sample in samples {
            let escaped = escape_xml(sample);
            let bare = escaped
                .replace("&amp;", "")
                .replace("&lt;", "")
                .replace("&gt;", "")
                .replace("&quot;", "")
                .replace("&apos;", "");
            assert!(
                !bare.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')),
                "{escaped}"
            );
            assert_eq!(unescape(&escaped), sample);
        }
    }
}
