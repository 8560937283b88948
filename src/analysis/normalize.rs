// WHY: Punctuation cleanup and whitespace collapsing as pure string transforms
// Buffer variants let batch callers reuse one allocation across documents

/// Canonicalize quotes and dashes, then collapse whitespace
///
/// Curly double quotes become `"`, curly single quotes become `'`,
/// `--` becomes an em dash, and every whitespace run (newlines included)
/// becomes one space with no leading or trailing whitespace.
pub fn normalize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_into(text, &mut result);
    result
}

/// Normalize into supplied buffer to avoid allocation
pub fn normalize_into(text: &str, buffer: &mut String) {
    let canonical = text
        .replace(|c: char| matches!(c, '\u{201C}' | '\u{201D}'), "\"")
        .replace(|c: char| matches!(c, '\u{2018}' | '\u{2019}'), "'")
        .replace("--", "\u{2014}");
    collapse_whitespace_into(&canonical, buffer);
}

/// Collapse whitespace runs to single spaces and trim
pub fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    collapse_whitespace_into(text, &mut result);
    result
}

pub fn collapse_whitespace_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    for word in text.split_whitespace() {
        if !buffer.is_empty() {
            buffer.push(' ');
        }
        buffer.push_str(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curly_quotes_straightened() {
        assert_eq!(
            normalize("\u{201C}It\u{2019}s late,\u{201D} she said. \u{2018}Fine.\u{2019}"),
            "\"It's late,\" she said. 'Fine.'"
        );
    }

    #[test]
    fn test_double_hyphen_becomes_em_dash() {
        assert_eq!(normalize("wait--what"), "wait\u{2014}what");
        // Four hyphens are two dashes
        assert_eq!(normalize("a----b"), "a\u{2014}\u{2014}b");
    }

    #[test]
    fn test_whitespace_collapse() {
        let input = "  Multiple\n\n\nspaces\r\n\r\n   here.\tDone  ";
        assert_eq!(normalize(input), "Multiple spaces here. Done");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "plain text",
            "  \u{201C}Quoted\u{201D} -- text\n\nwith\tbreaks ",
            "a---b -- c",
            "\u{2018}\u{2019}\u{201C}\u{201D}",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "normalize not idempotent for {:?}", sample);
            assert!(!once.contains("  "));
            assert_eq!(once.trim(), once);
        }
    }

    #[test]
    fn test_buffer_reuse() {
        let mut buffer = String::new();
        normalize_into("Line one.\nLine two.", &mut buffer);
        assert_eq!(buffer, "Line one. Line two.");
        normalize_into("Different\r\ncontent.", &mut buffer);
        assert_eq!(buffer, "Different content.");
    }

    #[test]
    fn test_collapse_preserves_unicode() {
        assert_eq!(collapse_whitespace("Unicode\n世界\r\nwith émojis 🦀."), "Unicode 世界 with émojis 🦀.");
    }
}
