// WHY: Quoted-span extraction and speaker-tag attribution as single regex scans
// Attribution only sees `"..." said Name`; pronouns and tags before the quote are not attributed

use regex_automata::meta::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::lexicon::SPEAKER_VERBS;

pub const NO_ATTRIBUTED_DIALOGUE: &str = "No attributed dialogue found.";

/// Straight or curly double quotes around a span with no nested quote
static QUOTED_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\x22\u{201C}]([^\x22\u{201C}\u{201D}]+)[\x22\u{201D}]"#).expect("valid regex")
});

/// Quoted span, whitespace, speaker verb, whitespace, capitalized name
static SPEAKER_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r#"[\x22\u{{201C}}][^\x22\u{{201C}}\u{{201D}}]*[\x22\u{{201D}}]\s+(?:{})\s+([A-Z][a-zA-Z]*)"#,
        SPEAKER_VERBS.join("|")
    );
    Regex::new(&pattern).expect("valid regex")
});

/// Contents of quoted spans in document order, quotes stripped
pub fn quoted_spans(text: &str) -> Vec<&str> {
    QUOTED_SPAN_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get_group(1).map(|span| &text[span.range()]))
        .collect()
}

/// One quoted span per line; empty when there is no dialogue
pub fn extract_dialogue(text: &str) -> String {
    let spans = quoted_spans(text);
    debug!("Extracted {} quoted spans", spans.len());
    spans.join("\n")
}

/// Attributed names with their counts, in first-seen order
pub fn speaker_tally(text: &str) -> Vec<(&str, usize)> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for caps in SPEAKER_TAG_RE.captures_iter(text) {
        let Some(span) = caps.get_group(1) else {
            continue;
        };
        let name = &text[span.range()];
        match tally.iter_mut().find(|(seen, _)| *seen == name) {
            Some((_, count)) => *count += 1,
            None => tally.push((name, 1)),
        }
    }
    tally
}

pub fn dialogue_by_character(text: &str) -> String {
    let tally = speaker_tally(text);
    debug!("Attributed dialogue to {} speakers", tally.len());
    if tally.is_empty() {
        return NO_ATTRIBUTED_DIALOGUE.to_string();
    }
    tally
        .iter()
        .map(|(name, count)| format!("{name}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_span() {
        assert_eq!(extract_dialogue("He said \"Hello there\" and left."), "Hello there");
    }

    #[test]
    fn test_curly_and_straight_spans_in_order() {
        let text = "\u{201C}First,\u{201D} she said. Then: \"Second!\" And \u{201C}third\".";
        assert_eq!(extract_dialogue(text), "First,\nSecond!\nthird");
    }

    #[test]
    fn test_no_dialogue_is_empty() {
        assert_eq!(extract_dialogue("No quotes here."), "");
        assert_eq!(extract_dialogue(""), "");
        // Empty quotes carry no content
        assert_eq!(extract_dialogue("An empty \"\" pair."), "");
    }

    #[test]
    fn test_attribution_example() {
        assert_eq!(dialogue_by_character("\"Stop,\" shouted Marcus."), "Marcus: 1");
    }

    #[test]
    fn test_attribution_tally_first_seen_order() {
        let text = "\"Hi,\" said Zoe. \"Hello,\" replied Adam. \"Again?\" asked Zoe. \
                    \u{201C}Yes,\u{201D} whispered Adam. \"Fine,\" muttered Zoe.";
        assert_eq!(speaker_tally(text), [("Zoe", 3), ("Adam", 2)]);
        assert_eq!(dialogue_by_character(text), "Zoe: 3\nAdam: 2");
    }

    #[test]
    fn test_attribution_requires_capitalized_name_after_verb() {
        assert_eq!(dialogue_by_character("\"Go,\" she said."), NO_ATTRIBUTED_DIALOGUE);
        assert_eq!(dialogue_by_character("\"Go,\" said the captain."), NO_ATTRIBUTED_DIALOGUE);
        assert_eq!(dialogue_by_character("Marcus said \"Go.\""), NO_ATTRIBUTED_DIALOGUE);
        assert_eq!(dialogue_by_character(""), NO_ATTRIBUTED_DIALOGUE);
    }

    #[test]
    fn test_names_are_not_merged() {
        let text = "\"A,\" said Bob. \"B,\" said Bobby. \"C,\" yelled Bob-Ray.";
        assert_eq!(dialogue_by_character(text), "Bob: 2\nBobby: 1");
    }
}
