// WHY: Passive voice as a declarative auxiliary + "-ed" word rule
// Heuristic only: "was excited" matches, "was very tired" and irregular participles do not

use regex_automata::meta::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::tokenize::{split_sentences, Sentence};

/// Auxiliary form, whitespace, then a single word ending in "ed"
static PASSIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let auxiliaries = [
        r"was", r"were", r"is\s+being", r"are\s+being",
        r"has\s+been", r"have\s+been", r"had\s+been",
    ];
    let pattern = format!(r"(?i)\b(?:{})\s+\w+ed\b", auxiliaries.join("|"));
    Regex::new(&pattern).expect("valid regex")
});

pub fn is_passive(sentence: &str) -> bool {
    PASSIVE_RE.is_match(sentence)
}

/// Sentences matching the passive heuristic, in document order
pub fn detect_passive(text: &str) -> Vec<Sentence<'_>> {
    passive_sentences(&split_sentences(text))
}

pub fn passive_sentences<'a>(sentences: &[Sentence<'a>]) -> Vec<Sentence<'a>> {
    let passive: Vec<_> = sentences
        .iter()
        .filter(|sentence| is_passive(sentence.text))
        .cloned()
        .collect();
    debug!("Passive voice heuristic matched {} of {} sentences", passive.len(), sentences.len());
    passive
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_auxiliary_plus_ed() {
        for sentence in [
            "The door was opened.",
            "They were rejected.",
            "It is being handled.",
            "The files are being processed.",
            "The bill HAD BEEN SETTLED.",
            "Mistakes have been repeated.",
            "She was excited.",
        ] {
            assert!(is_passive(sentence), "expected passive: {sentence}");
        }
    }

    #[test]
    fn test_ignores_non_matching() {
        for sentence in [
            "She was very tired.",
            "The report was written by the team.",
            "He opened the door.",
            "It is being difficult.",
            "Washed ashore, the crate rotted.",
        ] {
            assert!(!is_passive(sentence), "expected active: {sentence}");
        }
    }

    #[test]
    fn test_reports_ordinals() {
        let text = "He ran home. The cake was baked. Nobody cared. The window was smashed.";
        let found: Vec<_> = detect_passive(text).into_iter().map(|s| (s.ordinal, s.text)).collect();
        assert_eq!(found, [(2, "The cake was baked."), (4, "The window was smashed.")]);
    }

    #[test]
    fn test_empty_input() {
        assert!(detect_passive("").is_empty());
    }
}
