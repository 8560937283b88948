// WHY: Per-sentence critique from three independent heuristics
// Each rule is a flag on the sentence; unflagged sentences produce no output

use regex_automata::meta::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::lexicon::FILLER_WORDS;
use crate::tokenize::{split_sentences, Sentence};

/// Sentences with more word/punctuation tokens than this are flagged as long
pub const LONG_SENTENCE_TOKENS: usize = 30;

/// Sentences with more filler occurrences than this are flagged
pub const FILLER_LIMIT: usize = 2;

pub const NO_SUGGESTIONS: &str = "All good! No suggestions.";

static WAS_WERE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:was|were)\b").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SentenceIssue {
    TooLong,
    FillerHeavy,
    PassiveCue,
}

impl SentenceIssue {
    pub fn message(&self) -> &'static str {
        match self {
            SentenceIssue::TooLong => "Break up this sentence.",
            SentenceIssue::FillerHeavy => "Cut filler words.",
            SentenceIssue::PassiveCue => "Try active voice.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceSuggestion<'a> {
    pub ordinal: usize,
    pub text: &'a str,
    pub issues: Vec<SentenceIssue>,
}

/// Filler occurrences as substrings of the lower-cased sentence
///
/// Substring counting is intentional: "likely" counts as "like".
pub fn filler_occurrences(sentence: &str) -> usize {
    let lowered = sentence.to_lowercase();
    FILLER_WORDS.iter().map(|word| lowered.matches(word).count()).sum()
}

pub fn sentence_issues(sentence: &str, token_count: usize) -> Vec<SentenceIssue> {
    let mut issues = Vec::new();
    if token_count > LONG_SENTENCE_TOKENS {
        issues.push(SentenceIssue::TooLong);
    }
    if filler_occurrences(sentence) > FILLER_LIMIT {
        issues.push(SentenceIssue::FillerHeavy);
    }
    if WAS_WERE_RE.is_match(sentence) {
        issues.push(SentenceIssue::PassiveCue);
    }
    issues
}

/// Flagged sentences in document order
pub fn sentence_suggestions(text: &str) -> Vec<SentenceSuggestion<'_>> {
    suggestions_for(&split_sentences(text))
}

pub fn suggestions_for<'a>(sentences: &[Sentence<'a>]) -> Vec<SentenceSuggestion<'a>> {
    sentences
        .iter()
        .filter_map(|sentence| {
            let issues = sentence_issues(sentence.text, sentence.token_count());
            (!issues.is_empty()).then_some(SentenceSuggestion {
                ordinal: sentence.ordinal,
                text: sentence.text,
                issues,
            })
        })
        .collect()
}

pub fn suggest(text: &str) -> String {
    format_suggestions(&sentence_suggestions(text))
}

/// Render flagged sentences as blank-line separated blocks
pub fn format_suggestions(suggestions: &[SentenceSuggestion<'_>]) -> String {
    if suggestions.is_empty() {
        return NO_SUGGESTIONS.to_string();
    }
    suggestions
        .iter()
        .map(|suggestion| {
            let mut block = format!("Sentence {}:\n{}", suggestion.ordinal, suggestion.text);
            for issue in &suggestion.issues {
                block.push_str("\n- ");
                block.push_str(issue.message());
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
