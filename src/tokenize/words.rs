// WHY: Word-level tokenization used for counting only
// Two granularities: word/punctuation runs for sentence length, whitespace words for totals

use regex_automata::meta::Regex;
use std::sync::LazyLock;

/// Maximal runs of word characters, or of non-word non-space characters
static WORD_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+|[^\w\s]+").expect("valid regex"));

/// Tokenize into word and punctuation runs ("don't!" -> "don", "'", "t", "!")
pub fn word_punct_tokens(text: &str) -> Vec<&str> {
    WORD_PUNCT_RE
        .find_iter(text)
        .map(|mat| &text[mat.range()])
        .collect()
}

pub fn word_punct_count(text: &str) -> usize {
    WORD_PUNCT_RE.find_iter(text).count()
}

/// Whitespace-separated words, punctuation attached
pub fn whitespace_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
