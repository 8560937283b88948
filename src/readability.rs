// WHY: Readability statistics computed over raw document text
// Sentence counting here is deliberately independent of the segmenter, matching common readability tooling

use regex_automata::meta::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Candidate sentence spans for readability counting
static READABILITY_SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[^.!?]+[.!?]*").expect("valid regex"));

/// Fragments with this many words or fewer are not counted as sentences
const MIN_SENTENCE_WORDS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReadabilityStats {
    pub lexicon_count: usize,
    pub sentence_count: usize,
    pub syllable_count: usize,
    pub words_per_sentence: f64,
    pub flesch_kincaid_grade: f64,
}

impl ReadabilityStats {
    pub fn compute(text: &str) -> Self {
        let words = lexicon_words(text);
        let lexicon_count = words.len();
        let sentence_count = sentence_count(text);
        let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

        if lexicon_count == 0 || sentence_count == 0 {
            return Self {
                lexicon_count,
                sentence_count,
                syllable_count,
                words_per_sentence: 0.0,
                flesch_kincaid_grade: 0.0,
            };
        }

        let words_per_sentence = lexicon_count as f64 / sentence_count as f64;
        let syllables_per_word = syllable_count as f64 / lexicon_count as f64;
        let flesch_kincaid_grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;

        Self {
            lexicon_count,
            sentence_count,
            syllable_count,
            words_per_sentence,
            flesch_kincaid_grade,
        }
    }
}

/// Whitespace words with punctuation stripped (apostrophes kept)
pub fn lexicon_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.chars().filter(|c| c.is_alphanumeric() || *c == '\'').collect::<String>())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Sentence count ignoring fragments of two words or fewer; at least 1 for any text with words
pub fn sentence_count(text: &str) -> usize {
    let mut total = 0;
    let mut ignored = 0;
    for mat in READABILITY_SENTENCE_RE.find_iter(text) {
        total += 1;
        if lexicon_words(&text[mat.range()]).len() <= MIN_SENTENCE_WORDS {
            ignored += 1;
        }
    }
    if lexicon_words(text).is_empty() {
        return 0;
    }
    (total - ignored).max(1)
}

/// Rough English syllable heuristic: vowel groups, minus a silent trailing "e"
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let vowels = "aeiouy";
    let mut prev_vowel = false;
    let mut count = 0;
    for ch in word.chars() {
        let is_vowel = vowels.contains(ch);
        if is_vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = is_vowel;
    }
    if count > 1 && word.ends_with('e') && !word.ends_with("le") && !word.ends_with("ee") {
        count -= 1;
    }
    count.max(1)
}
