// WHY: Style/metrics report combining readability, filler tallies and per-sentence findings
// Metrics are computed once into a serializable struct, then rendered as text

use serde::Serialize;
use tracing::debug;

use super::passive::passive_sentences;
use super::suggest::{format_suggestions, suggestions_for, SentenceSuggestion, LONG_SENTENCE_TOKENS};
use crate::error::PlushError;
use crate::lexicon::{StylePreset, FILLER_WORDS};
use crate::readability::ReadabilityStats;
use crate::tokenize::{split_sentences, whitespace_words, Sentence};

pub const NONE_FOUND: &str = "None found.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FillerWordCount {
    pub word: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedSentence<'a> {
    pub ordinal: usize,
    pub text: &'a str,
}

impl<'a> From<&Sentence<'a>> for NumberedSentence<'a> {
    fn from(sentence: &Sentence<'a>) -> Self {
        Self { ordinal: sentence.ordinal, text: sentence.text }
    }
}

/// Everything the style report shows, in structured form
#[derive(Debug, Clone, Serialize)]
pub struct StyleMetrics<'a> {
    pub preset: &'static str,
    pub emphasis: &'static str,
    pub word_count: usize,
    pub sentence_count: usize,
    pub average_words_per_sentence: f64,
    pub flesch_kincaid_grade: f64,
    /// Nonzero counts only, in lexicon order
    pub filler_words: Vec<FillerWordCount>,
    pub long_sentences: Vec<NumberedSentence<'a>>,
    pub passive_sentences: Vec<NumberedSentence<'a>>,
    pub suggestions: Vec<SentenceSuggestion<'a>>,
}

impl<'a> StyleMetrics<'a> {
    pub fn compute(text: &'a str, preset_name: &str) -> Result<Self, PlushError> {
        let preset = StylePreset::lookup(preset_name)?;
        let readability = ReadabilityStats::compute(text);
        let sentences = split_sentences(text);

        let long_sentences: Vec<_> = sentences
            .iter()
            .filter(|sentence| sentence.token_count() > LONG_SENTENCE_TOKENS)
            .map(NumberedSentence::from)
            .collect();
        let passive: Vec<_> = passive_sentences(&sentences)
            .iter()
            .map(NumberedSentence::from)
            .collect();

        debug!(
            preset = preset.name,
            sentences = sentences.len(),
            long = long_sentences.len(),
            passive = passive.len(),
            "Computed style metrics"
        );

        Ok(Self {
            preset: preset.name,
            emphasis: preset.emphasis,
            word_count: whitespace_words(text).count(),
            sentence_count: readability.sentence_count,
            average_words_per_sentence: readability.words_per_sentence,
            flesch_kincaid_grade: readability.flesch_kincaid_grade,
            filler_words: filler_word_counts(text),
            long_sentences,
            passive_sentences: passive,
            suggestions: suggestions_for(&sentences),
        })
    }

    /// Render the report blocks, separated by blank lines
    pub fn render(&self) -> String {
        let mut blocks = Vec::new();

        if self.preset != crate::lexicon::NONE_PRESET {
            blocks.push(format!("Style: {}\n{}", self.preset, self.emphasis));
        }

        blocks.push(format!(
            "Words: {}\nSentences: {}\nAverage words per sentence: {:.2}\nFlesch-Kincaid grade: {:.2}",
            self.word_count,
            self.sentence_count,
            self.average_words_per_sentence,
            self.flesch_kincaid_grade
        ));

        let mut fillers = String::from("Filler words:");
        for filler in &self.filler_words {
            fillers.push_str(&format!("\n - {}: {}", filler.word, filler.count));
        }
        blocks.push(fillers);

        let mut long = String::from("Long sentences:");
        for sentence in &self.long_sentences {
            long.push_str(&format!("\n{}: {}", sentence.ordinal, sentence.text));
        }
        blocks.push(long);

        let mut passive = String::from("Passive voice:");
        if self.passive_sentences.is_empty() {
            passive.push('\n');
            passive.push_str(NONE_FOUND);
        }
        for sentence in &self.passive_sentences {
            passive.push_str(&format!("\n{}: {}", sentence.ordinal, sentence.text));
        }
        blocks.push(passive);

        blocks.push(format!("Suggestions:\n{}", format_suggestions(&self.suggestions)));

        blocks.join("\n\n")
    }
}

/// Whole-word counts over a lower-cased whitespace split; punctuation-adjacent words do not match
pub fn filler_word_counts(text: &str) -> Vec<FillerWordCount> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = whitespace_words(&lowered).collect();
    FILLER_WORDS
        .iter()
        .map(|&word| FillerWordCount {
            word,
            count: words.iter().filter(|&&w| w == word).count(),
        })
        .filter(|filler| filler.count > 0)
        .collect()
}

/// Multi-section style report for a document under a named preset
pub fn analyze(text: &str, preset_name: &str) -> Result<String, PlushError> {
    Ok(StyleMetrics::compute(text, preset_name)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_preset_fails() {
        assert_eq!(
            analyze("Some text.", "NotAPreset"),
            Err(PlushError::UnknownPreset("NotAPreset".to_string()))
        );
    }

    #[test]
    fn test_none_preset_has_no_style_header() {
        let report = analyze("The cat sat on the mat.", "None").unwrap();
        assert!(report.starts_with("Words: 6\nSentences: 1\n"));
        assert!(!report.contains("Style:"));
    }

    #[test]
    fn test_style_header() {
        let report = analyze("The cat sat on the mat.", "Technical").unwrap();
        assert!(report.starts_with("Style: Technical\nPassive voice, clarity\n\nWords: 6"));
    }

    #[test]
    fn test_full_layout_for_simple_text() {
        let report = analyze("The cat sat on the mat.", "None").unwrap();
        let expected = "Words: 6\n\
                        Sentences: 1\n\
                        Average words per sentence: 6.00\n\
                        Flesch-Kincaid grade: -1.45\n\
                        \n\
                        Filler words:\n\
                        \n\
                        Long sentences:\n\
                        \n\
                        Passive voice:\n\
                        None found.\n\
                        \n\
                        Suggestions:\n\
                        All good! No suggestions.";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_filler_counts_are_whole_word() {
        let counts = filler_word_counts("Just JUST just, really likely very");
        assert_eq!(
            counts,
            [
                FillerWordCount { word: "just", count: 2 },
                FillerWordCount { word: "really", count: 1 },
                FillerWordCount { word: "very", count: 1 },
            ]
        );
    }

    #[test]
    fn test_long_and_passive_blocks() {
        // 30 words plus the period, capitalized so it starts a new sentence
        let long = format!("Word {}.", vec!["word"; 29].join(" "));
        let text = format!("The vase was shattered. {long} Short one.");
        let metrics = StyleMetrics::compute(&text, "None").unwrap();
        assert_eq!(metrics.passive_sentences, [NumberedSentence { ordinal: 1, text: "The vase was shattered." }]);
        assert_eq!(metrics.long_sentences.len(), 1);
        assert_eq!(metrics.long_sentences[0].ordinal, 2);

        let report = metrics.render();
        assert!(report.contains("Passive voice:\n1: The vase was shattered."));
        assert!(report.contains(&format!("Long sentences:\n2: {long}")));
    }

    #[test]
    fn test_empty_document_is_well_formed() {
        let report = analyze("", "Gritty").unwrap();
        assert!(report.contains("Words: 0\nSentences: 0\nAverage words per sentence: 0.00\nFlesch-Kincaid grade: 0.00"));
        assert!(report.contains("Passive voice:\nNone found."));
        assert!(report.ends_with("Suggestions:\nAll good! No suggestions."));
    }

    #[test]
    fn test_deterministic() {
        let text = "It was really very late. \"Go,\" said Ann. She was worried.";
        assert_eq!(analyze(text, "Snappy").unwrap(), analyze(text, "Snappy").unwrap());
    }
}
