// WHY: Tokenization adapter consumed by every analysis function
// Sentences are borrowed slices of the caller's document, never copies

pub mod abbreviations;
pub mod segmenter;
pub mod words;

pub use abbreviations::AbbreviationChecker;
pub use segmenter::{BytePos, SentenceSegmenter};
pub use words::{whitespace_words, word_punct_count, word_punct_tokens};

use crate::analysis::normalize::collapse_whitespace;

/// A sentence of a document, numbered from 1 in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub ordinal: usize,
    /// Trimmed text borrowed from the source document
    pub text: &'a str,
    pub start: BytePos,
    pub end: BytePos,
}

impl<'a> Sentence<'a> {
    /// Sentence text with interior line breaks and whitespace runs collapsed
    pub fn normalize(&self) -> String {
        collapse_whitespace(self.text)
    }

    /// Word/punctuation token count
    pub fn token_count(&self) -> usize {
        word_punct_count(self.text)
    }
}

/// Split text into sentences with the shared segmenter
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    SentenceSegmenter::shared().split(text)
}
