// WHY: Dialog-aware sentence segmentation as a small quote-state machine
// Terminal punctuation inside an open quotation never splits, so dialogue stays with its sentence

use anyhow::Result;
use regex_automata::{meta::Regex, Input};
use std::sync::LazyLock;
use tracing::debug;

use super::{AbbreviationChecker, Sentence};

/// 0-based byte position in source text
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default)]
pub struct BytePos(pub usize);

impl BytePos {
    pub fn new(pos: usize) -> Self {
        BytePos(pos)
    }

    pub fn advance(&self, offset: usize) -> Self {
        BytePos(self.0 + offset)
    }
}

impl From<BytePos> for usize {
    fn from(pos: BytePos) -> Self {
        pos.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Narrative,
    StraightDialog,
    SmartDialog,
}

#[derive(Debug, Clone, Copy)]
enum MatchType {
    /// Terminal punctuation + whitespace + sentence start outside quotes
    NarrativeBoundary,
    DialogOpen(QuoteState),
    /// Terminal punctuation + closing quote + whitespace + sentence start
    DialogEnd,
    /// Closing quote that continues the sentence ("Stop," he said)
    DialogSoftEnd,
    /// Blank line between paragraphs
    HardSeparator,
}

static SHARED_SEGMENTER: LazyLock<SentenceSegmenter> =
    LazyLock::new(|| SentenceSegmenter::new().expect("valid sentence boundary patterns"));

pub struct SentenceSegmenter {
    narrative: Regex,
    straight_dialog: Regex,
    smart_dialog: Regex,
    abbreviation_checker: AbbreviationChecker,
}

impl SentenceSegmenter {
    pub fn new() -> Result<Self> {
        // Compositional pattern components
        let sentence_end_punct = r"[.!?]+";
        let closers = r"[\x22\x27\u{201D}\u{2019}\)\]]*";
        let separator = r"\s+";
        let sentence_start_chars = r"[A-Z\x22\x27\u{201C}\u{2018}\(\[]";
        let hard_separator = r"\r?\n[ \t]*\r?\n";
        let dialog_open_chars = r"[\x22\u{201C}]";
        let straight_close = r"\x22";
        let smart_close = r"\u{201D}";

        let narrative_boundary = format!("{sentence_end_punct}{closers}{separator}{sentence_start_chars}");
        let straight_hard_end = format!("{sentence_end_punct}{straight_close}{separator}{sentence_start_chars}");
        let smart_hard_end = format!("{sentence_end_punct}{smart_close}{separator}{sentence_start_chars}");

        let narrative_pattern = format!(
            "(?:{narrative_boundary})|(?:{hard_separator})|(?:{dialog_open_chars})"
        );
        let straight_pattern = format!(
            "(?:{straight_hard_end})|(?:{straight_close})|(?:{hard_separator})"
        );
        let smart_pattern = format!(
            "(?:{smart_hard_end})|(?:{smart_close})|(?:{hard_separator})"
        );

        Ok(Self {
            narrative: Regex::new(&narrative_pattern)?,
            straight_dialog: Regex::new(&straight_pattern)?,
            smart_dialog: Regex::new(&smart_pattern)?,
            abbreviation_checker: AbbreviationChecker::new(),
        })
    }

    /// Process-wide segmenter, compiled on first use
    pub fn shared() -> &'static SentenceSegmenter {
        &SHARED_SEGMENTER
    }

    fn pattern_for(&self, state: QuoteState) -> &Regex {
        match state {
            QuoteState::Narrative => &self.narrative,
            QuoteState::StraightDialog => &self.straight_dialog,
            QuoteState::SmartDialog => &self.smart_dialog,
        }
    }

    /// Split text into trimmed, non-empty sentences with 1-based ordinals
    pub fn split<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        let mut bounds: Vec<(BytePos, BytePos)> = Vec::new();
        let mut state = QuoteState::Narrative;
        let mut sentence_start = BytePos::new(0);
        let mut position = BytePos::new(0);

        while position.0 < text.len() {
            let input = Input::new(&text[position.0..]);
            let Some(mat) = self.pattern_for(state).find(input) else {
                break;
            };
            let match_start = position.advance(mat.start());
            let match_end = position.advance(mat.end());
            let matched = &text[match_start.0..match_end.0];

            match classify_match(matched, state) {
                MatchType::NarrativeBoundary => {
                    let sentence_end = match_start.advance(punctuation_run_len(matched));
                    // Resume on the sentence-start character so an opening quote is seen again
                    let next_start = BytePos::new(match_end.0 - last_char_len(matched));
                    let candidate = &text[sentence_start.0..sentence_end.0];

                    if !self.abbreviation_checker.ends_with_title_abbreviation(candidate) {
                        bounds.push((sentence_start, sentence_end));
                        sentence_start = next_start;
                    }
                    position = next_start;
                    state = QuoteState::Narrative;
                }
                MatchType::DialogOpen(next_state) => {
                    position = match_end;
                    state = next_state;
                }
                MatchType::DialogEnd => {
                    let sentence_end = match_start.advance(closing_quote_end(matched));
                    let next_start = BytePos::new(match_end.0 - last_char_len(matched));
                    bounds.push((sentence_start, sentence_end));
                    sentence_start = next_start;
                    position = next_start;
                    state = QuoteState::Narrative;
                }
                MatchType::DialogSoftEnd => {
                    position = match_end;
                    state = QuoteState::Narrative;
                }
                MatchType::HardSeparator => {
                    // An unclosed quotation does not run past its paragraph
                    bounds.push((sentence_start, match_start));
                    sentence_start = match_end;
                    position = match_end;
                    state = QuoteState::Narrative;
                }
            }
        }

        if sentence_start.0 < text.len() {
            bounds.push((sentence_start, BytePos::new(text.len())));
        }

        let sentences: Vec<Sentence<'a>> = bounds
            .into_iter()
            .filter_map(|(start, end)| trimmed(text, start, end))
            .enumerate()
            .map(|(index, (start, end))| Sentence {
                ordinal: index + 1,
                text: &text[start.0..end.0],
                start,
                end,
            })
            .collect();

        debug!("Segmented {} bytes into {} sentences", text.len(), sentences.len());
        sentences
    }
}

fn classify_match(matched: &str, state: QuoteState) -> MatchType {
    if matches!(matched.as_bytes().first(), Some(b'\r' | b'\n')) {
        return MatchType::HardSeparator;
    }
    match state {
        QuoteState::Narrative => match matched {
            "\"" => MatchType::DialogOpen(QuoteState::StraightDialog),
            "\u{201C}" => MatchType::DialogOpen(QuoteState::SmartDialog),
            _ => MatchType::NarrativeBoundary,
        },
        QuoteState::StraightDialog | QuoteState::SmartDialog => {
            if matched.chars().count() == 1 {
                MatchType::DialogSoftEnd
            } else {
                MatchType::DialogEnd
            }
        }
    }
}

/// Length of the leading terminal punctuation and closer run
fn punctuation_run_len(matched: &str) -> usize {
    matched.find(char::is_whitespace).unwrap_or(matched.len())
}

/// Offset just past the closing quote of a dialog hard end
fn closing_quote_end(matched: &str) -> usize {
    matched
        .char_indices()
        .find(|(_, ch)| matches!(ch, '"' | '\u{201D}'))
        .map(|(i, ch)| i + ch.len_utf8())
        .unwrap_or_else(|| punctuation_run_len(matched))
}

fn last_char_len(matched: &str) -> usize {
    matched.chars().next_back().map(char::len_utf8).unwrap_or(0)
}

fn trimmed(text: &str, start: BytePos, end: BytePos) -> Option<(BytePos, BytePos)> {
    let raw = &text[start.0..end.0];
    let leading = raw.len() - raw.trim_start().len();
    let trailing = raw.len() - raw.trim_end().len();
    if leading == raw.len() {
        return None;
    }
    Some((start.advance(leading), BytePos::new(end.0 - trailing)))
}
