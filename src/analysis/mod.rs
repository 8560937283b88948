// WHY: Text-analysis pipeline; every function is pure over its input and callable standalone
// Only the full report depends on the other sections

pub mod cliche;
pub mod dialogue;
pub mod normalize;
pub mod passive;
pub mod report;
pub mod style;
pub mod suggest;

pub use cliche::{find_cliches, matched_cliches};
pub use dialogue::{dialogue_by_character, extract_dialogue, quoted_spans, speaker_tally};
pub use normalize::{collapse_whitespace, normalize, normalize_into};
pub use passive::detect_passive;
pub use report::{export_full_report, export_full_report_at, full_report_body};
pub use style::{analyze, filler_word_counts, StyleMetrics};
pub use suggest::{sentence_suggestions, suggest, SentenceIssue, SentenceSuggestion};
