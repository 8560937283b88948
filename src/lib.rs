pub mod analysis;
pub mod batch;
pub mod error;
pub mod export;
pub mod lexicon;
pub mod names;
pub mod readability;
pub mod reader;
pub mod templates;
pub mod tokenize;

// Re-export the analysis operations for convenient access
pub use analysis::{
    analyze, detect_passive, dialogue_by_character, export_full_report, extract_dialogue,
    find_cliches, normalize, suggest, StyleMetrics,
};

pub use error::PlushError;
pub use lexicon::{StylePreset, NONE_PRESET, STYLE_PRESETS};
pub use readability::ReadabilityStats;
pub use tokenize::{split_sentences, Sentence};

// Re-export I/O and batch types for the CLI and benchmarks
pub use batch::{discover_manuscripts, process_batch, BatchConfig, DiscoveryConfig, FileStats, RunStats};
pub use reader::{read_manuscript, ReaderConfig};
