// WHY: Centralized static lexicons shared read-only by every analysis function
// Fixed at compile time so concurrent callers never need locking

use std::fmt;

use crate::error::PlushError;

/// Low-information words flagged when overused
pub const FILLER_WORDS: &[&str] = &[
    "just", "really", "very", "that", "actually",
    "like", "maybe", "somewhat", "perhaps", "quite",
];

/// Known overused phrases, reported in this order
pub const CLICHES: &[&str] = &[
    "needle in a haystack",
    "cold sweat",
    "chill ran down",
    "time stood still",
    "dead silence",
    "at the end of the day",
    "low-hanging fruit",
    "the calm before the storm",
    "head over heels",
    "in the nick of time",
    "plenty of fish in the sea",
    "easy as pie",
    "scared stiff",
    "raining cats and dogs",
    "think outside the box",
    "every cloud has a silver lining",
    "pushing up daisies",
    "barking up the wrong tree",
    "blood ran cold",
    "fit as a fiddle",
];

/// Reporting verbs that attribute a quoted span to the name following them
pub const SPEAKER_VERBS: &[&str] = &[
    "said", "asked", "replied", "whispered", "shouted",
    "cried", "muttered", "yelled", "snapped", "called",
];

/// Named bundle of report-emphasis metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePreset {
    pub name: &'static str,
    /// What the preset highlights in a report
    pub emphasis: &'static str,
    /// Intended use case
    pub note: &'static str,
}

/// Identity preset: no style header in reports
pub const NONE_PRESET: &str = "None";

pub const STYLE_PRESETS: &[StylePreset] = &[
    StylePreset { name: NONE_PRESET, emphasis: "", note: "" },
    StylePreset {
        name: "Gritty",
        emphasis: "Cliché detection, passive voice, long sentences",
        note: "Crime, noir and thriller drafts",
    },
    StylePreset {
        name: "Snappy",
        emphasis: "Filler words, punchy structure",
        note: "Fast-paced commercial fiction",
    },
    StylePreset {
        name: "Poetic",
        emphasis: "Flow, sentence variety",
        note: "Literary fiction and lyrical prose",
    },
    StylePreset {
        name: "Technical",
        emphasis: "Passive voice, clarity",
        note: "Manuals, documentation and reports",
    },
    StylePreset {
        name: "Sparse",
        emphasis: "Minimal filler, clarity",
        note: "Minimalist prose",
    },
];

impl StylePreset {
    /// Look up a preset by exact name
    pub fn lookup(name: &str) -> Result<&'static StylePreset, PlushError> {
        STYLE_PRESETS
            .iter()
            .find(|preset| preset.name == name)
            .ok_or_else(|| PlushError::UnknownPreset(name.to_string()))
    }

    pub fn is_none(&self) -> bool {
        self.name == NONE_PRESET
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub fn preset_names() -> impl Iterator<Item = &'static str> {
    STYLE_PRESETS.iter().map(|preset| preset.name)
}
