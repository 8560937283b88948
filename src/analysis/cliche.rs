use crate::lexicon::CLICHES;

pub const NO_CLICHES: &str = "None found.";

/// Clichés present as case-insensitive substrings, in lexicon order, each at most once
pub fn matched_cliches(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    CLICHES
        .iter()
        .copied()
        .filter(|phrase| lowered.contains(phrase))
        .collect()
}

pub fn find_cliches(text: &str) -> String {
    let found = matched_cliches(text);
    if found.is_empty() {
        return NO_CLICHES.to_string();
    }
    found.join("\n")
}
