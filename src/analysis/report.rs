// WHY: Full report = timestamp header + every section, each regenerated from the same document
// The body is separated from the header so it can be compared across runs

use chrono::{Local, NaiveDateTime};

use super::{analyze, dialogue_by_character, extract_dialogue, find_cliches};
use crate::error::PlushError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const DIALOGUE_BY_CHARACTER_BANNER: &str = "=== Dialogue by Character ===";
pub const EXTRACTED_DIALOGUE_BANNER: &str = "=== Extracted Dialogue ===";
pub const CLICHES_BANNER: &str = "=== Clichés ===";

pub fn header_line(timestamp: &NaiveDateTime) -> String {
    format!("Full Report | {}", timestamp.format(TIMESTAMP_FORMAT))
}

/// Everything after the header line; deterministic for fixed input and preset
pub fn full_report_body(text: &str, preset_name: &str) -> Result<String, PlushError> {
    let sections = [
        analyze(text, preset_name)?,
        format!("{DIALOGUE_BY_CHARACTER_BANNER}\n{}", dialogue_by_character(text)),
        format!("{EXTRACTED_DIALOGUE_BANNER}\n{}", extract_dialogue(text)),
        format!("{CLICHES_BANNER}\n{}", find_cliches(text)),
    ];
    Ok(sections.join("\n\n"))
}

pub fn export_full_report_at(
    text: &str,
    preset_name: &str,
    timestamp: &NaiveDateTime,
) -> Result<String, PlushError> {
    let body = full_report_body(text, preset_name)?;
    Ok(format!("{}\n\n{}", header_line(timestamp), body))
}

/// Full report stamped with the current local time
pub fn export_full_report(text: &str, preset_name: &str) -> Result<String, PlushError> {
    export_full_report_at(text, preset_name, &Local::now().naive_local())
}
