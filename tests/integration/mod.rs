// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A short manuscript exercising every report section
pub const SAMPLE_MANUSCRIPT: &str = "\
\u{201C}We should go,\u{201D} whispered Elena. The door was locked by someone.

\"Really?\" asked Tom. It was just really very quiet, like a needle in a haystack.

\"Fine,\" said Elena. They left at dawn.";

/// Test fixture helper for creating temporary directories of manuscripts
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();
        Self { temp_dir, root_path }
    }

    /// Create a manuscript file, including parent directories
    pub fn create_manuscript<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Create a file with raw bytes (for invalid UTF-8 cases)
    pub fn create_raw_file<P: AsRef<Path>>(&self, relative_path: P, bytes: &[u8]) -> PathBuf {
        let file_path = self.root_path.join(relative_path);
        fs::write(&file_path, bytes).expect("Failed to write raw test file");
        file_path
    }

    /// Full-report path the batch runner writes for a source file
    pub fn report_path<P: AsRef<Path>>(&self, source_path: P) -> PathBuf {
        let source_path = source_path.as_ref();
        let file_stem = source_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");
        source_path.with_file_name(format!("{file_stem}_plush_report.txt"))
    }

    pub fn read_report<P: AsRef<Path>>(&self, source_path: P) -> Result<String, std::io::Error> {
        fs::read_to_string(self.report_path(source_path))
    }
}

/// Drop the timestamp header line and the blank line after it
pub fn strip_header(report: &str) -> &str {
    let (header, body) = report.split_once("\n\n").expect("report has a header line");
    assert!(header.starts_with("Full Report | "), "unexpected header: {header}");
    body
}

/// Compare two strings line by line, providing detailed diff on mismatch
pub fn assert_golden_text(actual: &str, expected: &str, context: &str) {
    let actual_lines: Vec<&str> = actual.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();

    for (i, (actual_line, expected_line)) in actual_lines.iter().zip(expected_lines.iter()).enumerate() {
        if actual_line != expected_line {
            panic!(
                "{}: Line {} mismatch\nExpected: {}\nActual:   {}",
                context,
                i + 1,
                expected_line,
                actual_line
            );
        }
    }

    if actual_lines.len() != expected_lines.len() {
        panic!(
            "{}: Line count mismatch. Expected {} lines, got {} lines",
            context,
            expected_lines.len(),
            actual_lines.len()
        );
    }
}
