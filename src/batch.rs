// WHY: Full reports for every manuscript under a directory, several files in flight at once
// Analysis is CPU-bound so it runs on blocking workers while file I/O stays on the async runtime

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::analysis::export_full_report;
use crate::export::{export_report, FULL_REPORT_KIND};
use crate::lexicon::{StylePreset, NONE_PRESET};
use crate::reader::{is_supported, read_manuscript, ReaderConfig};
use crate::tokenize::{split_sentences, whitespace_words};

/// Marker present in the file names of reports this tool writes
const GENERATED_MARKER: &str = "_plush_";

/// Configuration for manuscript discovery
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Glob pattern relative to the root; all plain-text files when unset
    pub pattern: Option<String>,
    /// Whether to fail on the first unreadable directory entry
    pub fail_fast: bool,
}

/// Configuration for a batch run
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub preset: String,
    /// Maximum number of files processed concurrently
    pub jobs: usize,
    pub fail_fast: bool,
    pub show_progress: bool,
    pub reader: ReaderConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            preset: NONE_PRESET.to_string(),
            jobs: num_cpus::get(),
            fail_fast: false,
            show_progress: true,
            reader: ReaderConfig::default(),
        }
    }
}

/// Per-file processing statistics
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FileStats {
    pub path: String,
    pub chars_processed: u64,
    pub sentences_detected: u64,
    pub words: u64,
    pub processing_time_ms: u64,
    /// "success" or "failed"
    pub status: String,
    pub report_path: Option<String>,
    pub error: Option<String>,
}

impl FileStats {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Totals for a whole batch run plus the per-file breakdown
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunStats {
    pub preset: String,
    pub files_discovered: u64,
    pub files_processed: u64,
    pub files_failed: u64,
    pub total_chars: u64,
    pub total_sentences: u64,
    pub total_words: u64,
    pub run_time_ms: u64,
    pub files: Vec<FileStats>,
}

fn is_generated_report(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.contains(GENERATED_MARKER) && name.ends_with(".txt"))
}

/// Find manuscripts under `root_dir`, sorted by path
pub fn discover_manuscripts(root_dir: impl AsRef<Path>, config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let root = root_dir.as_ref();
    if !root.is_dir() {
        anyhow::bail!("Root path is not a directory: {}", root.display());
    }

    let mut files = match &config.pattern {
        Some(pattern) => discover_by_glob(root, pattern, config.fail_fast)?,
        None => discover_by_walk(root, config.fail_fast)?,
    };
    files.retain(|path| !is_generated_report(path));
    files.sort();

    info!("Discovered {} manuscripts under {}", files.len(), root.display());
    Ok(files)
}

fn discover_by_walk(root: &Path, fail_fast: bool) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_supported(entry.path()) {
                    debug!("Found manuscript: {}", entry.path().display());
                    files.push(entry.into_path());
                }
            }
            Err(e) => {
                if fail_fast {
                    return Err(e).context("Directory traversal failed");
                }
                warn!("Skipping unreadable entry: {}", e);
            }
        }
    }
    Ok(files)
}

fn discover_by_glob(root: &Path, pattern: &str, fail_fast: bool) -> Result<Vec<PathBuf>> {
    let full_pattern = root.join(pattern);
    let full_pattern = full_pattern
        .to_str()
        .with_context(|| format!("Pattern path is not valid UTF-8: {}", full_pattern.display()))?;
    debug!("Starting discovery with pattern: {}", full_pattern);

    let mut files = Vec::new();
    for result in glob::glob(full_pattern).context("Failed to create glob pattern")? {
        match result {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => {
                if fail_fast {
                    return Err(e).context("Glob iteration failed");
                }
                warn!("Glob iteration error: {}", e);
            }
        }
    }
    Ok(files)
}

struct Processed {
    chars: u64,
    sentences: u64,
    words: u64,
    report_path: PathBuf,
}

async fn process_one(path: &Path, preset: &str, reader: &ReaderConfig) -> Result<Processed> {
    let text = read_manuscript(path, reader).await?;
    let preset = preset.to_string();
    let (report, chars, sentences, words) = tokio::task::spawn_blocking(move || {
        let report = export_full_report(&text, &preset)?;
        let chars = text.chars().count() as u64;
        let sentences = split_sentences(&text).len() as u64;
        let words = whitespace_words(&text).count() as u64;
        Ok::<_, crate::error::PlushError>((report, chars, sentences, words))
    })
    .await
    .context("Report worker failed")??;

    let report_path = export_report(path, FULL_REPORT_KIND, &report).await?;
    Ok(Processed { chars, sentences, words, report_path })
}

/// Read, analyze and write the full report for a single manuscript
pub async fn process_file(path: PathBuf, preset: &str, reader: &ReaderConfig) -> FileStats {
    let start_time = Instant::now();
    let result = process_one(&path, preset, reader).await;
    let processing_time_ms = start_time.elapsed().as_millis() as u64;

    match result {
        Ok(processed) => {
            debug!("Processed {} in {}ms", path.display(), processing_time_ms);
            FileStats {
                path: path.display().to_string(),
                chars_processed: processed.chars,
                sentences_detected: processed.sentences,
                words: processed.words,
                processing_time_ms,
                status: "success".to_string(),
                report_path: Some(processed.report_path.display().to_string()),
                error: None,
            }
        }
        Err(e) => {
            warn!("Failed to process {}: {:#}", path.display(), e);
            FileStats {
                path: path.display().to_string(),
                chars_processed: 0,
                sentences_detected: 0,
                words: 0,
                processing_time_ms,
                status: "failed".to_string(),
                report_path: None,
                error: Some(format!("{e:#}")),
            }
        }
    }
}

fn progress_bar(len: usize, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    match ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} {msg}") {
        Ok(style) => bar.set_style(style),
        Err(e) => debug!("Falling back to default progress style: {}", e),
    }
    bar
}

/// Produce full reports for `files`, at most `config.jobs` at a time
pub async fn process_batch(files: &[PathBuf], config: &BatchConfig) -> Result<RunStats> {
    // Unknown presets fail the whole run before any file is touched
    let preset = StylePreset::lookup(&config.preset)?;
    let start_time = Instant::now();
    let jobs = config.jobs.max(1);
    info!("Processing {} manuscripts with preset {} ({} jobs)", files.len(), preset.name, jobs);

    let bar = progress_bar(files.len(), config.show_progress);
    let mut results = stream::iter(files.iter().cloned())
        .map(|path| process_file(path, preset.name, &config.reader))
        .buffer_unordered(jobs);

    let mut file_stats = Vec::with_capacity(files.len());
    while let Some(stats) = results.next().await {
        bar.inc(1);
        if config.fail_fast {
            if let Some(error) = &stats.error {
                bar.abandon_with_message("failed");
                anyhow::bail!("Processing {} failed: {}", stats.path, error);
            }
        }
        file_stats.push(stats);
    }
    bar.finish_with_message("done");

    file_stats.sort_by(|a, b| a.path.cmp(&b.path));
    let succeeded = || file_stats.iter().filter(|stats| stats.succeeded());
    let run_stats = RunStats {
        preset: preset.name.to_string(),
        files_discovered: files.len() as u64,
        files_processed: succeeded().count() as u64,
        files_failed: file_stats.iter().filter(|stats| !stats.succeeded()).count() as u64,
        total_chars: succeeded().map(|stats| stats.chars_processed).sum(),
        total_sentences: succeeded().map(|stats| stats.sentences_detected).sum(),
        total_words: succeeded().map(|stats| stats.words).sum(),
        run_time_ms: start_time.elapsed().as_millis() as u64,
        files: file_stats,
    };

    info!(
        "Batch complete: {} processed, {} failed in {}ms",
        run_stats.files_processed, run_stats.files_failed, run_stats.run_time_ms
    );
    Ok(run_stats)
}

/// Write run statistics as pretty-printed JSON
pub async fn write_run_stats(path: impl AsRef<Path>, stats: &RunStats) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(stats).context("Failed to serialize run stats")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write stats to {}", path.display()))?;
    info!("Run stats written to {}", path.display());
    Ok(())
}
