use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, Level};

use plush::analysis::{
    analyze, dialogue::speaker_tally, dialogue_by_character, export_full_report, extract_dialogue,
    find_cliches, matched_cliches, normalize, passive::detect_passive, sentence_suggestions, suggest,
    StyleMetrics,
};
use plush::batch::{discover_manuscripts, process_batch, write_run_stats, BatchConfig, DiscoveryConfig};
use plush::export::write_report;
use plush::lexicon::{StylePreset, NONE_PRESET, STYLE_PRESETS};
use plush::names::{generate_names_default, Gender, Rarity};
use plush::reader::{read_manuscript, read_stdin, ReaderConfig};
use plush::templates::{template, template_names};

#[derive(Parser, Debug)]
#[command(name = "plush")]
#[command(about = "Writer toolkit: manuscript cleanup, style metrics, dialogue extraction and cliché detection")]
#[command(version)]
struct Args {
    /// Debug-level logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Use memory-mapped I/O instead of async reads
    #[arg(long, global = true)]
    use_mmap: bool,

    #[command(subcommand)]
    command: Command,
}

/// Input and output shared by single-document commands
#[derive(ClapArgs, Debug)]
struct DocumentArgs {
    /// Manuscript file; stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit structured JSON where the command supports it
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize quotes, dashes and whitespace
    Clean(DocumentArgs),
    /// Style metrics report
    Analyze {
        #[command(flatten)]
        doc: DocumentArgs,
        #[arg(long, default_value = NONE_PRESET)]
        preset: String,
    },
    /// Per-sentence revision suggestions
    Suggest(DocumentArgs),
    /// Sentences with a passive-voice cue
    Passive(DocumentArgs),
    /// Every quoted span, one per line
    Dialogue(DocumentArgs),
    /// Attributed dialogue counts per character
    Speakers(DocumentArgs),
    /// Clichés present in the text
    Cliches(DocumentArgs),
    /// Timestamped report combining every section
    Report {
        #[command(flatten)]
        doc: DocumentArgs,
        #[arg(long, default_value = NONE_PRESET)]
        preset: String,
    },
    /// Suggest character names
    Names {
        #[arg(long, value_enum, default_value_t = Gender::Any)]
        gender: Gender,
        #[arg(long, value_enum, default_value_t = Rarity::Common)]
        rarity: Rarity,
        #[arg(long, default_value_t = 5)]
        count: usize,
        #[arg(long)]
        json: bool,
    },
    /// List templates, or print one by name
    Templates { name: Option<String> },
    /// List style presets
    Presets,
    /// Write full reports for every manuscript under a directory
    Batch {
        /// Root directory to scan
        root_dir: PathBuf,
        #[arg(long, default_value = NONE_PRESET)]
        preset: String,
        /// Glob pattern relative to the root (default: all .txt/.text/.md files)
        #[arg(long)]
        pattern: Option<String>,
        /// Files processed concurrently (default: number of CPUs)
        #[arg(long)]
        jobs: Option<usize>,
        /// Abort on first error
        #[arg(long)]
        fail_fast: bool,
        /// Suppress console progress bars
        #[arg(long)]
        no_progress: bool,
        /// Stats output file path
        #[arg(long, default_value = "run_stats.json")]
        stats_out: PathBuf,
    },
}

#[derive(Serialize)]
struct SpeakerCount<'a> {
    name: &'a str,
    count: usize,
}

async fn load(input: Option<&Path>, use_mmap: bool) -> Result<String> {
    match input {
        None => read_stdin().await,
        Some(path) if path == Path::new("-") => read_stdin().await,
        Some(path) => read_manuscript(path, &ReaderConfig { use_mmap, ..Default::default() }).await,
    }
}

async fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            write_report(path, content).await?;
            info!("Wrote {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Run a single-document command, choosing JSON or text rendering
async fn run_document<F, J>(doc: &DocumentArgs, use_mmap: bool, text_fn: F, json_fn: Option<J>) -> Result<()>
where
    F: FnOnce(&str) -> Result<String>,
    J: FnOnce(&str) -> Result<String>,
{
    let text = load(doc.input.as_deref(), use_mmap).await?;
    let rendered = match json_fn {
        Some(json_fn) if doc.json => json_fn(&text)?,
        _ => text_fn(&text)?,
    };
    emit(doc.output.as_deref(), &rendered).await
}

type NoJson = fn(&str) -> Result<String>;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: JSON logs go to stderr so report text on stdout stays clean
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");
    let use_mmap = args.use_mmap;

    match args.command {
        Command::Clean(doc) => {
            run_document(&doc, use_mmap, |text| Ok(normalize(text)), None::<NoJson>).await?;
        }
        Command::Analyze { doc, preset } => {
            run_document(
                &doc,
                use_mmap,
                |text| Ok(analyze(text, &preset)?),
                Some(|text: &str| to_json(&StyleMetrics::compute(text, &preset)?)),
            )
            .await?;
        }
        Command::Suggest(doc) => {
            run_document(
                &doc,
                use_mmap,
                |text| Ok(suggest(text)),
                Some(|text: &str| to_json(&sentence_suggestions(text))),
            )
            .await?;
        }
        Command::Passive(doc) => {
            let render = |text: &str| {
                Ok(detect_passive(text)
                    .iter()
                    .map(|sentence| sentence.text)
                    .collect::<Vec<_>>()
                    .join("\n"))
            };
            let render_json = |text: &str| {
                to_json(&detect_passive(text).iter().map(|sentence| sentence.text).collect::<Vec<_>>())
            };
            run_document(&doc, use_mmap, render, Some(render_json)).await?;
        }
        Command::Dialogue(doc) => {
            run_document(
                &doc,
                use_mmap,
                |text| Ok(extract_dialogue(text)),
                Some(|text: &str| to_json(&plush::analysis::quoted_spans(text))),
            )
            .await?;
        }
        Command::Speakers(doc) => {
            let render_json = |text: &str| {
                let tally: Vec<_> = speaker_tally(text)
                    .into_iter()
                    .map(|(name, count)| SpeakerCount { name, count })
                    .collect();
                to_json(&tally)
            };
            run_document(&doc, use_mmap, |text| Ok(dialogue_by_character(text)), Some(render_json)).await?;
        }
        Command::Cliches(doc) => {
            run_document(
                &doc,
                use_mmap,
                |text| Ok(find_cliches(text)),
                Some(|text: &str| to_json(&matched_cliches(text))),
            )
            .await?;
        }
        Command::Report { doc, preset } => {
            run_document(&doc, use_mmap, |text| Ok(export_full_report(text, &preset)?), None::<NoJson>).await?;
        }
        Command::Names { gender, rarity, count, json } => {
            let names = generate_names_default(gender, rarity, count);
            let rendered = if json { to_json(&names)? } else { names.join("\n") };
            println!("{rendered}");
        }
        Command::Templates { name } => match name {
            Some(name) => print!("{}", template(&name)?.body),
            None => {
                for name in template_names() {
                    println!("{name}");
                }
            }
        },
        Command::Presets => {
            for preset in STYLE_PRESETS {
                println!("{}: {}", preset.name, preset.note);
            }
        }
        Command::Batch { root_dir, preset, pattern, jobs, fail_fast, no_progress, stats_out } => {
            // WHY: validate preset and root early to fail fast with a clear error
            StylePreset::lookup(&preset)?;
            let discovery = DiscoveryConfig { pattern, fail_fast };
            let files = discover_manuscripts(&root_dir, &discovery)?;

            let defaults = BatchConfig::default();
            let config = BatchConfig {
                preset,
                jobs: jobs.unwrap_or(defaults.jobs),
                fail_fast,
                show_progress: !no_progress,
                reader: ReaderConfig { use_mmap, ..Default::default() },
            };
            let stats = process_batch(&files, &config).await?;
            write_run_stats(&stats_out, &stats).await?;

            println!("plush v{} - batch complete", env!("CARGO_PKG_VERSION"));
            println!("  Manuscripts found: {}", stats.files_discovered);
            println!("  Reports written: {}", stats.files_processed);
            if stats.files_failed > 0 {
                println!("  Failed: {}", stats.files_failed);
            }
            println!("  Stats: {}", stats_out.display());
        }
    }

    Ok(())
}
