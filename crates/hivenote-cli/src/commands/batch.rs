//! Batch processing command for multiple OCR line dumps.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use hivenote_core::models::config::OutputFormat;
use hivenote_core::{scan_outcome, InspectionParser, RuleBasedParser, ScanOutcome};

use super::config::load_config;
use super::parse::{render, FormatArg};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern of .txt files (e.g. "notes/*.txt")
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: FormatArg,

    /// Write per-file results as the inspection form pre-fill
    #[arg(long)]
    prefill: bool,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue processing on errors
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    outcome: Option<ScanOutcome>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = RuleBasedParser::from_config(&config.parser);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = parse_file(&path, &parser);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(outcome) => results.push(FileResult {
                path,
                outcome: Some(outcome),
                error: None,
                processing_time_ms,
            }),
            Err(e) if args.continue_on_error => {
                warn!("Failed to process {}: {}", path.display(), e);
                results.push(FileResult {
                    path,
                    outcome: None,
                    error: Some(e.to_string()),
                    processing_time_ms,
                });
            }
            Err(e) => {
                pb.abandon();
                error!("Failed to process {}: {}", path.display(), e);
                anyhow::bail!("Processing failed for {}: {}", path.display(), e);
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    if let Some(output_dir) = &args.output_dir {
        let format = OutputFormat::from(args.format);
        for result in &results {
            if let Some(outcome) = &result.outcome {
                let output_path = output_dir.join(output_name(&result.path, format));
                fs::write(&output_path, render(outcome, format, args.prefill, &config)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let successful = results.len() - failed.len();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn parse_file(path: &Path, parser: &RuleBasedParser) -> anyhow::Result<ScanOutcome> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)
        .map_err(|_| anyhow::anyhow!("File is not valid UTF-8 text"))?;

    Ok(scan_outcome(parser.parse_text(&text)))
}

fn output_name(path: &Path, format: OutputFormat) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("inspection");

    let extension = match format {
        OutputFormat::Json => "json",
        OutputFormat::Csv => "csv",
        // Never clobber the input dump when writing next to it
        OutputFormat::Text => "summary.txt",
    };

    format!("{}.{}", stem, extension)
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "fields_found",
        "experience_template",
        "inspected_at",
        "has_notes",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let time_ms = result.processing_time_ms.to_string();

        match &result.outcome {
            Some(outcome) => {
                let template = serde_json::to_value(outcome.prefill.experience_template)?;
                wtr.write_record([
                    filename,
                    "success",
                    &outcome.fields_found.to_string(),
                    template.as_str().unwrap_or_default(),
                    &outcome
                        .prefill
                        .inspected_at
                        .map(|d| d.to_string())
                        .unwrap_or_default(),
                    if outcome.parsed.notes.is_some() { "yes" } else { "no" },
                    &time_ms,
                    "",
                ])?;
            }
            None => {
                wtr.write_record([
                    filename,
                    "error",
                    "",
                    "",
                    "",
                    "",
                    &time_ms,
                    result.error.as_deref().unwrap_or(""),
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
