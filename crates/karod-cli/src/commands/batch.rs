//! Batch command - process many page-dump documents, continuing past
//! per-document failures.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use super::process::{default_output_dir, load_config, process_file, FileReport};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory (one subdirectory per document)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV across all documents
    #[arg(long)]
    summary: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    report: Option<FileReport>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"))
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
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    // One bad input never aborts the batch.
    let mut results = Vec::with_capacity(files.len());
    for file in &files {
        pb.set_message(
            file.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("?")
                .to_string(),
        );

        let output_dir = match &args.output_dir {
            Some(base) => base.join(slug_for(file)),
            None => default_output_dir(file),
        };

        match process_file(file, &output_dir, &config) {
            Ok(report) => results.push(ProcessResult {
                path: file.clone(),
                report: Some(report),
                error: None,
            }),
            Err(e) => {
                error!("failed to process {}: {:#}", file.display(), e);
                results.push(ProcessResult {
                    path: file.clone(),
                    report: None,
                    error: Some(format!("{:#}", e)),
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");

    let succeeded = results.iter().filter(|r| r.error.is_none()).count();
    let failed = results.len() - succeeded;

    println!(
        "{} Processed: {} succeeded, {} failed",
        if failed == 0 {
            style("✓").green()
        } else {
            style("!").yellow()
        },
        succeeded,
        failed
    );
    for result in results.iter().filter(|r| r.error.is_some()) {
        println!(
            "  {} {}: {}",
            style("✗").red(),
            result.path.display(),
            result.error.as_deref().unwrap_or("?")
        );
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("batch-summary.csv");
        write_summary_csv(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    debug!("Batch finished in {:?}", start.elapsed());

    Ok(())
}

fn write_summary_csv(path: &PathBuf, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "file", "status", "entity", "period", "unit", "pages", "tables",
    ])?;
    for result in results {
        match &result.report {
            Some(report) => writer.write_record([
                result.path.display().to_string(),
                "ok".to_string(),
                report.entity_name.clone().unwrap_or_default(),
                report.period.clone().unwrap_or_default(),
                report.unit.clone(),
                report.pages.to_string(),
                report.tables.to_string(),
            ])?,
            None => writer.write_record([
                result.path.display().to_string(),
                format!("error: {}", result.error.as_deref().unwrap_or("?")),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ])?,
        }
    }
    writer.flush()?;
    Ok(())
}

fn slug_for(path: &std::path::Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_lowercase()
        .replace(|c: char| !c.is_ascii_alphanumeric(), "-")
}
