//! Process command - extract and normalize a single page-dump document.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use rust_decimal::Decimal;
use tracing::{debug, info};

use karod_core::models::config::KarodConfig;
use karod_core::models::document::DocumentExtract;
use karod_core::geometry::StaticPageSet;
use karod_core::pipeline::process_document;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input page-dump JSON file
    #[arg(required = true)]
    input: PathBuf,

    /// Output directory (default: extracted/<input-slug> next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// What got written for one document, for summaries and batch tallies.
pub struct FileReport {
    pub entity_name: Option<String>,
    pub period: Option<String>,
    pub unit: String,
    pub pages: usize,
    pub tables: usize,
    pub converted: bool,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let output_dir = match args.output {
        Some(dir) => dir,
        None => default_output_dir(&args.input),
    };

    info!("Processing file: {}", args.input.display());

    let report = process_file(&args.input, &output_dir, &config)?;

    println!(
        "{} {} — {} pages, {} tables, format: {}",
        style("✓").green(),
        args.input.display(),
        report.pages,
        report.tables,
        report.unit,
    );
    if !report.converted {
        println!(
            "{} Could not detect number format; converted/ not written",
            style("!").yellow()
        );
    }
    println!("Output in: {}/", output_dir.display());

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn load_config(config_path: Option<&str>) -> anyhow::Result<KarodConfig> {
    match config_path {
        Some(path) => KarodConfig::from_file(Path::new(path))
            .with_context(|| format!("failed to load config from {}", path)),
        None => Ok(KarodConfig::default()),
    }
}

/// Run the pipeline over one page-dump file and write all artifacts.
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    config: &KarodConfig,
) -> anyhow::Result<FileReport> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let page_set = StaticPageSet::from_json(&json)
        .with_context(|| format!("invalid page dump: {}", input.display()))?;

    let result = process_document(&page_set.pages, config)?;

    write_artifacts(input, output_dir, &page_set, &result)?;

    Ok(FileReport {
        entity_name: result.metadata.entity_name.clone(),
        period: result.metadata.period.clone(),
        unit: result.unit.unit.name().to_string(),
        pages: result.metadata.total_pages,
        tables: result.metadata.total_tables,
        converted: result.unit.divisor.is_some(),
    })
}

fn write_artifacts(
    input: &Path,
    output_dir: &Path,
    page_set: &StaticPageSet,
    result: &DocumentExtract,
) -> anyhow::Result<()> {
    fs::create_dir_all(output_dir)?;

    // Full text per page, as a fallback for manual reading.
    let text_dir = output_dir.join("text");
    fs::create_dir_all(&text_dir)?;
    for (i, page) in page_set.pages.iter().enumerate() {
        fs::write(text_dir.join(format!("page-{:03}.txt", i + 1)), &page.text)?;
    }

    // Raw CSVs with original numbers as-is.
    let raw_dir = output_dir.join("raw");
    fs::create_dir_all(&raw_dir)?;
    for table in &result.tables {
        let name = format!("page-{:03}-table-{}.csv", table.page, table.index + 1);
        write_csv(&raw_dir.join(name), &table.rows)?;
    }

    // Converted CSVs, only when a unit was detected.
    if result.unit.divisor.is_some() {
        let converted_dir = output_dir.join("converted");
        fs::create_dir_all(&converted_dir)?;
        for table in &result.normalized_tables {
            let name = format!("page-{:03}-table-{}.csv", table.page, table.index + 1);
            write_csv(&converted_dir.join(name), &table.rows)?;
        }
    }

    // metadata.json
    let metadata_json = serde_json::to_string_pretty(&result.metadata)?;
    fs::write(output_dir.join("metadata.json"), metadata_json)?;

    // summary.txt
    fs::write(
        output_dir.join("summary.txt"),
        build_summary(input, result),
    )?;

    Ok(())
}

fn write_csv(path: &Path, rows: &[Vec<String>]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn build_summary(input: &Path, result: &DocumentExtract) -> String {
    let meta = &result.metadata;
    let mut lines = vec![
        "Extraction Summary".to_string(),
        "==================".to_string(),
        String::new(),
        format!(
            "Source: {}",
            input.file_name().and_then(|n| n.to_str()).unwrap_or("?")
        ),
        format!(
            "Entity: {}",
            meta.entity_name.as_deref().unwrap_or("(not detected)")
        ),
        format!(
            "Period: {}",
            meta.period.as_deref().unwrap_or("(not detected)")
        ),
        String::new(),
        match meta.divisor {
            Some(d) if d != Decimal::ONE => {
                format!("Format: {} (÷{} for crores)", meta.unit.name(), d)
            }
            Some(_) => format!("Format: {} (already canonical)", meta.unit.name()),
            None => format!("Format: {} (values not converted)", meta.unit.name()),
        },
        format!("Pages: {}", meta.total_pages),
        format!("Tables extracted: {}", meta.total_tables),
        String::new(),
        "Table inventory:".to_string(),
    ];

    for table in &result.tables {
        let header_preview = table
            .rows
            .first()
            .map(|header| {
                header
                    .iter()
                    .take(4)
                    .map(|c| c.chars().take(30).collect::<String>())
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .unwrap_or_default();
        lines.push(format!(
            "  page {}, table {}: {} rows × {} cols — {}",
            table.page,
            table.index + 1,
            table.row_count(),
            table.col_count(),
            header_preview
        ));
    }

    for warning in &result.warnings {
        lines.push(String::new());
        lines.push(format!("Caveat: {}", warning));
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Derive the default output directory from the input file name.
pub fn default_output_dir(input: &Path) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    parent.join("extracted").join(slugify(input))
}

/// Turn a file name into a clean directory slug.
fn slugify(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    let mut slug = String::with_capacity(stem.len());
    let mut last_dash = true;
    for c in stem.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}
