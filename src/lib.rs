pub mod batch;
pub mod model;

use crate::batch::{render_text, validate_all, write_json};
use crate::model::SetsFile;
use anyhow::Context;
use pokemon_validator_core::dex::StaticDex;
use pokemon_validator_core::format::Format;
use pokemon_validator_core::parse_showdown_team;
use pokemon_validator_core::report::ValidationReport;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum SetsSource {
    Json(PathBuf),
    Showdown(PathBuf),
}

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub source: SetsSource,
    pub format: Option<String>,
    pub output_path: Option<PathBuf>,
}

pub fn load_sets(path: &Path) -> anyhow::Result<SetsFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sets file at {}", path.display()))?;
    let parsed: SetsFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    Ok(parsed)
}

pub fn load_showdown(path: &Path) -> anyhow::Result<SetsFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read team export at {}", path.display()))?;
    let sets = parse_showdown_team(&raw)
        .with_context(|| format!("Failed to parse team export {}", path.display()))?;
    Ok(SetsFile::from_sets(sets))
}

/// `--format` wins over the format named in the sets file.
pub fn resolve_format(cli_format: Option<&str>, file: &SetsFile) -> anyhow::Result<Format> {
    let id = cli_format
        .or(file.format.as_deref())
        .ok_or_else(|| anyhow::anyhow!("No format given; pass --format (e.g. --format gen7ou)"))?;
    let format = id
        .parse::<Format>()
        .with_context(|| format!("Invalid format id '{id}'"))?;
    Ok(format)
}

/// Validates the requested sets and returns the report.
pub fn run(opts: &CliOptions) -> anyhow::Result<ValidationReport> {
    let file = match &opts.source {
        SetsSource::Json(path) => load_sets(path)?,
        SetsSource::Showdown(path) => load_showdown(path)?,
    };
    if file.sets.is_empty() {
        anyhow::bail!("No sets to validate");
    }
    let format = resolve_format(opts.format.as_deref(), &file)?;
    let report = validate_all(&StaticDex, &file.sets, &format);

    match &opts.output_path {
        Some(path) => {
            write_json(&report, path)?;
            println!(
                "Wrote report for {} sets ({} problems) to {}",
                report.sets().len(),
                report.problem_count(),
                path.display()
            );
        }
        None => print!("{}", render_text(&report)),
    }
    Ok(report)
}
