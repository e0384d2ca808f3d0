use pokemon_validator_core::dex::Dex;
use pokemon_validator_core::format::Format;
use pokemon_validator_core::report::{SetReport, ValidationReport};
use pokemon_validator_core::set::PokemonSet;
use pokemon_validator_core::validator::validate;
use rayon::prelude::*;
use tracing::{debug, info};

/// Validates every set on rayon's pool. Reports keep the input order.
pub fn validate_all(dex: &dyn Dex, sets: &[PokemonSet], format: &Format) -> ValidationReport {
    let reports: Vec<SetReport> = sets
        .par_iter()
        .map(|set| {
            let problems = validate(dex, set, format);
            debug!(set = set.display_name(), problems = problems.len(), "checked set");
            SetReport::new(set, problems)
        })
        .collect();

    let mut report = ValidationReport::new(format.to_string());
    for set_report in reports {
        report.push(set_report);
    }
    info!(
        %format,
        sets = sets.len(),
        problems = report.problem_count(),
        "validation finished"
    );
    report
}

pub fn write_json(report: &ValidationReport, path: &std::path::Path) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(&report.to_json())?;
    std::fs::write(path, out)?;
    Ok(())
}

pub fn render_text(report: &ValidationReport) -> String {
    let mut out = format!("Format: {}\n", report.format());
    for set in report.sets() {
        if set.is_legal() {
            out.push_str(&format!("{}: legal\n", set.name));
            continue;
        }
        out.push_str(&format!("{}:\n", set.name));
        for problem in &set.problems {
            out.push_str(&format!("  - {problem}\n"));
        }
    }
    out
}
