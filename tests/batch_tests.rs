use pokemon_set_validator::batch::{render_text, validate_all};
use pokemon_set_validator::model::SetsFile;
use pokemon_set_validator::{load_sets, load_showdown, resolve_format, run, CliOptions, SetsSource};
use pokemon_validator_core::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pokemon-set-validator-{}-{name}", std::process::id()))
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = temp_path(name);
    std::fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn batch_preserves_input_order() {
    let mut rng = SmallRng::seed_from_u64(99);
    let sets: Vec<PokemonSet> = (0..200)
        .map(|idx| {
            let level = if rng.gen_bool(0.3) { 0 } else { 100 };
            PokemonSet::new("Snorlax")
                .with_name(format!("Lax{idx}"))
                .with_level(level)
                .with_moves(["Body Slam"])
        })
        .collect();
    let format: Format = "gen1ou".parse().expect("valid format");
    let report = validate_all(&StaticDex, &sets, &format);

    assert_eq!(report.sets().len(), sets.len());
    for (set, set_report) in sets.iter().zip(report.sets()) {
        assert_eq!(set_report.name, set.display_name());
        assert_eq!(set_report.is_legal(), set.level != 0);
    }
}

#[test]
fn cli_format_overrides_file() -> anyhow::Result<()> {
    let mut file = SetsFile::from_sets(vec![PokemonSet::new("Mew")]);
    file.format = Some("gen1ou".to_string());
    assert_eq!(resolve_format(None, &file)?, Format::new(1, "ou"));
    assert_eq!(resolve_format(Some("gen7ubers"), &file)?, Format::new(7, "ubers"));

    file.format = None;
    assert!(resolve_format(None, &file).is_err());
    assert!(resolve_format(Some("ou"), &file).is_err());
    Ok(())
}

#[test]
fn loads_json_sets_file() -> anyhow::Result<()> {
    let path = temp_file(
        "sets.json",
        r#"{"format": "gen2ou",
            "sets": [{"species": "Nidoran-M", "gender": "F", "moves": ["Tackle"]}]}"#,
    );
    let file = load_sets(&path)?;
    assert_eq!(file.format.as_deref(), Some("gen2ou"));
    assert_eq!(file.sets.len(), 1);

    let report = run(&CliOptions {
        source: SetsSource::Json(path.clone()),
        format: None,
        output_path: None,
    })?;
    assert!(!report.all_legal());
    let text = render_text(&report);
    assert!(text.starts_with("Format: gen2ou\n"), "{text}");
    assert!(text.contains("must be male"));
    std::fs::remove_file(path)?;
    Ok(())
}

#[test]
fn writes_json_report_for_showdown_export() -> anyhow::Result<()> {
    let team = temp_file("team.txt", "Snorlax\n- Body Slam\n- Rest\n");
    let output = temp_path("report.json");
    assert_eq!(load_showdown(&team)?.sets.len(), 1);

    let report = run(&CliOptions {
        source: SetsSource::Showdown(team.clone()),
        format: Some("gen1ou".to_string()),
        output_path: Some(output.clone()),
    })?;
    assert!(report.all_legal());

    let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(written["format"], "gen1ou");
    assert_eq!(written["legal"], true);
    std::fs::remove_file(team)?;
    std::fs::remove_file(output)?;
    Ok(())
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = load_sets(std::path::Path::new("/nonexistent/sets.json")).expect_err("missing file");
    assert!(format!("{err:#}").contains("/nonexistent/sets.json"));
}
