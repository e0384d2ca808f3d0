use crate::data::Gender;
use crate::set::PokemonSet;
use crate::stats::{Stat, StatsTable};
use anyhow::{anyhow, bail, Context, Result};

/// Parses a Showdown team export into sets. Entries are separated by lines
/// that are blank once trimmed.
pub fn parse_showdown_team(text: &str) -> Result<Vec<PokemonSet>> {
    let mut team = Vec::new();
    let mut entry = Vec::new();
    for line in text.lines().chain(std::iter::once("")) {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            entry.push(trimmed);
            continue;
        }
        if entry.is_empty() {
            continue;
        }
        let set = parse_entry(&entry)
            .with_context(|| format!("Failed to parse team entry {}", team.len() + 1))?;
        team.push(set);
        entry.clear();
    }
    Ok(team)
}

fn parse_entry(lines: &[&str]) -> Result<PokemonSet> {
    let (header, rest) = lines
        .split_first()
        .ok_or_else(|| anyhow!("Species line is missing"))?;
    let mut set = parse_header(header)?;

    for &line in rest {
        if let Some(value) = line.strip_prefix("Ability:") {
            set.ability = Some(value.trim().to_string());
            continue;
        }
        if let Some(value) = line.strip_prefix("Level:") {
            set.level = value
                .trim()
                .parse()
                .with_context(|| format!("Invalid level '{}'", value.trim()))?;
            continue;
        }
        if let Some(value) = line.strip_prefix("Shiny:") {
            set.shiny = value.trim().eq_ignore_ascii_case("yes");
            continue;
        }
        if let Some(value) = line.strip_prefix("EVs:") {
            parse_stat_line(value.trim(), &mut set.evs).context("Invalid EVs line")?;
            continue;
        }
        if let Some(value) = line.strip_prefix("IVs:") {
            parse_stat_line(value.trim(), &mut set.ivs).context("Invalid IVs line")?;
            continue;
        }
        if let Some(nature) = line.strip_suffix("Nature") {
            set.nature = Some(nature.trim().to_string());
            continue;
        }
        if let Some(move_name) = line.strip_prefix('-') {
            let move_name = move_name.trim();
            if !move_name.is_empty() {
                set.moves.push(move_name.to_string());
            }
            continue;
        }
        // Unknown lines (Happiness, Tera Type, ...) carry nothing the validator reads.
    }

    Ok(set)
}

/// `Nickname (Species) (F) @ Item`; every part but the species is optional.
fn parse_header(line: &str) -> Result<PokemonSet> {
    let (names, item) = match line.split_once('@') {
        Some((names, item)) => (names.trim(), Some(item.trim())),
        None => (line.trim(), None),
    };

    let mut names = names;
    let mut gender = None;
    if let Some((rest, code)) = names.strip_suffix(')').and_then(|rest| rest.rsplit_once('(')) {
        if let Some(parsed) = Gender::from_code(code) {
            names = rest.trim_end();
            gender = Some(parsed);
        }
    }

    let (nickname, species) = match names.strip_suffix(')').and_then(|rest| rest.rsplit_once('(')) {
        Some((nickname, species)) => (Some(nickname.trim()), species.trim()),
        None => (None, names),
    };
    if species.is_empty() {
        bail!("Failed to read species name from '{line}'");
    }

    let mut set = PokemonSet::new(species);
    set.name = nickname.filter(|name| !name.is_empty()).map(str::to_string);
    set.gender = gender;
    set.item = item.filter(|item| !item.is_empty()).map(str::to_string);
    Ok(set)
}

fn parse_stat_line(line: &str, stats: &mut StatsTable) -> Result<()> {
    for part in line.split('/') {
        let trimmed = part.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (value_str, stat_name) = trimmed
            .split_once(char::is_whitespace)
            .ok_or_else(|| anyhow!("Expected '<value> <stat>', got '{trimmed}'"))?;
        let stat = Stat::from_label(stat_name.trim())
            .ok_or_else(|| anyhow!("Unknown stat '{}'", stat_name.trim()))?;
        let value = value_str
            .parse::<u8>()
            .with_context(|| format!("Invalid value '{value_str}' for {}", stat.short_name()))?;
        stats.set(stat, value);
    }
    Ok(())
}
