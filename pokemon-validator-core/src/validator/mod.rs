//! Set validation against one format.
//!
//! [`validate`] runs every check in a fixed order and collects human-readable
//! problems. Only an unresolvable format or species stops early.

pub mod baton_pass;
pub mod special;

use std::collections::HashSet;

use tracing::debug;

use crate::data::{MoveData, SpeciesData, Tier};
use crate::dex::{Dex, StaticDex};
use crate::format::{Clause, Format, RuleSet};
use crate::set::PokemonSet;
use crate::stats::{dv_to_iv, hp_dv_from_dvs, iv_to_dv, shiny_from_dvs, MAX_EV_TOTAL, MAX_IV};

pub use baton_pass::{passes_speed_and_stat, BoostSource};
pub use special::{has_sleep_trap_combo, is_legendary};

static EVASION_MOVES: phf::Set<&'static str> = phf::phf_set! {
    "minimize",
    "doubleteam",
};

static EVASION_ABILITIES: phf::Set<&'static str> = phf::phf_set! {
    "sandveil",
    "snowcloak",
};

const GIRATINA_NUM: u16 = 487;

/// Validator bound to one data provider.
#[derive(Clone, Copy)]
pub struct Validator<'a> {
    dex: &'a dyn Dex,
}

impl<'a> Validator<'a> {
    pub fn new(dex: &'a dyn Dex) -> Self {
        Self { dex }
    }

    pub fn validate(&self, set: &PokemonSet, format: &Format) -> Vec<String> {
        validate(self.dex, set, format)
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self { dex: &StaticDex }
    }
}

/// Returns every problem found with `set` under `format`; empty means legal.
pub fn validate(dex: &dyn Dex, set: &PokemonSet, format: &Format) -> Vec<String> {
    let Some(rules) = dex.rules(format) else {
        debug!(%format, "format did not resolve");
        return vec![format!("{format} is not a supported format.")];
    };
    let Some(species) = dex.species(&set.species, format.gen) else {
        debug!(%format, species = %set.species, "species did not resolve");
        return vec![format!(
            "{} is not a valid species in Gen {}.",
            set.species, format.gen
        )];
    };

    let check = SetCheck {
        dex,
        set,
        rules: &rules,
        species,
        gen: rules.gen,
        name: set.display_name(),
    };
    let mut problems = Vec::new();
    check.tier(&mut problems);
    check.level(&mut problems);
    let moves = check.moves(&mut problems);
    check.move_combinations(&moves, &mut problems);
    check.gender(&mut problems);
    check.evs(&mut problems);
    check.ivs(&mut problems);
    check.nature(&mut problems);
    check.ability(&mut problems);
    check.item(&mut problems);

    debug!(
        ruleset = %rules.name,
        species = species.name,
        problems = problems.len(),
        "validated set"
    );
    problems
}

/// Treats blank strings from imported sets as absent.
fn specified(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

struct SetCheck<'a> {
    dex: &'a dyn Dex,
    set: &'a PokemonSet,
    rules: &'a RuleSet,
    species: &'a SpeciesData,
    gen: u8,
    name: &'a str,
}

impl<'a> SetCheck<'a> {
    fn tier(&self, problems: &mut Vec<String>) {
        let species = self.species;
        match self.rules.tier(species) {
            Tier::Illegal => problems.push(format!(
                "{} is illegal (it comes from Gen {}).",
                species.name, species.gen
            )),
            Tier::Unreleased => problems.push(format!(
                "{} is unreleased in Gen {} (it comes from Gen {}).",
                species.name, self.gen, species.gen
            )),
            Tier::Normal => {}
        }
    }

    fn level(&self, problems: &mut Vec<String>) {
        let level = self.set.level;
        if level == 0 {
            problems.push(format!("{} must be at least level 1.", self.name));
        }
        if self.rules.has(Clause::LittleCup) {
            if self.has_prevo() || !self.has_evo() {
                problems.push(format!(
                    "{} is not the first stage of an evolution line, which Little Cup requires.",
                    self.species.name
                ));
            }
            if level > 5 {
                problems.push(format!("{} must be level 5 or lower in Little Cup.", self.name));
            }
        } else if level > 100 {
            problems.push(format!("{} must be level 100 or lower.", self.name));
        }
    }

    // Evolution links are only meaningful if the linked species exists in this generation.
    fn has_prevo(&self) -> bool {
        self.species
            .prevo
            .is_some_and(|prevo| self.dex.species(prevo, self.gen).is_some())
    }

    fn has_evo(&self) -> bool {
        self.species
            .evos
            .iter()
            .any(|evo| self.dex.species(evo, self.gen).is_some())
    }

    /// Checks count, existence, duplicates and per-move clauses; returns the
    /// moves that resolved.
    fn moves(&self, problems: &mut Vec<String>) -> Vec<&'a MoveData> {
        let set = self.set;
        if set.moves.is_empty() {
            problems.push(format!("{} must have at least one move.", self.name));
        } else if set.moves.len() > 4 {
            problems.push(format!("{} has more than four moves.", self.name));
        }

        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(set.moves.len());
        for move_name in &set.moves {
            let Some(move_data) = self.dex.move_data(move_name, self.gen) else {
                problems.push(format!(
                    "{} is not a valid move in Gen {}.",
                    move_name, self.gen
                ));
                continue;
            };
            // Duplicates are tracked by move id only, so a move a species can get
            // from two sources (Gen 2 Marowak's Swords Dance) is not told apart.
            if !seen.insert(move_data.id) {
                problems.push(format!(
                    "{} has {} more than once.",
                    self.name, move_data.name
                ));
            }
            if let Some(problem) = self.move_clause_problem(move_data) {
                problems.push(problem);
            }
            resolved.push(move_data);
        }
        resolved
    }

    fn move_clause_problem(&self, move_data: &MoveData) -> Option<String> {
        let banned_by = if self.rules.has(Clause::Ohko) && move_data.ohko {
            Clause::Ohko
        } else if self.rules.has(Clause::EvasionMoves) && EVASION_MOVES.contains(move_data.id) {
            Clause::EvasionMoves
        } else if self.rules.has(Clause::Swagger) && move_data.id == "swagger" {
            Clause::Swagger
        } else {
            return None;
        };
        Some(format!("{} is banned by {}.", move_data.name, banned_by))
    }

    fn move_combinations(&self, moves: &[&MoveData], problems: &mut Vec<String>) {
        if self.gen == 2 && has_sleep_trap_combo(moves.iter().map(|move_data| move_data.id)) {
            problems.push(format!(
                "{} can't combine a sleep-inducing move with Mean Look or Spider Web in Gen 2.",
                self.name
            ));
        }

        let has_baton_pass = moves.iter().any(|move_data| move_data.id == "batonpass");
        if self.rules.has(Clause::BatonPass) && has_baton_pass {
            let item = specified(&self.set.item).and_then(|item| self.dex.item(item, self.gen));
            if passes_speed_and_stat(moves, specified(&self.set.ability), item) {
                problems.push(format!(
                    "{} can Baton Pass both Speed and a different stat, which is banned by {}.",
                    self.name,
                    Clause::BatonPass
                ));
            }
        }
    }

    fn gender(&self, problems: &mut Vec<String>) {
        let Some(declared) = self.set.gender else {
            return;
        };
        if let Some(fixed) = self.species.gender {
            if declared != fixed {
                problems.push(format!(
                    "{} must be {}, but its gender is set to {}.",
                    self.name, fixed, declared
                ));
            }
        } else if self.gen == 2 {
            let atk_dv = iv_to_dv(self.set.ivs.atk);
            let expected = special::gen2_gender_from_atk_dv(self.species.female_ratio, atk_dv);
            if declared != expected {
                problems.push(format!(
                    "{} must be {} because of its Attack DV of {}, but its gender is set to {}.",
                    self.name, expected, atk_dv, declared
                ));
            }
        }
    }

    fn evs(&self, problems: &mut Vec<String>) {
        let evs = &self.set.evs;
        if self.gen < 3 {
            if evs.spa != evs.spd {
                problems.push(format!(
                    "{}'s Special Attack and Special Defense EVs must be equal in Gen {}.",
                    self.name, self.gen
                ));
            }
        } else if evs.total() > MAX_EV_TOTAL {
            problems.push(format!(
                "{} has {} EVs, more than the maximum of {}.",
                self.name,
                evs.total(),
                MAX_EV_TOTAL
            ));
        }
    }

    fn ivs(&self, problems: &mut Vec<String>) {
        let ivs = &self.set.ivs;
        for (stat, iv) in ivs.iter() {
            if iv > MAX_IV {
                problems.push(format!(
                    "{}'s {} IV must be {} or lower.",
                    self.name,
                    stat.short_name(),
                    MAX_IV
                ));
            }
        }

        if self.gen >= 6 && is_legendary(self.species, self.set.shiny) {
            let perfect = ivs.iter().filter(|&(_, iv)| iv >= MAX_IV).count();
            if perfect < 3 {
                problems.push(format!(
                    "{} is a legendary and must have at least three perfect IVs in Gen {}.",
                    self.name, self.gen
                ));
            }
        }

        if self.gen >= 3 {
            return;
        }
        if ivs.spa != ivs.spd {
            problems.push(format!(
                "{}'s Special Attack and Special Defense IVs must be equal in Gen {}.",
                self.name, self.gen
            ));
        }
        if self.gen == 2 {
            let atk = iv_to_dv(ivs.atk);
            let def = iv_to_dv(ivs.def);
            let spe = iv_to_dv(ivs.spe);
            let spc = iv_to_dv(ivs.spa);
            let expected_hp = hp_dv_from_dvs(atk, def, spe, spc);
            let declared_hp = iv_to_dv(ivs.hp);
            if declared_hp != expected_hp {
                problems.push(format!(
                    "{}'s HP DV must be {} (an HP IV of {}) to match its other DVs, not {}.",
                    self.name,
                    expected_hp,
                    dv_to_iv(expected_hp),
                    declared_hp
                ));
            }
            let shiny = shiny_from_dvs(atk, def, spe, spc);
            if shiny != self.set.shiny {
                let problem = if shiny {
                    format!("{} must be shiny because of its DVs.", self.name)
                } else {
                    format!("{} can't be shiny with its DVs.", self.name)
                };
                problems.push(problem);
            }
        }
    }

    fn nature(&self, problems: &mut Vec<String>) {
        let nature = specified(&self.set.nature);
        if self.gen < 3 {
            if nature.is_some() {
                problems.push(format!("Natures do not exist in Gen {}.", self.gen));
            }
            return;
        }
        match nature {
            None => problems.push(format!("{} needs a nature in Gen {}.", self.name, self.gen)),
            Some(nature) if self.dex.nature(nature).is_none() => {
                problems.push(format!("{nature} is not a valid nature."))
            }
            Some(_) => {}
        }
    }

    fn ability(&self, problems: &mut Vec<String>) {
        let ability_name = specified(&self.set.ability);
        if self.gen < 3 {
            if ability_name.is_some() {
                problems.push(format!("Abilities do not exist in Gen {}.", self.gen));
            }
            return;
        }
        let Some(ability_name) = ability_name else {
            problems.push(format!("{} needs an ability in Gen {}.", self.name, self.gen));
            return;
        };
        let Some(ability) = self.dex.ability(ability_name, self.gen) else {
            problems.push(format!(
                "{} is not a valid ability in Gen {}.",
                ability_name, self.gen
            ));
            return;
        };
        if self.rules.has(Clause::EvasionAbilities) && EVASION_ABILITIES.contains(ability.id) {
            problems.push(format!(
                "{} is banned by {}.",
                ability.name,
                Clause::EvasionAbilities
            ));
        }
        if self.rules.has(Clause::Moody) && ability.id == "moody" {
            problems.push(format!("{} is banned by {}.", ability.name, Clause::Moody));
        }
    }

    fn item(&self, problems: &mut Vec<String>) {
        let Some(item_name) = specified(&self.set.item) else {
            return;
        };
        if self.gen < 2 {
            problems.push(format!("Items do not exist in Gen {}.", self.gen));
            return;
        }
        match self.dex.item(item_name, self.gen) {
            None => problems.push(format!(
                "{} is not a valid item in Gen {}.",
                item_name, self.gen
            )),
            Some(item) if item.id == "griseousorb" && self.species.num != GIRATINA_NUM => {
                problems.push(format!("{} can only be held by Giratina.", item.name))
            }
            Some(_) => {}
        }
    }
}
