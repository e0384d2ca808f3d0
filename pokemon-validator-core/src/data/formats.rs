use super::to_id;
use crate::format::{Clause, Format, RuleSet, MAX_GEN, MIN_GEN};

#[derive(Clone, Copy, Debug)]
pub struct FormatEntry {
    pub name: &'static str,
    pub clauses: &'static [Clause],
}

const STANDARD: &[Clause] = &[
    Clause::Ohko,
    Clause::EvasionMoves,
    Clause::Swagger,
    Clause::BatonPass,
    Clause::EvasionAbilities,
    Clause::Moody,
];

pub static FORMATS: phf::Map<&'static str, FormatEntry> = phf::phf_map! {
    "ou" => FormatEntry { name: "OU", clauses: STANDARD },
    "uu" => FormatEntry { name: "UU", clauses: STANDARD },
    "ubers" => FormatEntry {
        name: "Ubers",
        clauses: &[Clause::Ohko, Clause::EvasionMoves, Clause::Moody],
    },
    "lc" => FormatEntry {
        name: "LC",
        clauses: &[
            Clause::Ohko,
            Clause::EvasionMoves,
            Clause::Swagger,
            Clause::BatonPass,
            Clause::EvasionAbilities,
            Clause::Moody,
            Clause::LittleCup,
        ],
    },
    "anythinggoes" => FormatEntry { name: "Anything Goes", clauses: &[] },
};

/// Species present in a generation's data that could not be obtained at the time.
pub fn unreleased_in(gen: u8) -> &'static [&'static str] {
    match gen {
        7 => &["zeraora"],
        _ => &[],
    }
}

pub fn get_ruleset(format: &Format) -> Option<RuleSet> {
    if !(MIN_GEN..=MAX_GEN).contains(&format.gen) {
        return None;
    }
    let entry = FORMATS.get(to_id(&format.id).as_str())?;
    let name = format!("[Gen {}] {}", format.gen, entry.name);
    Some(RuleSet::new(name, format.gen, entry.clauses).with_unreleased(unreleased_in(format.gen)))
}
