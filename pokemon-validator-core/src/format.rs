//! Formats (generation + ruleset id) and the rule sets they resolve to.

use std::fmt;
use std::str::FromStr;

use crate::data::{to_id, SpeciesData, Tier};

pub const MIN_GEN: u8 = 1;
pub const MAX_GEN: u8 = 7;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Format {
    pub gen: u8,
    /// Ruleset id without the generation prefix, e.g. `"ou"`.
    pub id: String,
}

impl Format {
    pub fn new(gen: u8, id: impl Into<String>) -> Self {
        Self {
            gen,
            id: to_id(&id.into()),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen{}{}", self.gen, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatIdError {
    #[error("format id `{0}` must start with `gen` followed by a generation number")]
    MissingGeneration(String),
    #[error("format id `{0}` has no ruleset after the generation")]
    MissingRuleset(String),
}

impl FromStr for Format {
    type Err = FormatIdError;

    /// Parses Showdown-style ids such as `gen7ou` or `[Gen 2] OU`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let id = to_id(raw);
        let rest = id
            .strip_prefix("gen")
            .ok_or_else(|| FormatIdError::MissingGeneration(raw.to_string()))?;
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        let gen: u8 = digits
            .parse()
            .map_err(|_| FormatIdError::MissingGeneration(raw.to_string()))?;
        let ruleset = &rest[digits.len()..];
        if ruleset.is_empty() {
            return Err(FormatIdError::MissingRuleset(raw.to_string()));
        }
        Ok(Format::new(gen, ruleset))
    }
}

/// A named format rule that bans a move, ability, item or combination.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Clause {
    Ohko,
    EvasionMoves,
    Swagger,
    BatonPass,
    EvasionAbilities,
    Moody,
    LittleCup,
}

impl Clause {
    pub fn name(self) -> &'static str {
        match self {
            Clause::Ohko => "OHKO",
            Clause::EvasionMoves => "Evasion Moves",
            Clause::Swagger => "Swagger",
            Clause::BatonPass => "Baton Pass",
            Clause::EvasionAbilities => "Evasion Abilities",
            Clause::Moody => "Moody",
            Clause::LittleCup => "Little Cup",
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Clause", self.name())
    }
}

/// The resolved rules of one format in one generation.
#[derive(Clone, Debug)]
pub struct RuleSet {
    pub name: String,
    pub gen: u8,
    clauses: Vec<Clause>,
    unreleased: Vec<String>,
}

impl RuleSet {
    pub fn new(name: impl Into<String>, gen: u8, clauses: &[Clause]) -> Self {
        Self {
            name: name.into(),
            gen,
            clauses: clauses.to_vec(),
            unreleased: Vec::new(),
        }
    }

    /// Marks species ids that exist in the data but are not yet obtainable.
    pub fn with_unreleased<I, S>(mut self, species_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.unreleased
            .extend(species_ids.into_iter().map(|id| to_id(id.as_ref())));
        self
    }

    pub fn has(&self, clause: Clause) -> bool {
        self.clauses.contains(&clause)
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn tier(&self, species: &SpeciesData) -> Tier {
        match species.tier {
            Tier::Illegal => Tier::Illegal,
            _ if self.unreleased.iter().any(|id| id == species.id) => Tier::Unreleased,
            tier => tier,
        }
    }
}
