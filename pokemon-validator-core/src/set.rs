use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::data::Gender;
use crate::stats::{default_evs, default_ivs, StatsTable};

fn default_level() -> u8 {
    100
}

// Showdown writes `"gender": ""` for sets without a declared gender.
fn deserialize_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let code: Option<String> = Option::deserialize(deserializer)?;
    match code.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(code) => Gender::from_code(code)
            .map(Some)
            .ok_or_else(|| de::Error::unknown_variant(code, &["M", "F", "N"])),
    }
}

/// A user-submitted set, using Showdown's JSON field names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonSet {
    pub species: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(
        default,
        deserialize_with = "deserialize_gender",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub shiny: bool,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default = "default_ivs")]
    pub ivs: StatsTable,
    #[serde(default = "default_evs")]
    pub evs: StatsTable,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

impl PokemonSet {
    pub fn new(species: impl Into<String>) -> Self {
        Self {
            species: species.into(),
            name: None,
            level: default_level(),
            gender: None,
            shiny: false,
            moves: Vec::new(),
            ivs: default_ivs(),
            evs: default_evs(),
            nature: None,
            ability: None,
            item: None,
        }
    }

    /// Nickname if present, otherwise the species as written.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.species)
    }

    pub fn with_moves<I, S>(mut self, moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moves = moves.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_shiny(mut self, shiny: bool) -> Self {
        self.shiny = shiny;
        self
    }

    pub fn with_ivs(mut self, ivs: StatsTable) -> Self {
        self.ivs = ivs;
        self
    }

    pub fn with_evs(mut self, evs: StatsTable) -> Self {
        self.evs = evs;
        self
    }

    pub fn with_nature(mut self, nature: impl Into<String>) -> Self {
        self.nature = Some(nature.into());
        self
    }

    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = Some(ability.into());
        self
    }

    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }
}
