//! Static game data used by the built-in [`StaticDex`](crate::dex::StaticDex).
//!
//! Tables are keyed by Showdown-style ids (lowercase, alphanumeric only) and
//! compiled into `phf` maps.

pub mod abilities;
pub mod formats;
pub mod items;
pub mod moves;
pub mod species;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalizes a display name into a lookup id: `"Nidoran-M"` becomes `"nidoranm"`.
pub fn to_id(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Tier {
    Illegal,
    Unreleased,
    Normal,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "N")]
    Genderless,
}

impl Gender {
    pub fn from_code(code: &str) -> Option<Gender> {
        match code.trim() {
            "M" | "m" => Some(Gender::Male),
            "F" | "f" => Some(Gender::Female),
            "N" | "n" => Some(Gender::Genderless),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Genderless => "genderless",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SpeciesData {
    pub num: u16,
    pub id: &'static str,
    pub name: &'static str,
    pub base_species: &'static str,
    /// Generation the species (or forme) was introduced in.
    pub gen: u8,
    /// Fixed gender; `None` means the gender follows `female_ratio`.
    pub gender: Option<Gender>,
    pub female_ratio: f32,
    pub prevo: Option<&'static str>,
    pub evos: &'static [&'static str],
    pub egg_groups: &'static [&'static str],
    pub tier: Tier,
}

impl SpeciesData {
    pub const DEFAULT: SpeciesData = SpeciesData {
        num: 0,
        id: "",
        name: "",
        base_species: "",
        gen: 1,
        gender: None,
        female_ratio: 0.5,
        prevo: None,
        evos: &[],
        egg_groups: &[],
        tier: Tier::Normal,
    };
}

/// Stat stage changes, as listed on a move or a Z-move effect.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Boosts {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl Boosts {
    pub const NONE: Boosts = Boosts {
        atk: 0,
        def: 0,
        spa: 0,
        spd: 0,
        spe: 0,
        accuracy: 0,
        evasion: 0,
    };

    pub const fn all(stage: i8) -> Boosts {
        Boosts {
            atk: stage,
            def: stage,
            spa: stage,
            spd: stage,
            spe: stage,
            ..Boosts::NONE
        }
    }

    pub fn raises_speed(&self) -> bool {
        self.spe > 0
    }

    pub fn raises_non_speed(&self) -> bool {
        self.atk > 0 || self.def > 0 || self.spa > 0 || self.spd > 0
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MoveData {
    pub id: &'static str,
    pub name: &'static str,
    pub gen: u8,
    pub move_type: &'static str,
    pub ohko: bool,
    pub boosts: Boosts,
    /// Stat changes granted by the Z-move form of a status move.
    pub z_boosts: Option<Boosts>,
}

impl MoveData {
    pub const DEFAULT: MoveData = MoveData {
        id: "",
        name: "",
        gen: 1,
        move_type: "Normal",
        ohko: false,
        boosts: Boosts::NONE,
        z_boosts: None,
    };
}

#[derive(Clone, Copy, Debug)]
pub struct ItemData {
    pub id: &'static str,
    pub name: &'static str,
    pub gen: u8,
    /// Set on type-matched Z-crystals.
    pub z_move_type: Option<&'static str>,
}

impl ItemData {
    pub const DEFAULT: ItemData = ItemData {
        id: "",
        name: "",
        gen: 2,
        z_move_type: None,
    };
}

#[derive(Clone, Copy, Debug)]
pub struct AbilityData {
    pub id: &'static str,
    pub name: &'static str,
    pub gen: u8,
}
