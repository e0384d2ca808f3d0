use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::data::to_id;

static NATURES_BY_ID: Lazy<HashMap<String, Nature>> = Lazy::new(|| {
    Nature::ALL
        .iter()
        .map(|nature| (to_id(nature.name()), *nature))
        .collect()
});

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

impl Nature {
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Docile,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Timid,
        Nature::Hasty,
        Nature::Serious,
        Nature::Jolly,
        Nature::Naive,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Bashful,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Quirky,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Nature::Hardy => "Hardy",
            Nature::Lonely => "Lonely",
            Nature::Brave => "Brave",
            Nature::Adamant => "Adamant",
            Nature::Naughty => "Naughty",
            Nature::Bold => "Bold",
            Nature::Docile => "Docile",
            Nature::Relaxed => "Relaxed",
            Nature::Impish => "Impish",
            Nature::Lax => "Lax",
            Nature::Timid => "Timid",
            Nature::Hasty => "Hasty",
            Nature::Serious => "Serious",
            Nature::Jolly => "Jolly",
            Nature::Naive => "Naive",
            Nature::Modest => "Modest",
            Nature::Mild => "Mild",
            Nature::Quiet => "Quiet",
            Nature::Bashful => "Bashful",
            Nature::Rash => "Rash",
            Nature::Calm => "Calm",
            Nature::Gentle => "Gentle",
            Nature::Sassy => "Sassy",
            Nature::Careful => "Careful",
            Nature::Quirky => "Quirky",
        }
    }

    /// Case- and punctuation-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Nature> {
        NATURES_BY_ID.get(to_id(name).as_str()).copied()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

impl Stat {
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];

    pub fn short_name(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Atk => "Atk",
            Stat::Def => "Def",
            Stat::Spa => "SpA",
            Stat::Spd => "SpD",
            Stat::Spe => "Spe",
        }
    }

    /// Parses the labels used in Showdown exports ("HP", "Atk", "SpA", ...).
    pub fn from_label(label: &str) -> Option<Stat> {
        match label.to_ascii_lowercase().as_str() {
            "hp" => Some(Stat::Hp),
            "atk" => Some(Stat::Atk),
            "def" => Some(Stat::Def),
            "spa" | "spatk" => Some(Stat::Spa),
            "spd" | "spdef" => Some(Stat::Spd),
            "spe" => Some(Stat::Spe),
            _ => None,
        }
    }
}

/// One value per stat, in Showdown's `{hp, atk, def, spa, spd, spe}` layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StatsTable {
    pub hp: u8,
    pub atk: u8,
    pub def: u8,
    pub spa: u8,
    pub spd: u8,
    pub spe: u8,
}

impl StatsTable {
    pub const fn uniform(value: u8) -> Self {
        Self {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u8) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Atk => self.atk = value,
            Stat::Def => self.def = value,
            Stat::Spa => self.spa = value,
            Stat::Spd => self.spd = value,
            Stat::Spe => self.spe = value,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, u8)> + '_ {
        Stat::ALL.iter().map(move |&stat| (stat, self.get(stat)))
    }

    pub fn total(&self) -> u16 {
        self.iter().map(|(_, value)| value as u16).sum()
    }
}

pub fn default_ivs() -> StatsTable {
    StatsTable::uniform(31)
}

pub fn default_evs() -> StatsTable {
    StatsTable::uniform(0)
}

pub const MAX_IV: u8 = 31;
pub const MAX_EV_TOTAL: u16 = 510;

// Gen 1-2 stat randomization works on 4-bit DVs; IVs are the DV doubled (plus one for odd IVs).
pub fn iv_to_dv(iv: u8) -> u8 {
    iv / 2
}

pub fn dv_to_iv(dv: u8) -> u8 {
    if dv >= 15 {
        31
    } else {
        dv * 2
    }
}

/// The HP DV is not stored; it is assembled from the low bit of the other four DVs.
pub fn hp_dv_from_dvs(atk: u8, def: u8, spe: u8, spc: u8) -> u8 {
    ((atk & 1) << 3) | ((def & 1) << 2) | ((spe & 1) << 1) | (spc & 1)
}

/// Gen 2 shininess: Def, Spe and Spc DVs of 10, and an Atk DV of 2, 3, 6, 7, 10, 11, 14 or 15.
pub fn shiny_from_dvs(atk: u8, def: u8, spe: u8, spc: u8) -> bool {
    def == 10 && spe == 10 && spc == 10 && atk % 4 >= 2
}
