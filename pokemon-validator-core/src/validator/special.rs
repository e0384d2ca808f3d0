use crate::data::{Gender, SpeciesData};

static SLEEP_MOVES: phf::Set<&'static str> = phf::phf_set! {
    "hypnosis",
    "lovelykiss",
    "sing",
    "sleeppowder",
    "spore",
};

static TRAPPING_MOVES: phf::Set<&'static str> = phf::phf_set! {
    "meanlook",
    "spiderweb",
};

/// Gen 2 bans pairing a sleep-inducing move with a trapping move.
pub fn has_sleep_trap_combo<'a, I>(move_ids: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sleep = false;
    let mut trap = false;
    for id in move_ids {
        sleep |= SLEEP_MOVES.contains(id);
        trap |= TRAPPING_MOVES.contains(id);
    }
    sleep && trap
}

/// Species that must carry at least three perfect IVs from Gen 6 on.
pub fn is_legendary(species: &SpeciesData, shiny: bool) -> bool {
    let undiscovered = species.egg_groups.first() == Some(&"Undiscovered");
    (undiscovered || species.name == "Manaphy")
        && species.prevo.is_none()
        && species.evos.is_empty()
        && species.name != "Unown"
        && species.base_species != "Pikachu"
        && (species.base_species != "Diancie" || !shiny)
}

/// Attack DV at or above which a Gen 2 Pokémon is male.
///
/// The raw threshold is the female ratio in sixteenths; the 1:3 and 1:1 ratios
/// are shifted to match the cartridge tables.
pub fn gen2_gender_threshold(female_ratio: f32) -> u8 {
    match (female_ratio * 16.0).round() as u8 {
        4 => 5,
        8 => 7,
        threshold => threshold,
    }
}

pub fn gen2_gender_from_atk_dv(female_ratio: f32, atk_dv: u8) -> Gender {
    if atk_dv >= gen2_gender_threshold(female_ratio) {
        Gender::Male
    } else {
        Gender::Female
    }
}
