//! Data provider seams consumed by the validator.
//!
//! The validator never touches the static tables directly; it asks a [`Dex`]
//! for generation-scoped records. [`StaticDex`] answers from the compiled-in
//! tables in [`crate::data`].

use crate::data::abilities::get_ability;
use crate::data::formats::get_ruleset;
use crate::data::items::get_item;
use crate::data::moves::get_move;
use crate::data::species::get_species;
use crate::data::{AbilityData, ItemData, MoveData, SpeciesData};
use crate::format::{Format, RuleSet};
use crate::stats::Nature;

pub trait RuleResolver {
    fn rules(&self, format: &Format) -> Option<RuleSet>;
}

/// Species lookup. Returns `None` when the species does not exist in `gen`.
pub trait SpeciesProvider {
    fn species(&self, name: &str, gen: u8) -> Option<&SpeciesData>;
}

pub trait MoveProvider {
    fn move_data(&self, name: &str, gen: u8) -> Option<&MoveData>;
}

pub trait ItemProvider {
    fn item(&self, name: &str, gen: u8) -> Option<&ItemData>;
}

pub trait AbilityProvider {
    fn ability(&self, name: &str, gen: u8) -> Option<&AbilityData>;
}

pub trait NatureProvider {
    fn nature(&self, name: &str) -> Option<Nature>;
}

/// Everything the validator reads. Providers are read-only, so a `Dex` can be
/// shared across threads.
pub trait Dex:
    RuleResolver
    + SpeciesProvider
    + MoveProvider
    + ItemProvider
    + AbilityProvider
    + NatureProvider
    + Sync
{
}

impl<T> Dex for T where
    T: RuleResolver
        + SpeciesProvider
        + MoveProvider
        + ItemProvider
        + AbilityProvider
        + NatureProvider
        + Sync
{
}

/// Provider backed by the `phf` tables compiled into this crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticDex;

impl RuleResolver for StaticDex {
    fn rules(&self, format: &Format) -> Option<RuleSet> {
        get_ruleset(format)
    }
}

impl SpeciesProvider for StaticDex {
    fn species(&self, name: &str, gen: u8) -> Option<&SpeciesData> {
        get_species(name).filter(|species| species.gen <= gen)
    }
}

impl MoveProvider for StaticDex {
    fn move_data(&self, name: &str, gen: u8) -> Option<&MoveData> {
        get_move(name).filter(|move_data| move_data.gen <= gen)
    }
}

impl ItemProvider for StaticDex {
    fn item(&self, name: &str, gen: u8) -> Option<&ItemData> {
        get_item(name).filter(|item| item.gen <= gen)
    }
}

impl AbilityProvider for StaticDex {
    fn ability(&self, name: &str, gen: u8) -> Option<&AbilityData> {
        get_ability(name).filter(|ability| ability.gen <= gen)
    }
}

impl NatureProvider for StaticDex {
    fn nature(&self, name: &str) -> Option<Nature> {
        Nature::from_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_respect_generation() {
        let dex = StaticDex;
        assert!(dex.species("Garchomp", 3).is_none());
        assert!(dex.species("Garchomp", 4).is_some());
        assert!(dex.move_data("U-turn", 3).is_none());
        assert_eq!(dex.move_data("u-turn", 4).map(|m| m.id), Some("uturn"));
        assert!(dex.item("Life Orb", 3).is_none());
        assert!(dex.ability("Moody", 4).is_none());
        assert!(dex.ability("Moody", 5).is_some());
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        let dex = StaticDex;
        assert!(dex.species("Missingno", 1).is_none());
        assert!(dex.move_data("Splash Dance", 7).is_none());
        assert!(dex.nature("Grumpy").is_none());
        assert!(dex.rules(&Format::new(8, "ou")).is_none());
        assert!(dex.rules(&Format::new(7, "vgc")).is_none());
    }
}
