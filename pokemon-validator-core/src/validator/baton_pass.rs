//! Baton Pass Clause: a Baton Passer may not pass both a Speed boost and a
//! boost to another stat.

use crate::data::{to_id, ItemData, MoveData};

/// Where a boost comes from. A boost only reachable through one Z-move is
/// attributed to that move, since a Pokémon gets a single Z-move per battle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoostSource {
    None,
    Generic,
    ZMove(&'static str),
}

impl BoostSource {
    fn is_some(self) -> bool {
        self != BoostSource::None
    }
}

static NON_SPEED_BOOSTING_MOVES: phf::Set<&'static str> = phf::phf_set! {
    "acupressure",
    "bellydrum",
    "chargebeam",
    "curse",
    "diamondstorm",
    "fellstinger",
    "fierydance",
    "flowershield",
    "poweruppunch",
    "rage",
    "rototiller",
    "skullbash",
    "stockpile",
};

static SPEED_BOOSTING_ABILITIES: phf::Set<&'static str> = phf::phf_set! {
    "motordrive",
    "rattled",
    "speedboost",
    "steadfast",
    "weakarmor",
};

static SPEED_BOOSTING_ITEMS: phf::Set<&'static str> = phf::phf_set! {
    "blazikenite",
    "eeviumz",
    "kommoniumz",
    "salacberry",
};

static NON_SPEED_BOOSTING_ABILITIES: phf::Set<&'static str> = phf::phf_set! {
    "angerpoint",
    "competitive",
    "defiant",
    "download",
    "justified",
    "lightningrod",
    "moxie",
    "sapsipper",
    "stormdrain",
};

static NON_SPEED_BOOSTING_ITEMS: phf::Set<&'static str> = phf::phf_set! {
    "absorbbulb",
    "apicotberry",
    "cellbattery",
    "eeviumz",
    "ganlonberry",
    "keeberry",
    "kommoniumz",
    "liechiberry",
    "luminousmoss",
    "marangaberry",
    "petayaberry",
    "snowball",
    "weaknesspolicy",
};

/// Attributes the Speed and non-Speed boosts a set can pick up.
///
/// Ordinary sources win over Z-moves. When a single Z-move supplies both
/// boosts it is picked for both sides, whatever the move order.
pub fn boost_sources(
    moves: &[&MoveData],
    ability: Option<&str>,
    item: Option<&ItemData>,
) -> (BoostSource, BoostSource) {
    let mut speed_generic = false;
    let mut non_speed_generic = false;
    let mut speed_z_moves = Vec::new();
    let mut non_speed_z_moves = Vec::new();

    for move_data in moves {
        if move_data.id == "flamecharge" || move_data.boosts.raises_speed() {
            speed_generic = true;
        }
        if NON_SPEED_BOOSTING_MOVES.contains(move_data.id) || move_data.boosts.raises_non_speed() {
            non_speed_generic = true;
        }

        let z_boosts = match (item.and_then(|item| item.z_move_type), move_data.z_boosts) {
            (Some(z_type), Some(z_boosts)) if z_type == move_data.move_type => z_boosts,
            _ => continue,
        };
        if z_boosts.raises_speed() {
            speed_z_moves.push(move_data.name);
        }
        if z_boosts.raises_non_speed() {
            non_speed_z_moves.push(move_data.name);
        }
    }

    let ability_id = ability.map(to_id).unwrap_or_default();
    let item_id = item.map(|item| item.id).unwrap_or_default();
    if SPEED_BOOSTING_ABILITIES.contains(ability_id.as_str())
        || SPEED_BOOSTING_ITEMS.contains(item_id)
    {
        speed_generic = true;
    }
    if NON_SPEED_BOOSTING_ABILITIES.contains(ability_id.as_str())
        || NON_SPEED_BOOSTING_ITEMS.contains(item_id)
    {
        non_speed_generic = true;
    }

    let shared = speed_z_moves
        .iter()
        .copied()
        .find(|name| non_speed_z_moves.contains(name));
    let attribute = |generic: bool, z_moves: &[&'static str]| {
        if generic {
            BoostSource::Generic
        } else if let Some(name) = shared.or_else(|| z_moves.first().copied()) {
            BoostSource::ZMove(name)
        } else {
            BoostSource::None
        }
    };
    (
        attribute(speed_generic, &speed_z_moves),
        attribute(non_speed_generic, &non_speed_z_moves),
    )
}

/// True when the set can Baton Pass Speed together with another stat.
pub fn passes_speed_and_stat(
    moves: &[&MoveData],
    ability: Option<&str>,
    item: Option<&ItemData>,
) -> bool {
    let (speed, non_speed) = boost_sources(moves, ability, item);
    if !speed.is_some() || !non_speed.is_some() {
        return false;
    }
    // Two different Z-moves can't both be used, so only one of the boosts is reachable.
    !matches!(
        (speed, non_speed),
        (BoostSource::ZMove(a), BoostSource::ZMove(b)) if a != b
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::items::get_item;
    use crate::data::moves::get_move;

    fn moves(names: &[&str]) -> Vec<&'static MoveData> {
        names
            .iter()
            .map(|name| get_move(name).expect("move exists"))
            .collect()
    }

    #[test]
    fn speed_and_attack_from_moves_is_banned() {
        let set = moves(&["Baton Pass", "Agility", "Swords Dance"]);
        assert!(passes_speed_and_stat(&set, None, None));
    }

    #[test]
    fn single_stat_is_allowed() {
        assert!(!passes_speed_and_stat(&moves(&["Baton Pass", "Agility"]), None, None));
        assert!(!passes_speed_and_stat(&moves(&["Baton Pass", "Nasty Plot"]), None, None));
    }

    #[test]
    fn dragon_dance_boosts_both() {
        assert!(passes_speed_and_stat(&moves(&["Baton Pass", "Dragon Dance"]), None, None));
    }

    #[test]
    fn fixed_non_speed_list_counts() {
        let set = moves(&["Baton Pass", "Flame Charge", "Curse"]);
        assert!(passes_speed_and_stat(&set, None, None));
    }

    #[test]
    fn abilities_and_items_force_sources() {
        let set = moves(&["Baton Pass", "Swords Dance"]);
        assert!(passes_speed_and_stat(&set, Some("Speed Boost"), None));
        let set = moves(&["Baton Pass", "Agility"]);
        assert!(passes_speed_and_stat(&set, None, get_item("Weakness Policy")));
        assert!(!passes_speed_and_stat(&moves(&["Baton Pass"]), Some("Speed Boost"), None));
    }

    #[test]
    fn z_move_attribution() {
        let z_normal = get_item("Normalium Z");
        let (speed, non_speed) = boost_sources(&moves(&["Baton Pass", "Encore"]), None, z_normal);
        assert_eq!(speed, BoostSource::ZMove("Encore"));
        assert_eq!(non_speed, BoostSource::None);
    }

    #[test]
    fn same_z_move_for_both_boosts_is_banned() {
        // Z-Celebrate raises every stat.
        let set = moves(&["Baton Pass", "Celebrate"]);
        assert!(passes_speed_and_stat(&set, None, get_item("Normalium Z")));
    }

    #[test]
    fn distinct_z_moves_are_exempt() {
        // Z-Encore raises Speed, Z-Tail Whip raises Attack; only one Z-move per battle.
        let set = moves(&["Baton Pass", "Encore", "Tail Whip"]);
        let (speed, non_speed) = boost_sources(&set, None, get_item("Normalium Z"));
        assert_eq!(speed, BoostSource::ZMove("Encore"));
        assert_eq!(non_speed, BoostSource::ZMove("Tail Whip"));
        assert!(!passes_speed_and_stat(&set, None, get_item("Normalium Z")));
    }

    #[test]
    fn z_speed_with_ordinary_stat_boost_is_banned() {
        let set = moves(&["Baton Pass", "Encore", "Swords Dance"]);
        assert!(passes_speed_and_stat(&set, None, get_item("Normalium Z")));
    }

    #[test]
    fn z_celebrate_is_banned_in_any_move_order() {
        let z_normal = get_item("Normalium Z");
        for order in [
            ["Baton Pass", "Celebrate", "Encore"],
            ["Baton Pass", "Encore", "Celebrate"],
        ] {
            let set = moves(&order);
            assert_eq!(
                boost_sources(&set, None, z_normal),
                (BoostSource::ZMove("Celebrate"), BoostSource::ZMove("Celebrate")),
                "{order:?}"
            );
            assert!(passes_speed_and_stat(&set, None, z_normal), "{order:?}");
        }
    }

    #[test]
    fn ordinary_boost_with_z_celebrate_is_banned() {
        let z_normal = get_item("Normalium Z");
        for order in [
            ["Swords Dance", "Celebrate", "Encore"],
            ["Encore", "Swords Dance", "Celebrate"],
        ] {
            assert!(passes_speed_and_stat(&moves(&order), None, z_normal), "{order:?}");
        }
    }

    #[test]
    fn distinct_z_moves_are_exempt_in_either_order() {
        let z_normal = get_item("Normalium Z");
        let set = moves(&["Baton Pass", "Tail Whip", "Encore"]);
        assert!(!passes_speed_and_stat(&set, None, z_normal));
    }

    #[test]
    fn z_crystal_of_another_type_does_nothing() {
        let set = moves(&["Baton Pass", "Encore", "Tail Whip"]);
        assert!(!passes_speed_and_stat(&set, None, get_item("Firium Z")));
    }
}
