use super::abilities::ABILITIES;
use super::formats::FORMATS;
use super::items::ITEMS;
use super::moves::MOVES;
use super::species::POKEDEX;
use super::{to_id, Gender, Tier};

#[test]
fn keys_are_ids() {
    for (key, species) in POKEDEX.entries() {
        assert_eq!(*key, species.id);
        assert_eq!(to_id(species.name), species.id, "{}", species.name);
    }
    for (key, move_data) in MOVES.entries() {
        assert_eq!(*key, move_data.id);
        assert_eq!(to_id(move_data.name), move_data.id, "{}", move_data.name);
    }
    for (key, item) in ITEMS.entries() {
        assert_eq!(*key, item.id);
        assert_eq!(to_id(item.name), item.id, "{}", item.name);
    }
    for (key, ability) in ABILITIES.entries() {
        assert_eq!(*key, ability.id);
        assert_eq!(to_id(ability.name), ability.id, "{}", ability.name);
    }
}

#[test]
fn evolution_links_resolve() {
    for species in POKEDEX.values() {
        if let Some(prevo) = species.prevo {
            let prevo = POKEDEX.get(prevo).expect("prevo is in the pokedex");
            assert!(prevo.evos.contains(&species.id), "{} -> {}", prevo.id, species.id);
        }
        for evo in species.evos {
            assert!(POKEDEX.contains_key(evo), "{evo} is missing");
        }
    }
}

#[test]
fn generations_are_in_range() {
    assert!(POKEDEX.values().all(|s| (1..=7).contains(&s.gen)));
    assert!(MOVES.values().all(|m| (1..=7).contains(&m.gen)));
    assert!(ITEMS.values().all(|i| (2..=7).contains(&i.gen)));
    assert!(ABILITIES.values().all(|a| (3..=7).contains(&a.gen)));
}

#[test]
fn notable_entries() {
    let nidoran = POKEDEX.get("nidoranm").expect("Nidoran-M exists");
    assert_eq!(nidoran.gender, Some(Gender::Male));
    assert_eq!(POKEDEX["pichuspikyeared"].tier, Tier::Illegal);
    assert_eq!(POKEDEX["giratinaorigin"].num, 487);

    assert!(MOVES["fissure"].ohko);
    assert!(MOVES["dragondance"].boosts.raises_speed());
    assert!(MOVES["dragondance"].boosts.raises_non_speed());
    assert!(MOVES["celebrate"].z_boosts.is_some());

    assert_eq!(ITEMS["normaliumz"].z_move_type, Some("Normal"));
    assert_eq!(ITEMS["eeviumz"].z_move_type, None);
    assert_eq!(ABILITIES["moody"].gen, 5);
}

#[test]
fn every_format_has_a_name() {
    for (id, entry) in FORMATS.entries() {
        assert_eq!(to_id(id), *id);
        assert!(!entry.name.is_empty());
    }
}
