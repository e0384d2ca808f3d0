use pokemon_validator_core::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const GEN1_SPECIES: &[&str] = &[
    "Snorlax", "Gengar", "Tauros", "Pikachu", "Nidoking", "Mew", "Eevee",
];
const MOVES: &[&str] = &[
    "Body Slam", "Rest", "Earthquake", "Thunderbolt", "Ice Beam", "Psychic", "Surf",
    "Swords Dance", "Agility", "Hypnosis", "Toxic", "Substitute", "Fissure", "Splash Dance",
];

fn format(id: &str) -> Format {
    id.parse().expect("valid format id")
}

fn random_set(rng: &mut SmallRng, move_count: usize) -> PokemonSet {
    let species = GEN1_SPECIES[rng.gen_range(0..GEN1_SPECIES.len())];
    let moves: Vec<&str> = (0..move_count)
        .map(|_| MOVES[rng.gen_range(0..MOVES.len())])
        .collect();
    let mut ivs = StatsTable::uniform(0);
    for stat in Stat::ALL {
        ivs.set(stat, rng.gen_range(0..=31));
    }
    PokemonSet::new(species)
        .with_moves(moves)
        .with_level(rng.gen_range(1..=100))
        .with_ivs(ivs)
}

#[test]
fn validation_is_deterministic() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let validator = Validator::default();
    for gen in 1..=7 {
        let format = Format::new(gen, "ou");
        for _ in 0..50 {
            let move_count = rng.gen_range(0..=6);
            let set = random_set(&mut rng, move_count);
            assert_eq!(validator.validate(&set, &format), validator.validate(&set, &format));
        }
    }
}

#[test]
fn move_count_limits_hold_for_any_set() {
    let mut rng = SmallRng::seed_from_u64(7);
    let format = format("gen7ou");
    for _ in 0..100 {
        let set = random_set(&mut rng, 0);
        let problems = validate(&StaticDex, &set, &format);
        let expected = format!("{} must have at least one move.", set.display_name());
        assert!(problems.contains(&expected), "{problems:?}");

        let move_count = rng.gen_range(5..=8);
        let set = random_set(&mut rng, move_count);
        let problems = validate(&StaticDex, &set, &format);
        let expected = format!("{} has more than four moves.", set.display_name());
        assert!(problems.contains(&expected), "{problems:?}");
    }
}

#[test]
fn abilities_never_exist_before_gen3() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..50 {
        let set = random_set(&mut rng, 2).with_ability("Thick Fat");
        for id in ["gen1ou", "gen2ou"] {
            let format = format(id);
            let expected = format!("Abilities do not exist in Gen {}.", format.gen);
            assert!(validate(&StaticDex, &set, &format).contains(&expected));
        }
    }
}

#[test]
fn gen2_dv_rules_only_apply_in_gen2() {
    let mut rng = SmallRng::seed_from_u64(2);
    for _ in 0..100 {
        let set = random_set(&mut rng, 1);
        let gen1 = validate(&StaticDex, &set, &format("gen1ou"));
        assert!(gen1.iter().all(|p| !p.contains("DV")), "{gen1:?}");
    }
}

#[test]
fn showdown_export_round_trip_through_validator() -> anyhow::Result<()> {
    let export = "\
Lax (Snorlax) @ Leftovers
Ability: Thick Fat
EVs: 252 HP / 4 Atk / 252 SpD
Careful Nature
- Body Slam
- Rest
- Sleep Talk
- Earthquake

Chomp (Garchomp) (F) @ Life Orb
Ability: Sand Veil
EVs: 252 Atk / 4 SpD / 252 Spe
Jolly Nature
- Earthquake
- Swords Dance
- Double Team
";
    let team = parse_showdown_team(export)?;
    assert_eq!(team.len(), 2);

    let format = format("gen7ou");
    let validator = Validator::new(&StaticDex);
    assert!(validator.validate(&team[0], &format).is_empty());

    let problems = validator.validate(&team[1], &format);
    assert_eq!(
        problems,
        vec![
            "Double Team is banned by Evasion Moves Clause.".to_string(),
            "Sand Veil is banned by Evasion Abilities Clause.".to_string(),
        ]
    );

    let mut report = ValidationReport::new(format.to_string());
    for set in &team {
        report.record(set, validator.validate(set, &format));
    }
    let json = report.to_json();
    assert_eq!(json["problems"], 2);
    assert_eq!(json["sets"][1]["name"], "Chomp");
    Ok(())
}

#[test]
fn sets_deserialize_from_showdown_json() -> anyhow::Result<()> {
    let json = r#"{
        "name": "",
        "species": "Nidoran-M",
        "gender": "F",
        "moves": ["Tackle"],
        "ivs": {"hp": 31, "atk": 31, "def": 31, "spa": 31, "spd": 31, "spe": 31},
        "evs": {"hp": 0, "atk": 0, "def": 0, "spa": 0, "spd": 0, "spe": 0}
    }"#;
    let set: PokemonSet = serde_json::from_str(json)?;
    let problems = validate(&StaticDex, &set, &format("gen2ou"));
    assert_eq!(
        problems,
        vec!["Nidoran-M must be male, but its gender is set to female.".to_string()]
    );
    Ok(())
}
