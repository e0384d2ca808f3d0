use super::{Gender, SpeciesData, Tier};

// Ref: pokemon-showdown/data/pokedex.ts (num, gender, genderRatio, prevo, evos, eggGroups).
// Evolution links point at the latest generation's data; lookups filter by `gen`.
pub static POKEDEX: phf::Map<&'static str, SpeciesData> = phf::phf_map! {
    "bulbasaur" => SpeciesData {
        num: 1, id: "bulbasaur", name: "Bulbasaur", base_species: "Bulbasaur",
        female_ratio: 0.125, evos: &["ivysaur"], egg_groups: &["Monster", "Grass"],
        ..SpeciesData::DEFAULT
    },
    "ivysaur" => SpeciesData {
        num: 2, id: "ivysaur", name: "Ivysaur", base_species: "Ivysaur",
        female_ratio: 0.125, prevo: Some("bulbasaur"), evos: &["venusaur"],
        egg_groups: &["Monster", "Grass"],
        ..SpeciesData::DEFAULT
    },
    "venusaur" => SpeciesData {
        num: 3, id: "venusaur", name: "Venusaur", base_species: "Venusaur",
        female_ratio: 0.125, prevo: Some("ivysaur"), egg_groups: &["Monster", "Grass"],
        ..SpeciesData::DEFAULT
    },
    "charmander" => SpeciesData {
        num: 4, id: "charmander", name: "Charmander", base_species: "Charmander",
        female_ratio: 0.125, evos: &["charmeleon"], egg_groups: &["Monster", "Dragon"],
        ..SpeciesData::DEFAULT
    },
    "charmeleon" => SpeciesData {
        num: 5, id: "charmeleon", name: "Charmeleon", base_species: "Charmeleon",
        female_ratio: 0.125, prevo: Some("charmander"), evos: &["charizard"],
        egg_groups: &["Monster", "Dragon"],
        ..SpeciesData::DEFAULT
    },
    "charizard" => SpeciesData {
        num: 6, id: "charizard", name: "Charizard", base_species: "Charizard",
        female_ratio: 0.125, prevo: Some("charmeleon"), egg_groups: &["Monster", "Dragon"],
        ..SpeciesData::DEFAULT
    },
    "pikachu" => SpeciesData {
        num: 25, id: "pikachu", name: "Pikachu", base_species: "Pikachu",
        prevo: Some("pichu"), evos: &["raichu"], egg_groups: &["Field", "Fairy"],
        ..SpeciesData::DEFAULT
    },
    "pikachucosplay" => SpeciesData {
        num: 25, id: "pikachucosplay", name: "Pikachu-Cosplay", base_species: "Pikachu",
        gen: 6, gender: Some(Gender::Female), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "pikachuoriginal" => SpeciesData {
        num: 25, id: "pikachuoriginal", name: "Pikachu-Original", base_species: "Pikachu",
        gen: 7, gender: Some(Gender::Male), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "raichu" => SpeciesData {
        num: 26, id: "raichu", name: "Raichu", base_species: "Raichu",
        prevo: Some("pikachu"), egg_groups: &["Field", "Fairy"],
        ..SpeciesData::DEFAULT
    },
    "nidoranf" => SpeciesData {
        num: 29, id: "nidoranf", name: "Nidoran-F", base_species: "Nidoran-F",
        gender: Some(Gender::Female), evos: &["nidorina"], egg_groups: &["Monster", "Field"],
        ..SpeciesData::DEFAULT
    },
    "nidorina" => SpeciesData {
        num: 30, id: "nidorina", name: "Nidorina", base_species: "Nidorina",
        gender: Some(Gender::Female), prevo: Some("nidoranf"), evos: &["nidoqueen"],
        egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "nidoqueen" => SpeciesData {
        num: 31, id: "nidoqueen", name: "Nidoqueen", base_species: "Nidoqueen",
        gender: Some(Gender::Female), prevo: Some("nidorina"), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "nidoranm" => SpeciesData {
        num: 32, id: "nidoranm", name: "Nidoran-M", base_species: "Nidoran-M",
        gender: Some(Gender::Male), evos: &["nidorino"], egg_groups: &["Monster", "Field"],
        ..SpeciesData::DEFAULT
    },
    "nidorino" => SpeciesData {
        num: 33, id: "nidorino", name: "Nidorino", base_species: "Nidorino",
        gender: Some(Gender::Male), prevo: Some("nidoranm"), evos: &["nidoking"],
        egg_groups: &["Monster", "Field"],
        ..SpeciesData::DEFAULT
    },
    "nidoking" => SpeciesData {
        num: 34, id: "nidoking", name: "Nidoking", base_species: "Nidoking",
        gender: Some(Gender::Male), prevo: Some("nidorino"), egg_groups: &["Monster", "Field"],
        ..SpeciesData::DEFAULT
    },
    "growlithe" => SpeciesData {
        num: 58, id: "growlithe", name: "Growlithe", base_species: "Growlithe",
        female_ratio: 0.25, evos: &["arcanine"], egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "arcanine" => SpeciesData {
        num: 59, id: "arcanine", name: "Arcanine", base_species: "Arcanine",
        female_ratio: 0.25, prevo: Some("growlithe"), egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "gastly" => SpeciesData {
        num: 92, id: "gastly", name: "Gastly", base_species: "Gastly",
        evos: &["haunter"], egg_groups: &["Amorphous"],
        ..SpeciesData::DEFAULT
    },
    "haunter" => SpeciesData {
        num: 93, id: "haunter", name: "Haunter", base_species: "Haunter",
        prevo: Some("gastly"), evos: &["gengar"], egg_groups: &["Amorphous"],
        ..SpeciesData::DEFAULT
    },
    "gengar" => SpeciesData {
        num: 94, id: "gengar", name: "Gengar", base_species: "Gengar",
        prevo: Some("haunter"), egg_groups: &["Amorphous"],
        ..SpeciesData::DEFAULT
    },
    "cubone" => SpeciesData {
        num: 104, id: "cubone", name: "Cubone", base_species: "Cubone",
        evos: &["marowak", "marowakalola"], egg_groups: &["Monster"],
        ..SpeciesData::DEFAULT
    },
    "marowak" => SpeciesData {
        num: 105, id: "marowak", name: "Marowak", base_species: "Marowak",
        prevo: Some("cubone"), egg_groups: &["Monster"],
        ..SpeciesData::DEFAULT
    },
    "marowakalola" => SpeciesData {
        num: 105, id: "marowakalola", name: "Marowak-Alola", base_species: "Marowak",
        gen: 7, prevo: Some("cubone"), egg_groups: &["Monster"],
        ..SpeciesData::DEFAULT
    },
    "scyther" => SpeciesData {
        num: 123, id: "scyther", name: "Scyther", base_species: "Scyther",
        evos: &["scizor"], egg_groups: &["Bug"],
        ..SpeciesData::DEFAULT
    },
    "tauros" => SpeciesData {
        num: 128, id: "tauros", name: "Tauros", base_species: "Tauros",
        gender: Some(Gender::Male), egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "magikarp" => SpeciesData {
        num: 129, id: "magikarp", name: "Magikarp", base_species: "Magikarp",
        evos: &["gyarados"], egg_groups: &["Water 2", "Dragon"],
        ..SpeciesData::DEFAULT
    },
    "gyarados" => SpeciesData {
        num: 130, id: "gyarados", name: "Gyarados", base_species: "Gyarados",
        prevo: Some("magikarp"), egg_groups: &["Water 2", "Dragon"],
        ..SpeciesData::DEFAULT
    },
    "eevee" => SpeciesData {
        num: 133, id: "eevee", name: "Eevee", base_species: "Eevee",
        female_ratio: 0.125,
        evos: &["vaporeon", "jolteon", "flareon", "espeon", "umbreon", "leafeon", "glaceon", "sylveon"],
        egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "vaporeon" => SpeciesData {
        num: 134, id: "vaporeon", name: "Vaporeon", base_species: "Vaporeon",
        female_ratio: 0.125, prevo: Some("eevee"), egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "jolteon" => SpeciesData {
        num: 135, id: "jolteon", name: "Jolteon", base_species: "Jolteon",
        female_ratio: 0.125, prevo: Some("eevee"), egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "flareon" => SpeciesData {
        num: 136, id: "flareon", name: "Flareon", base_species: "Flareon",
        female_ratio: 0.125, prevo: Some("eevee"), egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "snorlax" => SpeciesData {
        num: 143, id: "snorlax", name: "Snorlax", base_species: "Snorlax",
        female_ratio: 0.125, prevo: Some("munchlax"), egg_groups: &["Monster"],
        ..SpeciesData::DEFAULT
    },
    "articuno" => SpeciesData {
        num: 144, id: "articuno", name: "Articuno", base_species: "Articuno",
        gender: Some(Gender::Genderless), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "zapdos" => SpeciesData {
        num: 145, id: "zapdos", name: "Zapdos", base_species: "Zapdos",
        gender: Some(Gender::Genderless), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "moltres" => SpeciesData {
        num: 146, id: "moltres", name: "Moltres", base_species: "Moltres",
        gender: Some(Gender::Genderless), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "mewtwo" => SpeciesData {
        num: 150, id: "mewtwo", name: "Mewtwo", base_species: "Mewtwo",
        gender: Some(Gender::Genderless), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "mew" => SpeciesData {
        num: 151, id: "mew", name: "Mew", base_species: "Mew",
        gender: Some(Gender::Genderless), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "pichu" => SpeciesData {
        num: 172, id: "pichu", name: "Pichu", base_species: "Pichu",
        gen: 2, evos: &["pikachu"], egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "pichuspikyeared" => SpeciesData {
        num: 172, id: "pichuspikyeared", name: "Pichu-Spiky-eared", base_species: "Pichu",
        gen: 4, egg_groups: &["Undiscovered"], tier: Tier::Illegal,
        ..SpeciesData::DEFAULT
    },
    "espeon" => SpeciesData {
        num: 196, id: "espeon", name: "Espeon", base_species: "Espeon",
        gen: 2, female_ratio: 0.125, prevo: Some("eevee"), egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "umbreon" => SpeciesData {
        num: 197, id: "umbreon", name: "Umbreon", base_species: "Umbreon",
        gen: 2, female_ratio: 0.125, prevo: Some("eevee"), egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "unown" => SpeciesData {
        num: 201, id: "unown", name: "Unown", base_species: "Unown",
        gen: 2, gender: Some(Gender::Genderless), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "scizor" => SpeciesData {
        num: 212, id: "scizor", name: "Scizor", base_species: "Scizor",
        gen: 2, prevo: Some("scyther"), egg_groups: &["Bug"],
        ..SpeciesData::DEFAULT
    },
    "skarmory" => SpeciesData {
        num: 227, id: "skarmory", name: "Skarmory", base_species: "Skarmory",
        gen: 2, egg_groups: &["Flying"],
        ..SpeciesData::DEFAULT
    },
    "smeargle" => SpeciesData {
        num: 235, id: "smeargle", name: "Smeargle", base_species: "Smeargle",
        gen: 2, egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "raikou" => SpeciesData {
        num: 243, id: "raikou", name: "Raikou", base_species: "Raikou",
        gen: 2, gender: Some(Gender::Genderless), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "lugia" => SpeciesData {
        num: 249, id: "lugia", name: "Lugia", base_species: "Lugia",
        gen: 2, gender: Some(Gender::Genderless), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "celebi" => SpeciesData {
        num: 251, id: "celebi", name: "Celebi", base_species: "Celebi",
        gen: 2, gender: Some(Gender::Genderless), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "torchic" => SpeciesData {
        num: 255, id: "torchic", name: "Torchic", base_species: "Torchic",
        gen: 3, female_ratio: 0.125, evos: &["combusken"], egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "combusken" => SpeciesData {
        num: 256, id: "combusken", name: "Combusken", base_species: "Combusken",
        gen: 3, female_ratio: 0.125, prevo: Some("torchic"), evos: &["blaziken"],
        egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "blaziken" => SpeciesData {
        num: 257, id: "blaziken", name: "Blaziken", base_species: "Blaziken",
        gen: 3, female_ratio: 0.125, prevo: Some("combusken"), egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "shroomish" => SpeciesData {
        num: 285, id: "shroomish", name: "Shroomish", base_species: "Shroomish",
        gen: 3, evos: &["breloom"], egg_groups: &["Fairy", "Grass"],
        ..SpeciesData::DEFAULT
    },
    "breloom" => SpeciesData {
        num: 286, id: "breloom", name: "Breloom", base_species: "Breloom",
        gen: 3, prevo: Some("shroomish"), egg_groups: &["Fairy", "Grass"],
        ..SpeciesData::DEFAULT
    },
    "nincada" => SpeciesData {
        num: 290, id: "nincada", name: "Nincada", base_species: "Nincada",
        gen: 3, evos: &["ninjask", "shedinja"], egg_groups: &["Bug"],
        ..SpeciesData::DEFAULT
    },
    "ninjask" => SpeciesData {
        num: 291, id: "ninjask", name: "Ninjask", base_species: "Ninjask",
        gen: 3, prevo: Some("nincada"), egg_groups: &["Bug"],
        ..SpeciesData::DEFAULT
    },
    "shedinja" => SpeciesData {
        num: 292, id: "shedinja", name: "Shedinja", base_species: "Shedinja",
        gen: 3, gender: Some(Gender::Genderless), prevo: Some("nincada"), egg_groups: &["Mineral"],
        ..SpeciesData::DEFAULT
    },
    "bidoof" => SpeciesData {
        num: 399, id: "bidoof", name: "Bidoof", base_species: "Bidoof",
        gen: 4, evos: &["bibarel"], egg_groups: &["Water 1", "Field"],
        ..SpeciesData::DEFAULT
    },
    "bibarel" => SpeciesData {
        num: 400, id: "bibarel", name: "Bibarel", base_species: "Bibarel",
        gen: 4, prevo: Some("bidoof"), egg_groups: &["Water 1", "Field"],
        ..SpeciesData::DEFAULT
    },
    "gible" => SpeciesData {
        num: 443, id: "gible", name: "Gible", base_species: "Gible",
        gen: 4, evos: &["gabite"], egg_groups: &["Monster", "Dragon"],
        ..SpeciesData::DEFAULT
    },
    "gabite" => SpeciesData {
        num: 444, id: "gabite", name: "Gabite", base_species: "Gabite",
        gen: 4, prevo: Some("gible"), evos: &["garchomp"], egg_groups: &["Monster", "Dragon"],
        ..SpeciesData::DEFAULT
    },
    "garchomp" => SpeciesData {
        num: 445, id: "garchomp", name: "Garchomp", base_species: "Garchomp",
        gen: 4, prevo: Some("gabite"), egg_groups: &["Monster", "Dragon"],
        ..SpeciesData::DEFAULT
    },
    "munchlax" => SpeciesData {
        num: 446, id: "munchlax", name: "Munchlax", base_species: "Munchlax",
        gen: 4, female_ratio: 0.125, evos: &["snorlax"], egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "leafeon" => SpeciesData {
        num: 470, id: "leafeon", name: "Leafeon", base_species: "Leafeon",
        gen: 4, female_ratio: 0.125, prevo: Some("eevee"), egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "glaceon" => SpeciesData {
        num: 471, id: "glaceon", name: "Glaceon", base_species: "Glaceon",
        gen: 4, female_ratio: 0.125, prevo: Some("eevee"), egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "giratina" => SpeciesData {
        num: 487, id: "giratina", name: "Giratina", base_species: "Giratina",
        gen: 4, gender: Some(Gender::Genderless), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "giratinaorigin" => SpeciesData {
        num: 487, id: "giratinaorigin", name: "Giratina-Origin", base_species: "Giratina",
        gen: 4, gender: Some(Gender::Genderless), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "phione" => SpeciesData {
        num: 489, id: "phione", name: "Phione", base_species: "Phione",
        gen: 4, gender: Some(Gender::Genderless), egg_groups: &["Water 1", "Fairy"],
        ..SpeciesData::DEFAULT
    },
    "manaphy" => SpeciesData {
        num: 490, id: "manaphy", name: "Manaphy", base_species: "Manaphy",
        gen: 4, gender: Some(Gender::Genderless), egg_groups: &["Water 1", "Fairy"],
        ..SpeciesData::DEFAULT
    },
    "venipede" => SpeciesData {
        num: 543, id: "venipede", name: "Venipede", base_species: "Venipede",
        gen: 5, evos: &["whirlipede"], egg_groups: &["Bug"],
        ..SpeciesData::DEFAULT
    },
    "whirlipede" => SpeciesData {
        num: 544, id: "whirlipede", name: "Whirlipede", base_species: "Whirlipede",
        gen: 5, prevo: Some("venipede"), evos: &["scolipede"], egg_groups: &["Bug"],
        ..SpeciesData::DEFAULT
    },
    "scolipede" => SpeciesData {
        num: 545, id: "scolipede", name: "Scolipede", base_species: "Scolipede",
        gen: 5, prevo: Some("whirlipede"), egg_groups: &["Bug"],
        ..SpeciesData::DEFAULT
    },
    "sylveon" => SpeciesData {
        num: 700, id: "sylveon", name: "Sylveon", base_species: "Sylveon",
        gen: 6, female_ratio: 0.125, prevo: Some("eevee"), egg_groups: &["Field"],
        ..SpeciesData::DEFAULT
    },
    "diancie" => SpeciesData {
        num: 719, id: "diancie", name: "Diancie", base_species: "Diancie",
        gen: 6, gender: Some(Gender::Genderless), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
    "zeraora" => SpeciesData {
        num: 807, id: "zeraora", name: "Zeraora", base_species: "Zeraora",
        gen: 7, gender: Some(Gender::Genderless), egg_groups: &["Undiscovered"],
        ..SpeciesData::DEFAULT
    },
};

pub fn get_species(name: &str) -> Option<&'static SpeciesData> {
    POKEDEX.get(super::to_id(name).as_str())
}
