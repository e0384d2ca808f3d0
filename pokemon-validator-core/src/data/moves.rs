use super::{Boosts, MoveData};

const fn raise(atk: i8, def: i8, spa: i8, spd: i8, spe: i8) -> Boosts {
    Boosts {
        atk,
        def,
        spa,
        spd,
        spe,
        accuracy: 0,
        evasion: 0,
    }
}

const Z_ATK_1: Option<Boosts> = Some(raise(1, 0, 0, 0, 0));
const Z_DEF_1: Option<Boosts> = Some(raise(0, 1, 0, 0, 0));
const Z_SPD_1: Option<Boosts> = Some(raise(0, 0, 0, 1, 0));
const Z_SPE_1: Option<Boosts> = Some(raise(0, 0, 0, 0, 1));
const Z_ALL_1: Option<Boosts> = Some(Boosts::all(1));

// Ref: pokemon-showdown/data/moves.ts (num omitted; `boosts` and `zMove.boost` kept).
pub static MOVES: phf::Map<&'static str, MoveData> = phf::phf_map! {
    "acupressure" => MoveData { id: "acupressure", name: "Acupressure", gen: 4, ..MoveData::DEFAULT },
    "agility" => MoveData {
        id: "agility", name: "Agility", move_type: "Psychic", boosts: raise(0, 0, 0, 0, 2),
        ..MoveData::DEFAULT
    },
    "amnesia" => MoveData {
        id: "amnesia", name: "Amnesia", move_type: "Psychic", boosts: raise(0, 0, 0, 2, 0),
        ..MoveData::DEFAULT
    },
    "batonpass" => MoveData { id: "batonpass", name: "Baton Pass", gen: 2, ..MoveData::DEFAULT },
    "bellydrum" => MoveData { id: "bellydrum", name: "Belly Drum", gen: 2, ..MoveData::DEFAULT },
    "bodyslam" => MoveData { id: "bodyslam", name: "Body Slam", ..MoveData::DEFAULT },
    "bonemerang" => MoveData {
        id: "bonemerang", name: "Bonemerang", move_type: "Ground", ..MoveData::DEFAULT
    },
    "bulkup" => MoveData {
        id: "bulkup", name: "Bulk Up", gen: 3, move_type: "Fighting", boosts: raise(1, 1, 0, 0, 0),
        ..MoveData::DEFAULT
    },
    "calmmind" => MoveData {
        id: "calmmind", name: "Calm Mind", gen: 3, move_type: "Psychic", boosts: raise(0, 0, 1, 1, 0),
        ..MoveData::DEFAULT
    },
    "celebrate" => MoveData {
        id: "celebrate", name: "Celebrate", gen: 6, z_boosts: Z_ALL_1, ..MoveData::DEFAULT
    },
    "chargebeam" => MoveData {
        id: "chargebeam", name: "Charge Beam", gen: 4, move_type: "Electric", ..MoveData::DEFAULT
    },
    "conversion" => MoveData {
        id: "conversion", name: "Conversion", z_boosts: Z_ALL_1, ..MoveData::DEFAULT
    },
    "curse" => MoveData { id: "curse", name: "Curse", gen: 2, move_type: "Ghost", ..MoveData::DEFAULT },
    "diamondstorm" => MoveData {
        id: "diamondstorm", name: "Diamond Storm", gen: 6, move_type: "Rock", ..MoveData::DEFAULT
    },
    "doubleteam" => MoveData {
        id: "doubleteam", name: "Double Team",
        boosts: Boosts { evasion: 1, ..Boosts::NONE },
        ..MoveData::DEFAULT
    },
    "dragondance" => MoveData {
        id: "dragondance", name: "Dragon Dance", gen: 3, move_type: "Dragon",
        boosts: raise(1, 0, 0, 0, 1),
        ..MoveData::DEFAULT
    },
    "earthquake" => MoveData {
        id: "earthquake", name: "Earthquake", move_type: "Ground", ..MoveData::DEFAULT
    },
    "encore" => MoveData {
        id: "encore", name: "Encore", gen: 2, z_boosts: Z_SPE_1, ..MoveData::DEFAULT
    },
    "fellstinger" => MoveData {
        id: "fellstinger", name: "Fell Stinger", gen: 6, move_type: "Bug", ..MoveData::DEFAULT
    },
    "fierydance" => MoveData {
        id: "fierydance", name: "Fiery Dance", gen: 5, move_type: "Fire", ..MoveData::DEFAULT
    },
    "fissure" => MoveData {
        id: "fissure", name: "Fissure", move_type: "Ground", ohko: true, ..MoveData::DEFAULT
    },
    "flamecharge" => MoveData {
        id: "flamecharge", name: "Flame Charge", gen: 5, move_type: "Fire", ..MoveData::DEFAULT
    },
    "flamethrower" => MoveData {
        id: "flamethrower", name: "Flamethrower", move_type: "Fire", ..MoveData::DEFAULT
    },
    "flowershield" => MoveData {
        id: "flowershield", name: "Flower Shield", gen: 6, move_type: "Fairy", ..MoveData::DEFAULT
    },
    "growl" => MoveData {
        id: "growl", name: "Growl", boosts: raise(-1, 0, 0, 0, 0), z_boosts: Z_DEF_1,
        ..MoveData::DEFAULT
    },
    "guillotine" => MoveData {
        id: "guillotine", name: "Guillotine", ohko: true, ..MoveData::DEFAULT
    },
    "happyhour" => MoveData {
        id: "happyhour", name: "Happy Hour", gen: 6, z_boosts: Z_ALL_1, ..MoveData::DEFAULT
    },
    "horndrill" => MoveData {
        id: "horndrill", name: "Horn Drill", ohko: true, ..MoveData::DEFAULT
    },
    "hydropump" => MoveData {
        id: "hydropump", name: "Hydro Pump", move_type: "Water", ..MoveData::DEFAULT
    },
    "hypnosis" => MoveData {
        id: "hypnosis", name: "Hypnosis", move_type: "Psychic", z_boosts: Z_SPE_1,
        ..MoveData::DEFAULT
    },
    "icebeam" => MoveData { id: "icebeam", name: "Ice Beam", move_type: "Ice", ..MoveData::DEFAULT },
    "irondefense" => MoveData {
        id: "irondefense", name: "Iron Defense", gen: 3, move_type: "Steel",
        boosts: raise(0, 2, 0, 0, 0),
        ..MoveData::DEFAULT
    },
    "lovelykiss" => MoveData {
        id: "lovelykiss", name: "Lovely Kiss", z_boosts: Z_SPE_1, ..MoveData::DEFAULT
    },
    "meanlook" => MoveData {
        id: "meanlook", name: "Mean Look", gen: 2, z_boosts: Z_SPD_1, ..MoveData::DEFAULT
    },
    "minimize" => MoveData {
        id: "minimize", name: "Minimize",
        boosts: Boosts { evasion: 2, ..Boosts::NONE },
        ..MoveData::DEFAULT
    },
    "nastyplot" => MoveData {
        id: "nastyplot", name: "Nasty Plot", gen: 4, move_type: "Dark", boosts: raise(0, 0, 2, 0, 0),
        ..MoveData::DEFAULT
    },
    "poweruppunch" => MoveData {
        id: "poweruppunch", name: "Power-Up Punch", gen: 6, move_type: "Fighting",
        ..MoveData::DEFAULT
    },
    "protect" => MoveData { id: "protect", name: "Protect", gen: 2, ..MoveData::DEFAULT },
    "psychic" => MoveData { id: "psychic", name: "Psychic", move_type: "Psychic", ..MoveData::DEFAULT },
    "quiverdance" => MoveData {
        id: "quiverdance", name: "Quiver Dance", gen: 5, move_type: "Bug",
        boosts: raise(0, 0, 1, 1, 1),
        ..MoveData::DEFAULT
    },
    "rage" => MoveData { id: "rage", name: "Rage", ..MoveData::DEFAULT },
    "raindance" => MoveData {
        id: "raindance", name: "Rain Dance", gen: 2, move_type: "Water", z_boosts: Z_SPE_1,
        ..MoveData::DEFAULT
    },
    "recover" => MoveData { id: "recover", name: "Recover", ..MoveData::DEFAULT },
    "rest" => MoveData { id: "rest", name: "Rest", move_type: "Psychic", ..MoveData::DEFAULT },
    "rockpolish" => MoveData {
        id: "rockpolish", name: "Rock Polish", gen: 4, move_type: "Rock", boosts: raise(0, 0, 0, 0, 2),
        ..MoveData::DEFAULT
    },
    "rototiller" => MoveData {
        id: "rototiller", name: "Rototiller", gen: 6, move_type: "Ground", ..MoveData::DEFAULT
    },
    "sheercold" => MoveData {
        id: "sheercold", name: "Sheer Cold", gen: 3, move_type: "Ice", ohko: true,
        ..MoveData::DEFAULT
    },
    "shellsmash" => MoveData {
        id: "shellsmash", name: "Shell Smash", gen: 5,
        boosts: Boosts { atk: 2, def: -1, spa: 2, spd: -1, spe: 2, ..Boosts::NONE },
        ..MoveData::DEFAULT
    },
    "sing" => MoveData { id: "sing", name: "Sing", z_boosts: Z_SPE_1, ..MoveData::DEFAULT },
    "skullbash" => MoveData { id: "skullbash", name: "Skull Bash", ..MoveData::DEFAULT },
    "sleeppowder" => MoveData {
        id: "sleeppowder", name: "Sleep Powder", move_type: "Grass", z_boosts: Z_SPE_1,
        ..MoveData::DEFAULT
    },
    "sleeptalk" => MoveData { id: "sleeptalk", name: "Sleep Talk", gen: 2, ..MoveData::DEFAULT },
    "spiderweb" => MoveData {
        id: "spiderweb", name: "Spider Web", gen: 2, move_type: "Bug", z_boosts: Z_DEF_1,
        ..MoveData::DEFAULT
    },
    "splash" => MoveData {
        id: "splash", name: "Splash", z_boosts: Some(raise(3, 0, 0, 0, 0)), ..MoveData::DEFAULT
    },
    "spore" => MoveData { id: "spore", name: "Spore", move_type: "Grass", ..MoveData::DEFAULT },
    "stockpile" => MoveData { id: "stockpile", name: "Stockpile", gen: 3, ..MoveData::DEFAULT },
    "stringshot" => MoveData {
        id: "stringshot", name: "String Shot", move_type: "Bug", boosts: raise(0, 0, 0, 0, -2),
        z_boosts: Z_SPE_1,
        ..MoveData::DEFAULT
    },
    "substitute" => MoveData { id: "substitute", name: "Substitute", ..MoveData::DEFAULT },
    "sunnyday" => MoveData {
        id: "sunnyday", name: "Sunny Day", gen: 2, move_type: "Fire", z_boosts: Z_SPE_1,
        ..MoveData::DEFAULT
    },
    "surf" => MoveData { id: "surf", name: "Surf", move_type: "Water", ..MoveData::DEFAULT },
    "swagger" => MoveData {
        id: "swagger", name: "Swagger", gen: 2, boosts: raise(2, 0, 0, 0, 0), ..MoveData::DEFAULT
    },
    "swordsdance" => MoveData {
        id: "swordsdance", name: "Swords Dance", boosts: raise(2, 0, 0, 0, 0), ..MoveData::DEFAULT
    },
    "tackle" => MoveData { id: "tackle", name: "Tackle", ..MoveData::DEFAULT },
    "tailwhip" => MoveData {
        id: "tailwhip", name: "Tail Whip", boosts: raise(0, -1, 0, 0, 0), z_boosts: Z_ATK_1,
        ..MoveData::DEFAULT
    },
    "thunderbolt" => MoveData {
        id: "thunderbolt", name: "Thunderbolt", move_type: "Electric", ..MoveData::DEFAULT
    },
    "thunderwave" => MoveData {
        id: "thunderwave", name: "Thunder Wave", move_type: "Electric", ..MoveData::DEFAULT
    },
    "toxic" => MoveData { id: "toxic", name: "Toxic", move_type: "Poison", ..MoveData::DEFAULT },
    "uturn" => MoveData { id: "uturn", name: "U-turn", gen: 4, move_type: "Bug", ..MoveData::DEFAULT },
    "willowisp" => MoveData {
        id: "willowisp", name: "Will-O-Wisp", gen: 3, move_type: "Fire", ..MoveData::DEFAULT
    },
};

pub fn get_move(name: &str) -> Option<&'static MoveData> {
    MOVES.get(super::to_id(name).as_str())
}
