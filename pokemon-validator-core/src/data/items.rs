use super::ItemData;

// Ref: pokemon-showdown/data/items.ts. Signature Z-crystals (Eevium Z, Kommonium Z)
// have no `z_move_type`; they only matter to the Baton Pass item lists.
pub static ITEMS: phf::Map<&'static str, ItemData> = phf::phf_map! {
    "absorbbulb" => ItemData { id: "absorbbulb", name: "Absorb Bulb", gen: 5, ..ItemData::DEFAULT },
    "apicotberry" => ItemData { id: "apicotberry", name: "Apicot Berry", gen: 3, ..ItemData::DEFAULT },
    "berserkgene" => ItemData { id: "berserkgene", name: "Berserk Gene", ..ItemData::DEFAULT },
    "blazikenite" => ItemData { id: "blazikenite", name: "Blazikenite", gen: 6, ..ItemData::DEFAULT },
    "buginiumz" => ItemData {
        id: "buginiumz", name: "Buginium Z", gen: 7, z_move_type: Some("Bug"),
    },
    "cellbattery" => ItemData { id: "cellbattery", name: "Cell Battery", gen: 5, ..ItemData::DEFAULT },
    "choiceband" => ItemData { id: "choiceband", name: "Choice Band", gen: 3, ..ItemData::DEFAULT },
    "choicescarf" => ItemData { id: "choicescarf", name: "Choice Scarf", gen: 4, ..ItemData::DEFAULT },
    "eeviumz" => ItemData { id: "eeviumz", name: "Eevium Z", gen: 7, ..ItemData::DEFAULT },
    "electriumz" => ItemData {
        id: "electriumz", name: "Electrium Z", gen: 7, z_move_type: Some("Electric"),
    },
    "firiumz" => ItemData {
        id: "firiumz", name: "Firium Z", gen: 7, z_move_type: Some("Fire"),
    },
    "ganlonberry" => ItemData { id: "ganlonberry", name: "Ganlon Berry", gen: 3, ..ItemData::DEFAULT },
    "ghostiumz" => ItemData {
        id: "ghostiumz", name: "Ghostium Z", gen: 7, z_move_type: Some("Ghost"),
    },
    "grassiumz" => ItemData {
        id: "grassiumz", name: "Grassium Z", gen: 7, z_move_type: Some("Grass"),
    },
    "griseousorb" => ItemData { id: "griseousorb", name: "Griseous Orb", gen: 4, ..ItemData::DEFAULT },
    "keeberry" => ItemData { id: "keeberry", name: "Kee Berry", gen: 6, ..ItemData::DEFAULT },
    "kommoniumz" => ItemData { id: "kommoniumz", name: "Kommonium Z", gen: 7, ..ItemData::DEFAULT },
    "leftovers" => ItemData { id: "leftovers", name: "Leftovers", ..ItemData::DEFAULT },
    "liechiberry" => ItemData { id: "liechiberry", name: "Liechi Berry", gen: 3, ..ItemData::DEFAULT },
    "lifeorb" => ItemData { id: "lifeorb", name: "Life Orb", gen: 4, ..ItemData::DEFAULT },
    "lightball" => ItemData { id: "lightball", name: "Light Ball", ..ItemData::DEFAULT },
    "luminousmoss" => ItemData { id: "luminousmoss", name: "Luminous Moss", gen: 6, ..ItemData::DEFAULT },
    "marangaberry" => ItemData { id: "marangaberry", name: "Maranga Berry", gen: 6, ..ItemData::DEFAULT },
    "normaliumz" => ItemData {
        id: "normaliumz", name: "Normalium Z", gen: 7, z_move_type: Some("Normal"),
    },
    "petayaberry" => ItemData { id: "petayaberry", name: "Petaya Berry", gen: 3, ..ItemData::DEFAULT },
    "psychiumz" => ItemData {
        id: "psychiumz", name: "Psychium Z", gen: 7, z_move_type: Some("Psychic"),
    },
    "salacberry" => ItemData { id: "salacberry", name: "Salac Berry", gen: 3, ..ItemData::DEFAULT },
    "snowball" => ItemData { id: "snowball", name: "Snowball", gen: 6, ..ItemData::DEFAULT },
    "thickclub" => ItemData { id: "thickclub", name: "Thick Club", ..ItemData::DEFAULT },
    "wateriumz" => ItemData {
        id: "wateriumz", name: "Waterium Z", gen: 7, z_move_type: Some("Water"),
    },
    "weaknesspolicy" => ItemData {
        id: "weaknesspolicy", name: "Weakness Policy", gen: 6, ..ItemData::DEFAULT
    },
};

pub fn get_item(name: &str) -> Option<&'static ItemData> {
    ITEMS.get(super::to_id(name).as_str())
}
