use super::AbilityData;

pub static ABILITIES: phf::Map<&'static str, AbilityData> = phf::phf_map! {
    "angerpoint" => AbilityData { id: "angerpoint", name: "Anger Point", gen: 4 },
    "blaze" => AbilityData { id: "blaze", name: "Blaze", gen: 3 },
    "chlorophyll" => AbilityData { id: "chlorophyll", name: "Chlorophyll", gen: 3 },
    "competitive" => AbilityData { id: "competitive", name: "Competitive", gen: 6 },
    "defiant" => AbilityData { id: "defiant", name: "Defiant", gen: 5 },
    "download" => AbilityData { id: "download", name: "Download", gen: 4 },
    "effectspore" => AbilityData { id: "effectspore", name: "Effect Spore", gen: 3 },
    "intimidate" => AbilityData { id: "intimidate", name: "Intimidate", gen: 3 },
    "justified" => AbilityData { id: "justified", name: "Justified", gen: 4 },
    "levitate" => AbilityData { id: "levitate", name: "Levitate", gen: 3 },
    "lightningrod" => AbilityData { id: "lightningrod", name: "Lightning Rod", gen: 3 },
    "moody" => AbilityData { id: "moody", name: "Moody", gen: 5 },
    "motordrive" => AbilityData { id: "motordrive", name: "Motor Drive", gen: 4 },
    "moxie" => AbilityData { id: "moxie", name: "Moxie", gen: 5 },
    "multitype" => AbilityData { id: "multitype", name: "Multitype", gen: 4 },
    "owntempo" => AbilityData { id: "owntempo", name: "Own Tempo", gen: 3 },
    "poisonheal" => AbilityData { id: "poisonheal", name: "Poison Heal", gen: 4 },
    "pressure" => AbilityData { id: "pressure", name: "Pressure", gen: 3 },
    "rattled" => AbilityData { id: "rattled", name: "Rattled", gen: 5 },
    "sandveil" => AbilityData { id: "sandveil", name: "Sand Veil", gen: 3 },
    "sapsipper" => AbilityData { id: "sapsipper", name: "Sap Sipper", gen: 5 },
    "serenegrace" => AbilityData { id: "serenegrace", name: "Serene Grace", gen: 3 },
    "simple" => AbilityData { id: "simple", name: "Simple", gen: 4 },
    "snowcloak" => AbilityData { id: "snowcloak", name: "Snow Cloak", gen: 4 },
    "speedboost" => AbilityData { id: "speedboost", name: "Speed Boost", gen: 3 },
    "static" => AbilityData { id: "static", name: "Static", gen: 3 },
    "steadfast" => AbilityData { id: "steadfast", name: "Steadfast", gen: 4 },
    "stormdrain" => AbilityData { id: "stormdrain", name: "Storm Drain", gen: 4 },
    "swiftswim" => AbilityData { id: "swiftswim", name: "Swift Swim", gen: 3 },
    "technician" => AbilityData { id: "technician", name: "Technician", gen: 4 },
    "thickfat" => AbilityData { id: "thickfat", name: "Thick Fat", gen: 3 },
    "torrent" => AbilityData { id: "torrent", name: "Torrent", gen: 3 },
    "weakarmor" => AbilityData { id: "weakarmor", name: "Weak Armor", gen: 5 },
    "wonderguard" => AbilityData { id: "wonderguard", name: "Wonder Guard", gen: 3 },
};

pub fn get_ability(name: &str) -> Option<&'static AbilityData> {
    ABILITIES.get(super::to_id(name).as_str())
}
