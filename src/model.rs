use pokemon_validator_core::set::PokemonSet;
use serde::Deserialize;

/// Input file for `--sets`: an optional format id and the sets to check.
#[derive(Debug, Deserialize)]
pub struct SetsFile {
    #[serde(default)]
    pub format: Option<String>,
    pub sets: Vec<PokemonSet>,
}

impl SetsFile {
    pub fn from_sets(sets: Vec<PokemonSet>) -> Self {
        Self { format: None, sets }
    }
}
