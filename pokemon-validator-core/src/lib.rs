//! Pokémon set legality checks, with data tables extracted from Pokemon Showdown.
//!
//! The main entry point is [`validator::validate`], which checks one
//! [`set::PokemonSet`] against a [`format::Format`] using any [`dex::Dex`].

pub mod data;
pub mod dex;
pub mod format;
pub mod parser;
pub mod report;
pub mod set;
pub mod stats;
pub mod validator;

pub use parser::parse_showdown_team;
pub use validator::{validate, Validator};

/// Commonly used exports for external consumers.
pub mod prelude {
    pub use crate::data::{to_id, Gender};
    pub use crate::dex::{Dex, StaticDex};
    pub use crate::format::{Clause, Format, FormatIdError, RuleSet};
    pub use crate::parser::parse_showdown_team;
    pub use crate::report::{SetReport, ValidationReport};
    pub use crate::set::PokemonSet;
    pub use crate::stats::{Stat, StatsTable};
    pub use crate::validator::{validate, Validator};
}
