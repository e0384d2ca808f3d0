use serde::Serialize;
use serde_json::json;

use crate::set::PokemonSet;

/// Problems found for one set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetReport {
    pub name: String,
    pub species: String,
    pub problems: Vec<String>,
}

impl SetReport {
    pub fn new(set: &PokemonSet, problems: Vec<String>) -> Self {
        Self {
            name: set.display_name().to_string(),
            species: set.species.clone(),
            problems,
        }
    }

    pub fn is_legal(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Collected results for a batch of sets validated against one format.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ValidationReport {
    format: String,
    sets: Vec<SetReport>,
}

impl ValidationReport {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            sets: Vec::new(),
        }
    }

    pub fn record(&mut self, set: &PokemonSet, problems: Vec<String>) {
        self.sets.push(SetReport::new(set, problems));
    }

    pub fn push(&mut self, report: SetReport) {
        self.sets.push(report);
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn sets(&self) -> &[SetReport] {
        &self.sets
    }

    pub fn problem_count(&self) -> usize {
        self.sets.iter().map(|set| set.problems.len()).sum()
    }

    pub fn all_legal(&self) -> bool {
        self.sets.iter().all(SetReport::is_legal)
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "format": self.format,
            "legal": self.all_legal(),
            "problems": self.problem_count(),
            "sets": self.sets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_problems() {
        let mut report = ValidationReport::new("gen7ou");
        report.record(&PokemonSet::new("Snorlax"), Vec::new());
        report.record(
            &PokemonSet::new("Mew").with_name("Pinky"),
            vec!["a".to_string(), "b".to_string()],
        );
        assert!(!report.all_legal());
        assert_eq!(report.problem_count(), 2);

        let value = report.to_json();
        assert_eq!(value["format"], "gen7ou");
        assert_eq!(value["legal"], false);
        assert_eq!(value["sets"][1]["name"], "Pinky");
        assert_eq!(value["sets"][1]["species"], "Mew");
        assert_eq!(value["sets"][0]["problems"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn empty_report_is_legal() {
        assert!(ValidationReport::new("gen1ou").all_legal());
    }
}
