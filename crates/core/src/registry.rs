//! The identifier-to-scoring-function registry.
//!
//! The registry is populated once during process bootstrap, before the server
//! accepts traffic, and is read-only afterwards. That single-writer-then-
//! many-readers discipline is what makes it safe to share across concurrent
//! requests without locking.

use crate::output::ScoreOutput;
use crate::params::ParameterSet;
use crate::CalcResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A pure scoring function: validated parameters in, structured score out.
pub type ScoringFn = fn(&ParameterSet) -> CalcResult<ScoreOutput>;

/// Medical specialty a calculator is catalogued under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    Cardiology,
    Emergency,
    Gastroenterology,
    InfectiousDisease,
    Nephrology,
    Neurology,
    Psychiatry,
    Pulmonology,
}

impl Specialty {
    pub fn as_str(self) -> &'static str {
        match self {
            Specialty::Cardiology => "cardiology",
            Specialty::Emergency => "emergency",
            Specialty::Gastroenterology => "gastroenterology",
            Specialty::InfectiousDisease => "infectious_disease",
            Specialty::Nephrology => "nephrology",
            Specialty::Neurology => "neurology",
            Specialty::Psychiatry => "psychiatry",
            Specialty::Pulmonology => "pulmonology",
        }
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One registered calculator: identifier, catalog metadata, and the function.
#[derive(Clone)]
pub struct CalculatorEntry {
    /// Opaque string key; also the URL path segment of the calculator.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub specialty: Specialty,
    pub function: ScoringFn,
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("calculator '{0}' is already registered")]
    DuplicateId(&'static str),
}

/// The identifier → scoring-function map.
#[derive(Default)]
pub struct Registry {
    entries: BTreeMap<&'static str, CalculatorEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. A duplicate identifier is a configuration error and
    /// must abort startup.
    pub fn register(&mut self, entry: CalculatorEntry) -> Result<(), RegistryError> {
        if self.entries.contains_key(entry.id) {
            return Err(RegistryError::DuplicateId(entry.id));
        }
        self.entries.insert(entry.id, entry);
        Ok(())
    }

    /// Pure lookup. `None` means no calculator is registered under this
    /// identifier; the caller decides whether that is a 404 or a 500.
    pub fn resolve(&self, id: &str) -> Option<&CalculatorEntry> {
        self.entries.get(id)
    }

    /// Entries in identifier order.
    pub fn entries(&self) -> impl Iterator<Item = &CalculatorEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the full calculator catalog.
///
/// Must complete before the server starts accepting requests; after that the
/// returned registry is never mutated.
pub fn bootstrap() -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    crate::calculators::register_all(&mut registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoreOutput;

    fn noop(_: &ParameterSet) -> CalcResult<ScoreOutput> {
        Ok(ScoreOutput::new(0, "points", "s", "d", "i"))
    }

    #[test]
    fn test_register_rejects_duplicate_id() {
        let entry = CalculatorEntry {
            id: "dup",
            title: "Dup",
            description: "",
            specialty: Specialty::Cardiology,
            function: noop,
        };
        let mut registry = Registry::new();
        registry.register(entry.clone()).unwrap();
        assert!(matches!(
            registry.register(entry),
            Err(RegistryError::DuplicateId("dup"))
        ));
    }

    #[test]
    fn test_bootstrap_registers_full_catalog() {
        let registry = bootstrap().unwrap();
        assert_eq!(registry.len(), 16);
        // Every catalogued identifier must resolve to a callable.
        for id in [
            "cerebral_perfusion_pressure",
            "chads2",
            "child_pugh",
            "ciwa_ar",
            "cows",
            "curb_65",
            "decaf_score",
            "edacs",
            "euroscore_ii",
            "gad_7",
            "glasgow_coma_scale",
            "jones_criteria",
            "pesi",
            "serum_anion_gap",
            "virsta",
            "winters_formula",
        ] {
            assert!(registry.resolve(id).is_some(), "missing calculator '{id}'");
        }
    }

    #[test]
    fn test_entries_iterate_in_identifier_order() {
        let registry = bootstrap().unwrap();
        let ids: Vec<_> = registry.entries().map(|e| e.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
