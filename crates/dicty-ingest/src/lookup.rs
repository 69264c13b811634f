//! Phenotype name to ontology ID lookup
//!
//! Loaded once per run from the two-column TSV produced by
//! `extract-phenotypes`, then read-only. Keys are stored trimmed;
//! matching is exact and case-preserving. A missing name is a normal
//! outcome, not an error.

use dicty_common::{DictyError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct LookupFileRecord {
    id: String,
    name: String,
}

/// Read-only mapping from phenotype display name to DDPHENO identifier
#[derive(Debug, Clone, Default)]
pub struct PhenotypeLookup {
    by_name: HashMap<String, String>,
}

impl PhenotypeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lookup from (name, id) pairs; used by tests and callers
    /// that already hold the mapping in memory
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let by_name = entries
            .into_iter()
            .map(|(name, id)| (name.into().trim().to_string(), id.into()))
            .collect();
        Self { by_name }
    }

    /// Load the lookup from an `id`/`name` TSV with a header line
    pub fn from_tsv(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .delimiter(b'\t')
            .from_reader(BufReader::new(file));

        let mut by_name = HashMap::new();
        for result in reader.deserialize() {
            let record: LookupFileRecord = result.map_err(|e| {
                DictyError::Parse(format!(
                    "failed to read phenotype mapping from {}: {}",
                    path.display(),
                    e
                ))
            })?;
            by_name.insert(record.name.trim().to_string(), record.id);
        }

        Ok(Self { by_name })
    }

    /// Resolve a display name to its ontology identifier
    pub fn get(&self, name: &str) -> Option<&str> {
        self.by_name.get(name.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
