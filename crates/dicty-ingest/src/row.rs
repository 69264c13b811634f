//! Typed source rows and the tab-separated row source
//!
//! Column names here match the upstream Dictybase exports exactly.
//! Optional columns carry explicit empty-string defaults via
//! `#[serde(default)]`; extra columns in the files are ignored.

use dicty_common::{DictyError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One row of the gene table (`gene_information.txt`)
#[derive(Debug, Clone, Deserialize)]
pub struct GeneRow {
    #[serde(rename = "GENE ID")]
    pub gene_id: String,

    /// May duplicate the gene ID when no real name exists upstream
    #[serde(rename = "Gene Name", default)]
    pub gene_name: String,

    /// Comma-or-pipe-delimited, possibly empty
    #[serde(rename = "Synonyms", default)]
    pub synonyms: String,
}

/// One row of the mutant table (`all-mutants-ddb_g.txt`)
#[derive(Debug, Clone, Deserialize)]
pub struct MutantRow {
    #[serde(rename = "Systematic_Name", default)]
    pub systematic_name: String,

    #[serde(rename = "Strain_Descriptor", default)]
    pub strain_descriptor: String,

    /// Pipe-delimited, parallel to `DDB_G_ID`; not consumed by the
    /// transform but kept for log context
    #[serde(rename = "Associated gene(s)", default)]
    pub associated_genes: String,

    /// Pipe-delimited list of one or more gene identifiers
    #[serde(rename = "DDB_G_ID")]
    pub ddb_g_id: String,

    /// Pipe-delimited free-text phenotype names, possibly empty
    #[serde(rename = "Phenotypes", default)]
    pub phenotypes: String,
}

/// Read a tab-separated table into typed rows, in file order
pub fn read_rows<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b'\t')
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: T = result.map_err(|e| {
            DictyError::Parse(format!("failed to read row from {}: {}", path.display(), e))
        })?;
        rows.push(row);
    }

    Ok(rows)
}
