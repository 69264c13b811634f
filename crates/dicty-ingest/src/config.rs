//! Source-level constants for the Dictybase ingest
//!
//! Namespace prefixes, taxon and provenance values are configuration,
//! not logic: the transforms take an [`IngestConfig`] argument so a
//! different source system only needs different constants, not
//! different code.

use serde::{Deserialize, Serialize};

/// Namespace, taxon and provenance constants applied to every record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Prefix prepended to raw gene identifiers (e.g. "dictyBase:")
    pub gene_id_prefix: String,

    /// Taxon CURIE attached to every gene node
    pub taxon_id: String,

    /// Display label for the taxon
    pub taxon_label: String,

    /// Predicate used for gene-to-phenotype associations
    pub phenotype_predicate: String,

    /// Primary knowledge source for all emitted records
    pub primary_knowledge_source: String,

    /// Aggregator knowledge sources for association records
    pub aggregator_knowledge_sources: Vec<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            gene_id_prefix: "dictyBase:".to_string(),
            taxon_id: "NCBITaxon:44689".to_string(),
            taxon_label: "Dictyostelium discoideum".to_string(),
            phenotype_predicate: "biolink:has_phenotype".to_string(),
            primary_knowledge_source: "infores:dictybase".to_string(),
            aggregator_knowledge_sources: vec!["infores:monarchinitiative".to_string()],
        }
    }
}

impl IngestConfig {
    /// Qualify a raw gene identifier with the source namespace
    pub fn gene_curie(&self, raw_id: &str) -> String {
        format!("{}{}", self.gene_id_prefix, raw_id)
    }
}
