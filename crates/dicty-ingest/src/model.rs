//! Output record types
//!
//! The normalized records emitted by the transforms, shaped after the
//! Biolink model: gene nodes and gene-to-phenotype association edges.
//! [`Record`] is the tagged union handed to the sink, with
//! [`Record::kind`] as the discriminator so callers filter by tag.

use serde::{Deserialize, Serialize};

/// Category CURIE for gene nodes
pub const GENE_CATEGORY: &str = "biolink:Gene";

/// Category CURIE for gene-to-phenotype edges
pub const GENE_TO_PHENOTYPE_CATEGORY: &str = "biolink:GeneToPhenotypicFeatureAssociation";

/// A normalized gene node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    /// Namespaced identifier, e.g. "dictyBase:DDB_G0269222"
    pub id: String,

    pub category: Vec<String>,

    /// Gene symbol, taken verbatim from the source row
    pub symbol: String,

    /// Display name; identical to the symbol for this source
    pub name: String,

    /// Parsed synonym list; empty when the source column is blank,
    /// never null
    pub synonym: Vec<String>,

    pub in_taxon: Vec<String>,
    pub in_taxon_label: String,

    pub provided_by: Vec<String>,
}

/// A normalized gene-to-phenotype association edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneToPhenotypeAssociation {
    /// Fresh identifier for the edge itself, e.g. "uuid:..."
    pub id: String,

    pub category: Vec<String>,

    /// Namespaced gene identifier
    pub subject: String,

    /// Fixed relation, e.g. "biolink:has_phenotype"
    pub predicate: String,

    /// Resolved phenotype ontology identifier, e.g. "DDPHENO:0000225"
    pub object: String,

    pub primary_knowledge_source: String,
    pub aggregator_knowledge_source: Vec<String>,
}

/// Discriminator tag for [`Record`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Gene,
    GeneToPhenotype,
}

/// Tagged union over everything a transform can emit
///
/// Serialized untagged: each variant already carries its Biolink
/// `category`, so the JSON lines need no extra wrapper field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Gene(Gene),
    GeneToPhenotype(GeneToPhenotypeAssociation),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Gene(_) => RecordKind::Gene,
            Record::GeneToPhenotype(_) => RecordKind::GeneToPhenotype,
        }
    }

    pub fn as_gene(&self) -> Option<&Gene> {
        match self {
            Record::Gene(gene) => Some(gene),
            _ => None,
        }
    }

    pub fn as_gene_to_phenotype(&self) -> Option<&GeneToPhenotypeAssociation> {
        match self {
            Record::GeneToPhenotype(association) => Some(association),
            _ => None,
        }
    }
}

impl From<Gene> for Record {
    fn from(gene: Gene) -> Self {
        Record::Gene(gene)
    }
}

impl From<GeneToPhenotypeAssociation> for Record {
    fn from(association: GeneToPhenotypeAssociation) -> Self {
        Record::GeneToPhenotype(association)
    }
}
