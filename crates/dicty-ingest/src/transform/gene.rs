//! Gene table transform

use dicty_common::{DictyError, Result};

use crate::config::IngestConfig;
use crate::model::{Gene, Record, GENE_CATEGORY};
use crate::row::GeneRow;
use crate::transform::parse_delimited_list;

/// Convert one gene row into exactly one gene record
///
/// The symbol and display name are the raw `Gene Name` value verbatim,
/// even when it duplicates the gene ID as a placeholder. A missing or
/// empty `GENE ID` is fatal for the row; no partial record is emitted.
pub fn transform_gene(row: &GeneRow, config: &IngestConfig) -> Result<Vec<Record>> {
    if row.gene_id.trim().is_empty() {
        return Err(DictyError::malformed_row("gene", "GENE ID"));
    }

    let gene = Gene {
        id: config.gene_curie(&row.gene_id),
        category: vec![GENE_CATEGORY.to_string()],
        symbol: row.gene_name.clone(),
        name: row.gene_name.clone(),
        synonym: parse_delimited_list(&row.synonyms, &[',', '|']),
        in_taxon: vec![config.taxon_id.clone()],
        in_taxon_label: config.taxon_label.clone(),
        provided_by: vec![config.primary_knowledge_source.clone()],
    };

    Ok(vec![Record::Gene(gene)])
}
