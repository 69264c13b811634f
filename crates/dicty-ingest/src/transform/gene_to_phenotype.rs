//! Mutant table transform

use dicty_common::{DictyError, Result};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::IngestConfig;
use crate::lookup::PhenotypeLookup;
use crate::model::{GeneToPhenotypeAssociation, Record, GENE_TO_PHENOTYPE_CATEGORY};
use crate::row::MutantRow;
use crate::transform::parse_delimited_list;

/// Convert one mutant row into zero or more association records
///
/// Rows listing more than one gene are skipped entirely: a multi-gene
/// strain is ambiguous about which gene each phenotype applies to, so
/// precision wins over recall. Phenotype names missing from the lookup
/// are skipped individually without aborting the rest of the row.
pub fn transform_gene_to_phenotype(
    row: &MutantRow,
    lookup: &PhenotypeLookup,
    config: &IngestConfig,
) -> Result<Vec<Record>> {
    if row.ddb_g_id.trim().is_empty() {
        return Err(DictyError::malformed_row("mutant", "DDB_G_ID"));
    }

    let gene_ids: Vec<&str> = row.ddb_g_id.split('|').collect();
    if gene_ids.len() > 1 {
        debug!(
            strain = %row.systematic_name,
            ddb_g_id = %row.ddb_g_id,
            "skipping multi-gene mutant row"
        );
        return Ok(Vec::new());
    }

    let subject = config.gene_curie(gene_ids[0].trim());

    let phenotype_names = parse_delimited_list(&row.phenotypes, &['|']);
    if phenotype_names.is_empty() {
        return Ok(Vec::new());
    }

    let mut records = Vec::with_capacity(phenotype_names.len());
    for name in &phenotype_names {
        let Some(phenotype_id) = lookup.get(name) else {
            warn!(
                strain = %row.systematic_name,
                phenotype = %name,
                "phenotype name has no DDPHENO mapping, skipping"
            );
            continue;
        };

        records.push(Record::GeneToPhenotype(GeneToPhenotypeAssociation {
            id: format!("uuid:{}", Uuid::new_v4()),
            category: vec![GENE_TO_PHENOTYPE_CATEGORY.to_string()],
            subject: subject.clone(),
            predicate: config.phenotype_predicate.clone(),
            object: phenotype_id.to_string(),
            primary_knowledge_source: config.primary_knowledge_source.clone(),
            aggregator_knowledge_source: config.aggregator_knowledge_sources.clone(),
        }));
    }

    Ok(records)
}
