//! Ingest runners
//!
//! Wire a row source, a transform and the record sink together for one
//! source table: read rows in file order, transform each independently,
//! append whatever records come out.

use dicty_common::Result;
use std::path::Path;
use tracing::info;

use crate::config::IngestConfig;
use crate::lookup::PhenotypeLookup;
use crate::row::{read_rows, GeneRow, MutantRow};
use crate::transform::{transform_gene, transform_gene_to_phenotype};
use crate::writer::JsonlWriter;

/// Totals for one ingest run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestCounts {
    pub rows_read: u64,
    pub records_written: u64,
    /// Rows that produced no records (multi-gene or empty-phenotype
    /// mutant rows)
    pub rows_skipped: u64,
}

/// Transform the gene table into gene node records
pub fn run_gene_ingest(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &IngestConfig,
) -> Result<IngestCounts> {
    let input = input.as_ref();
    info!("Transforming gene table {}", input.display());

    let rows: Vec<GeneRow> = read_rows(input)?;
    let mut writer = JsonlWriter::create(output.as_ref())?;
    let mut counts = IngestCounts::default();

    for row in &rows {
        counts.rows_read += 1;
        let records = transform_gene(row, config)?;
        writer.write_records(&records)?;
    }

    counts.records_written = writer.finish()?;
    info!(
        rows = counts.rows_read,
        records = counts.records_written,
        "Gene ingest complete"
    );
    Ok(counts)
}

/// Transform the mutant table into gene-to-phenotype association records
pub fn run_phenotype_ingest(
    input: impl AsRef<Path>,
    mappings: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &IngestConfig,
) -> Result<IngestCounts> {
    let input = input.as_ref();

    let lookup = PhenotypeLookup::from_tsv(mappings.as_ref())?;
    info!(
        mappings = lookup.len(),
        "Transforming mutant table {}",
        input.display()
    );

    let rows: Vec<MutantRow> = read_rows(input)?;
    let mut writer = JsonlWriter::create(output.as_ref())?;
    let mut counts = IngestCounts::default();

    for row in &rows {
        counts.rows_read += 1;
        let records = transform_gene_to_phenotype(row, &lookup, config)?;
        if records.is_empty() {
            counts.rows_skipped += 1;
        }
        writer.write_records(&records)?;
    }

    counts.records_written = writer.finish()?;
    info!(
        rows = counts.rows_read,
        records = counts.records_written,
        skipped = counts.rows_skipped,
        "Gene-to-phenotype ingest complete"
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_gene_ingest_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_file(
            &dir,
            "gene_information.txt",
            "GENE ID\tGene Name\tSynonyms\n\
             DDB_G0269222\tgefB\tRasGEFB, RasGEF\n\
             DDB_G0267364\tDDB_G0267364_RTE\t\n",
        );
        let output = dir.path().join("nodes.jsonl");

        let counts = run_gene_ingest(&input, &output, &IngestConfig::default()).unwrap();
        assert_eq!(counts.rows_read, 2);
        assert_eq!(counts.records_written, 2);

        let contents = fs::read_to_string(&output).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["id"], "dictyBase:DDB_G0269222");
        assert_eq!(first["synonym"][0], "RasGEFB");
    }

    #[test]
    fn test_gene_ingest_empty_id_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_file(
            &dir,
            "gene_information.txt",
            "GENE ID\tGene Name\tSynonyms\n\tgefB\t\n",
        );
        let output = dir.path().join("nodes.jsonl");

        let result = run_gene_ingest(&input, &output, &IngestConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_phenotype_ingest_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_file(
            &dir,
            "all-mutants-ddb_g.txt",
            "Systematic_Name\tStrain_Descriptor\tAssociated gene(s)\tDDB_G_ID\tPhenotypes\n\
             DBS0235594\tCHE10\tcbpC\tDDB_G0283613\t decreased slug migration | aberrant spore morphology \n\
             DBS0235595\tCHE11\tcbpC|abcA\tDDB_G0283613|DDB_G0000001\tdecreased slug migration\n\
             DBS0235596\tCHE12\tcbpC\tDDB_G0283613\t\n",
        );
        let mappings = write_file(
            &dir,
            "ddpheno.tsv",
            "id\tname\n\
             DDPHENO:0000225\tdecreased slug migration\n\
             DDPHENO:0000163\taberrant spore morphology\n",
        );
        let output = dir.path().join("edges.jsonl");

        let counts =
            run_phenotype_ingest(&input, &mappings, &output, &IngestConfig::default()).unwrap();
        assert_eq!(counts.rows_read, 3);
        assert_eq!(counts.records_written, 2);
        assert_eq!(counts.rows_skipped, 2);

        let contents = fs::read_to_string(&output).unwrap();
        for line in contents.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["subject"], "dictyBase:DDB_G0283613");
            assert_eq!(value["predicate"], "biolink:has_phenotype");
        }
    }
}
