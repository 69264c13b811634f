//! DDPHENO label extraction
//!
//! The DDPHENO ontology ships as a semantic-sql SQLite build. This step
//! pulls every `rdfs:label` statement for a DDPHENO term out of it and
//! writes the `id`/`name` TSV that the phenotype transform loads as its
//! lookup table.

use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::{error, info, warn};

const LABEL_QUERY: &str = "\
    SELECT subject AS id, value AS name \
    FROM rdfs_label_statement \
    WHERE predicate = 'rdfs:label' AND subject LIKE 'DDPHENO:%'";

/// Extract phenotype (id, name) pairs from the ontology database
///
/// Skips quietly when the database is absent or the TSV already exists.
/// SQLite failures are reported and swallowed here; they never reach
/// the transform core.
pub fn extract_phenotype_labels(db_path: &Path, tsv_path: &Path) -> Result<()> {
    if !db_path.exists() {
        warn!(
            "SQLite database {} not found, skipping phenotype mapping extraction",
            db_path.display()
        );
        return Ok(());
    }

    if tsv_path.exists() {
        info!("Skipping {} (already exists)", tsv_path.display());
        return Ok(());
    }

    info!(
        "Extracting phenotype mappings from {} -> {}",
        db_path.display(),
        tsv_path.display()
    );

    match dump_labels(db_path, tsv_path) {
        Ok(count) => info!("Extracted {} phenotype mappings", count),
        Err(e) => error!("Error extracting phenotype mappings: {}", e),
    }

    Ok(())
}

fn dump_labels(db_path: &Path, tsv_path: &Path) -> Result<usize> {
    let conn = Connection::open(db_path)?;
    let mut statement = conn.prepare(LABEL_QUERY)?;

    let rows = statement.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    if let Some(parent) = tsv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(tsv_path)?;
    writer.write_record(["id", "name"])?;

    let mut count = 0;
    for row in rows {
        let (id, name) = row?;
        writer.write_record([&id, &name])?;
        count += 1;
    }
    writer.flush()?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::PhenotypeLookup;

    fn create_test_db(path: &Path) {
        let conn = Connection::open(path).unwrap();
        conn.execute(
            "CREATE TABLE rdfs_label_statement (
                subject TEXT NOT NULL,
                predicate TEXT NOT NULL,
                value TEXT NOT NULL
            )",
            [],
        )
        .unwrap();

        let entries = [
            ("DDPHENO:0000225", "rdfs:label", "decreased slug migration"),
            ("DDPHENO:0000163", "rdfs:label", "aberrant spore morphology"),
            ("DDPHENO:0000163", "oio:hasDbXref", "not a label"),
            ("GO:0008150", "rdfs:label", "biological_process"),
        ];
        for (subject, predicate, value) in entries {
            conn.execute(
                "INSERT INTO rdfs_label_statement (subject, predicate, value) VALUES (?1, ?2, ?3)",
                [subject, predicate, value],
            )
            .unwrap();
        }
    }

    #[test]
    fn test_extract_writes_ddpheno_labels_only() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("ddpheno.db");
        let tsv_path = dir.path().join("ddpheno.tsv");
        create_test_db(&db_path);

        extract_phenotype_labels(&db_path, &tsv_path).unwrap();

        let contents = std::fs::read_to_string(&tsv_path).unwrap();
        assert!(contents.starts_with("id\tname\n"));
        assert!(contents.contains("DDPHENO:0000225\tdecreased slug migration"));
        assert!(!contents.contains("GO:0008150"));
        assert!(!contents.contains("not a label"));

        // the output feeds straight into the lookup loader
        let lookup = PhenotypeLookup::from_tsv(&tsv_path).unwrap();
        assert_eq!(lookup.len(), 2);
        assert_eq!(
            lookup.get("decreased slug migration"),
            Some("DDPHENO:0000225")
        );
    }

    #[test]
    fn test_missing_database_skips() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("absent.db");
        let tsv_path = dir.path().join("ddpheno.tsv");

        extract_phenotype_labels(&db_path, &tsv_path).unwrap();
        assert!(!tsv_path.exists());
    }

    #[test]
    fn test_existing_output_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("ddpheno.db");
        let tsv_path = dir.path().join("ddpheno.tsv");
        create_test_db(&db_path);
        std::fs::write(&tsv_path, "id\tname\nDDPHENO:0000001\tkept\n").unwrap();

        extract_phenotype_labels(&db_path, &tsv_path).unwrap();

        let contents = std::fs::read_to_string(&tsv_path).unwrap();
        assert_eq!(contents, "id\tname\nDDPHENO:0000001\tkept\n");
    }
}
