//! Record sink
//!
//! Serializes records as JSON lines. The sink takes whatever sequence a
//! row transform produced, heterogeneous or empty, in emission order.

use dicty_common::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::Record;

/// JSON-lines record writer
pub struct JsonlWriter<W: Write> {
    inner: W,
    written: u64,
}

impl JsonlWriter<BufWriter<File>> {
    /// Create (or truncate) an output file, creating parent directories
    /// as needed
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Append one row's worth of records, one JSON object per line
    pub fn write_records(&mut self, records: &[Record]) -> Result<()> {
        for record in records {
            serde_json::to_writer(&mut self.inner, record)?;
            self.inner.write_all(b"\n")?;
            self.written += 1;
        }
        Ok(())
    }

    /// Number of records written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush and return the total record count
    pub fn finish(mut self) -> Result<u64> {
        self.inner.flush()?;
        Ok(self.written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IngestConfig;
    use crate::lookup::PhenotypeLookup;
    use crate::row::{GeneRow, MutantRow};
    use crate::transform::{transform_gene, transform_gene_to_phenotype};

    fn gene_records() -> Vec<Record> {
        let row = GeneRow {
            gene_id: "DDB_G0269222".to_string(),
            gene_name: "gefB".to_string(),
            synonyms: String::new(),
        };
        transform_gene(&row, &IngestConfig::default()).unwrap()
    }

    fn association_records() -> Vec<Record> {
        let row = MutantRow {
            systematic_name: "DBS0235594".to_string(),
            strain_descriptor: "CHE10".to_string(),
            associated_genes: "cbpC".to_string(),
            ddb_g_id: "DDB_G0283613".to_string(),
            phenotypes: "decreased slug migration".to_string(),
        };
        let lookup =
            PhenotypeLookup::from_entries([("decreased slug migration", "DDPHENO:0000225")]);
        transform_gene_to_phenotype(&row, &lookup, &IngestConfig::default()).unwrap()
    }

    #[test]
    fn test_writes_one_line_per_record() {
        let mut writer = JsonlWriter::new(Vec::new());
        writer.write_records(&gene_records()).unwrap();
        writer.write_records(&[]).unwrap();
        writer.write_records(&gene_records()).unwrap();
        assert_eq!(writer.written(), 2);

        let output = String::from_utf8(writer.inner).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["id"], "dictyBase:DDB_G0269222");
    }

    #[test]
    fn test_mixed_sequence_in_one_call() {
        let mut records = gene_records();
        records.extend(association_records());

        let mut writer = JsonlWriter::new(Vec::new());
        writer.write_records(&records).unwrap();
        assert_eq!(writer.written(), 2);

        let output = String::from_utf8(writer.inner).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let node: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(node["category"][0], "biolink:Gene");
        assert_eq!(node["symbol"], "gefB");

        let edge: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(
            edge["category"][0],
            "biolink:GeneToPhenotypicFeatureAssociation"
        );
        assert_eq!(edge["subject"], "dictyBase:DDB_G0283613");
        assert_eq!(edge["object"], "DDPHENO:0000225");
    }

    #[test]
    fn test_create_makes_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output/nodes.jsonl");
        let mut writer = JsonlWriter::create(&path).unwrap();
        writer.write_records(&gene_records()).unwrap();
        let count = writer.finish().unwrap();
        assert_eq!(count, 1);
        assert!(path.exists());
    }
}
