//! Dictybase knowledge-graph ingest
//!
//! Turns two flat Dictybase exports into normalized Biolink-style
//! records: the gene table becomes gene nodes, the mutant table becomes
//! gene-to-phenotype association edges resolved against the DDPHENO
//! ontology.
//!
//! # Pipeline
//!
//! 1. `download`: fetch the raw source files listed in `download.yaml`
//! 2. `extract-phenotypes`: dump the DDPHENO name-to-ID lookup TSV
//!    from the ontology's SQLite build
//! 3. `genes` / `phenotypes`: run the row transforms and write JSON
//!    lines
//!
//! # Example
//!
//! ```no_run
//! use dicty_ingest::config::IngestConfig;
//! use dicty_ingest::runner::run_gene_ingest;
//!
//! fn main() -> dicty_common::Result<()> {
//!     let config = IngestConfig::default();
//!     let counts = run_gene_ingest(
//!         "data/gene_information.txt",
//!         "output/dictybase_gene_nodes.jsonl",
//!         &config,
//!     )?;
//!     println!("wrote {} gene records", counts.records_written);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod download;
pub mod extract;
pub mod lookup;
pub mod model;
pub mod row;
pub mod runner;
pub mod transform;
pub mod writer;
