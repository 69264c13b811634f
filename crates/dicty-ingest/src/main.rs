//! dicty-ingest - Dictybase knowledge-graph ingestion tool

use anyhow::Result;
use clap::{Parser, Subcommand};
use dicty_common::logging::{init_logging, LogConfig, LogLevel};
use dicty_ingest::config::IngestConfig;
use dicty_ingest::{download, extract, runner};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dicty-ingest")]
#[command(author, version, about = "Dictybase knowledge-graph ingestion tool")]
struct Cli {
    /// Pipeline step to run
    #[command(subcommand)]
    step: Step,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Step {
    /// Download raw source files listed in the manifest
    Download {
        /// Download manifest file
        #[arg(short, long, default_value = "download.yaml")]
        manifest: PathBuf,
    },

    /// Extract the phenotype name-to-ID lookup TSV from the DDPHENO
    /// SQLite database
    ExtractPhenotypes {
        /// Path to the DDPHENO semantic-sql database
        #[arg(short, long, default_value = "data/ddpheno.db")]
        database: PathBuf,

        /// Output TSV path
        #[arg(short, long, default_value = "data/ddpheno.tsv")]
        output: PathBuf,
    },

    /// Transform the gene table into gene node records
    Genes {
        /// Gene table input
        #[arg(short, long, default_value = "data/gene_information.txt")]
        input: PathBuf,

        /// Output JSON-lines file
        #[arg(short, long, default_value = "output/dictybase_gene_nodes.jsonl")]
        output: PathBuf,
    },

    /// Transform the mutant table into gene-to-phenotype associations
    Phenotypes {
        /// Mutant table input
        #[arg(short, long, default_value = "data/all-mutants-ddb_g.txt")]
        input: PathBuf,

        /// Phenotype name-to-ID lookup TSV
        #[arg(short, long, default_value = "data/ddpheno.tsv")]
        mappings: PathBuf,

        /// Output JSON-lines file
        #[arg(
            short,
            long,
            default_value = "output/dictybase_gene_to_phenotype_edges.jsonl"
        )]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    // Environment variables take precedence over the flag
    let log_config = LogConfig::from_env_or(LogConfig::new(log_level))?;
    init_logging(&log_config)?;

    let config = IngestConfig::default();

    match cli.step {
        Step::Download { manifest } => {
            download::download_all(&manifest).await?;
        },
        Step::ExtractPhenotypes { database, output } => {
            extract::extract_phenotype_labels(&database, &output)?;
        },
        Step::Genes { input, output } => {
            runner::run_gene_ingest(&input, &output, &config)?;
        },
        Step::Phenotypes {
            input,
            mappings,
            output,
        } => {
            runner::run_phenotype_ingest(&input, &mappings, &output, &config)?;
        },
    }

    info!("Done");
    Ok(())
}
