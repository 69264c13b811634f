//! Source file download
//!
//! Fetches the raw Dictybase exports and the DDPHENO database listed in
//! `download.yaml`. Files already on disk are left alone, so re-running
//! is cheap; each fresh download gets its size and SHA-256 logged.

use anyhow::{Context, Result};
use dicty_common::checksum::sha256_file;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Download manifest (`download.yaml`)
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadManifest {
    #[serde(default)]
    pub downloads: Vec<DownloadItem>,
}

/// One `{url, local_name}` entry of the manifest
#[derive(Debug, Clone, Deserialize)]
pub struct DownloadItem {
    pub url: String,
    pub local_name: PathBuf,
}

impl DownloadManifest {
    /// Load the manifest from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let manifest: DownloadManifest = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(manifest)
    }
}

/// Download every manifest entry that is not already present locally
pub async fn download_all(manifest_path: &Path) -> Result<()> {
    let manifest = DownloadManifest::load(manifest_path)?;

    if manifest.downloads.is_empty() {
        info!("No downloads configured in {}", manifest_path.display());
        return Ok(());
    }

    for item in &manifest.downloads {
        if let Some(parent) = item.local_name.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if item.local_name.exists() {
            info!("Skipping {} (already exists)", item.local_name.display());
            continue;
        }

        info!("Downloading {} -> {}", item.url, item.local_name.display());
        download_file(&item.url, &item.local_name).await?;

        let size = std::fs::metadata(&item.local_name)?.len();
        let checksum = sha256_file(&item.local_name)?;
        info!(
            bytes = size,
            sha256 = %checksum,
            "Downloaded {}",
            item.local_name.display()
        );
    }

    Ok(())
}

/// Download a single file with a progress bar
async fn download_file(url: &str, output_path: &Path) -> Result<()> {
    let client = reqwest::Client::new();
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        anyhow::bail!("Failed to download {}: {}", url, response.status());
    }

    let total_size = response.content_length().unwrap_or(0);

    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({eta})")?
            .progress_chars("#>-"),
    );
    pb.set_message(format!("Downloading {}", output_path.display()));

    let mut file = std::fs::File::create(output_path)?;
    let mut downloaded = 0u64;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        std::io::Write::write_all(&mut file, &chunk)?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    pb.finish_and_clear();

    Ok(())
}
