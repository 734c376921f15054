//! Document retrieval.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use tracing::info;

/// Hard cap on one document download.
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Resolve a document source to a local file path.
///
/// `http(s)` URLs are downloaded into `download_dir` under `filename` with
/// an explicit timeout; anything else is treated as a local filesystem path
/// (offline runs and tests).
pub fn fetch(source: &str, download_dir: &Path, filename: &str) -> anyhow::Result<PathBuf> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        let response = client
            .get(source)
            .send()
            .with_context(|| format!("failed to fetch {source}"))?
            .error_for_status()
            .with_context(|| format!("failed to fetch {source}"))?;
        let bytes = response
            .bytes()
            .with_context(|| format!("failed to read body of {source}"))?;

        let path = download_dir.join(filename);
        fs::write(&path, &bytes)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("downloaded {source} ({} bytes)", bytes.len());
        Ok(path)
    } else {
        let path = PathBuf::from(source);
        if !path.is_file() {
            anyhow::bail!("document not found: {}", path.display());
        }
        Ok(path)
    }
}
