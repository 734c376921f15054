//! Import run configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ImportError, Result};

/// Configuration for one import run, read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// URL (or local path) of the main price-list document. Required.
    pub pdf_url: Option<String>,

    /// URL (or local path) of the Mac price-list document. Optional; when
    /// absent the mac pass simply processes zero items.
    pub mac_pdf_url: Option<String>,

    /// Minimum matched/total ratio required before the catalog is written.
    /// Tuned per deployment: 1.0 for unattended runs, lower for ad-hoc ones.
    pub accept_threshold: f64,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            pdf_url: None,
            mac_pdf_url: None,
            accept_threshold: 1.0,
        }
    }
}

impl ImportConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// The main document URL; missing `pdf_url` is a configuration error.
    pub fn required_pdf_url(&self) -> Result<&str> {
        self.pdf_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ImportError::Config("missing pdf_url in import config".to_string()))
    }
}
