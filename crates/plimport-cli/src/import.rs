//! The import run: config, retrieval, extraction, the two update passes,
//! report, acceptance gate, catalog write.

use std::path::Path;

use anyhow::Context;
use thiserror::Error;
use tracing::{info, warn};

use plimport_core::importer::{self, MAC_CATEGORIES, MAIN_CATEGORIES};
use plimport_core::models::report::PassOutcome;
use plimport_core::{
    Catalog, DocumentData, DocumentExtractor, ImportConfig, ImportReport, PdfTextExtractor,
};

use crate::fetch;
use crate::Cli;

/// How a run failed, mapped onto exit codes in `main`.
#[derive(Error, Debug)]
pub enum RunError {
    /// The acceptance ratio was below threshold and --force was not given.
    #[error("matched only {matched} of {total} items")]
    BelowThreshold { matched: usize, total: usize },

    /// Anything fatal: bad config, unreachable document, unreadable PDF.
    #[error(transparent)]
    Fatal(#[from] anyhow::Error),
}

/// Matched/total counts for the success message.
pub struct RunSummary {
    pub matched: usize,
    pub total: usize,
}

pub fn run(cli: &Cli) -> Result<RunSummary, RunError> {
    let config = ImportConfig::from_file(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;
    let pdf_url = config.required_pdf_url().map_err(anyhow::Error::from)?;

    let mut catalog = Catalog::load(&cli.output)
        .with_context(|| format!("failed to load catalog {}", cli.output.display()))?;

    let download_dir = tempfile::tempdir().context("failed to create download directory")?;
    let extractor = PdfTextExtractor::new();

    // Main document is required; its failure is fatal.
    let main_doc = load_document(&extractor, pdf_url, download_dir.path(), "main.pdf")
        .with_context(|| format!("failed to process main document {pdf_url}"))?;
    let main_pass = importer::update_prices(&mut catalog, &main_doc, MAIN_CATEGORIES);

    // The mac pass is independent: its failure must not discard the work
    // already done on the main categories.
    let mac_pass = match config.mac_pdf_url.as_deref() {
        Some(mac_url) => {
            match load_document(&extractor, mac_url, download_dir.path(), "mac.pdf") {
                Ok(mac_doc) => importer::update_prices(&mut catalog, &mac_doc, MAC_CATEGORIES),
                Err(err) => {
                    warn!("skipping mac document {mac_url}: {err:#}");
                    PassOutcome::default()
                }
            }
        }
        None => PassOutcome::default(),
    };

    let report = ImportReport::new(main_pass, mac_pass);
    let report_path = cli
        .output
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("import-report.json");
    report
        .write(&report_path)
        .with_context(|| format!("failed to write report {}", report_path.display()))?;
    info!("report written to {}", report_path.display());

    if !report.accepted(config.accept_threshold) && !cli.force {
        return Err(RunError::BelowThreshold {
            matched: report.matched,
            total: report.total,
        });
    }

    let mut sources = vec![pdf_url.to_string()];
    sources.extend(config.mac_pdf_url.iter().cloned());
    importer::stamp(&mut catalog, sources);
    catalog
        .save(&cli.output)
        .with_context(|| format!("failed to write catalog {}", cli.output.display()))?;

    Ok(RunSummary {
        matched: report.matched,
        total: report.total,
    })
}

/// Fetch one document and extract its rows and page blocks. Tables win when
/// the document yields any; otherwise every text line becomes a pseudo-row.
fn load_document(
    extractor: &PdfTextExtractor,
    source: &str,
    download_dir: &Path,
    filename: &str,
) -> anyhow::Result<DocumentData> {
    let path = fetch::fetch(source, download_dir, filename)?;

    let mut rows = extractor.extract_tables(&path)?;
    if rows.is_empty() {
        rows = extractor.extract_text_rows(&path)?;
    }
    let blocks = extractor.extract_text_blocks(&path)?;

    info!(
        "{source}: {} rows, {} text blocks",
        rows.len(),
        blocks.len()
    );
    Ok(DocumentData::new(rows, blocks))
}
