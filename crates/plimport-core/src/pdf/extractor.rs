//! PDF text extraction using pdf-extract.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use tracing::debug;

use super::{DocumentExtractor, Result};
use crate::error::PdfError;
use crate::models::ExtractedRow;

lazy_static! {
    // A run of two or more whitespace characters marks a column gap in
    // text extracted from a tabular layout.
    static ref COLUMN_GAP: Regex = Regex::new(r"\s{2,}").unwrap();
}

/// Document extractor over the text layer of a PDF.
///
/// Tables are recovered heuristically: a line whose text splits into two or
/// more cells at column gaps counts as a table row. Documents without such
/// lines yield no tables and callers fall back to plain text rows.
#[derive(Debug, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    fn pages(&self, path: &Path) -> Result<Vec<String>> {
        let pages = pdf_extract::extract_text_by_pages(path)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        if pages.is_empty() {
            return Err(PdfError::NoPages);
        }
        Ok(pages)
    }
}

impl DocumentExtractor for PdfTextExtractor {
    fn extract_tables(&self, path: &Path) -> Result<Vec<ExtractedRow>> {
        let mut rows = Vec::new();
        for page in self.pages(path)? {
            for line in page.lines() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let cells: Vec<String> = COLUMN_GAP
                    .split(line)
                    .map(|cell| cell.trim().to_string())
                    .filter(|cell| !cell.is_empty())
                    .collect();
                if cells.len() >= 2 {
                    rows.push(ExtractedRow::new(cells));
                }
            }
        }
        debug!("extracted {} table rows from {}", rows.len(), path.display());
        Ok(rows)
    }

    fn extract_text_rows(&self, path: &Path) -> Result<Vec<ExtractedRow>> {
        let mut rows = Vec::new();
        for page in self.pages(path)? {
            for line in page.lines() {
                let line = line.trim();
                if !line.is_empty() {
                    rows.push(ExtractedRow::line(line));
                }
            }
        }
        debug!("extracted {} text rows from {}", rows.len(), path.display());
        Ok(rows)
    }

    fn extract_text_blocks(&self, path: &Path) -> Result<Vec<String>> {
        let blocks: Vec<String> = self
            .pages(path)?
            .into_iter()
            .filter(|page| !page.trim().is_empty())
            .collect();
        debug!("extracted {} text blocks from {}", blocks.len(), path.display());
        Ok(blocks)
    }
}
