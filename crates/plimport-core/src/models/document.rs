//! Extracted document content passed into the matching pipeline.

/// One table row from an extracted document, or a single-cell pseudo-row
/// holding one line of free text when the document yields no tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedRow {
    pub cells: Vec<String>,
}

impl ExtractedRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// A pseudo-row wrapping a single line of free text.
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            cells: vec![text.into()],
        }
    }

    /// The row as one string, cells joined by a single space.
    pub fn text(&self) -> String {
        self.cells.join(" ")
    }
}

/// Everything extracted from one document: rows for row-based matching and
/// per-page text blocks for windowed free-text search.
#[derive(Debug, Clone, Default)]
pub struct DocumentData {
    pub rows: Vec<ExtractedRow>,
    pub blocks: Vec<String>,
}

impl DocumentData {
    pub fn new(rows: Vec<ExtractedRow>, blocks: Vec<String>) -> Self {
        Self { rows, blocks }
    }
}
