//! Document text extraction.

mod extractor;

pub use extractor::PdfTextExtractor;

use std::path::Path;

use crate::error::PdfError;
use crate::models::ExtractedRow;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for document extraction implementations.
///
/// The matching pipeline only ever sees rows and page blocks; how they were
/// recovered from the document is this seam's business.
pub trait DocumentExtractor {
    /// Extract table rows. Empty when the document has no recognizable
    /// tabular layout; callers then fall back to [`extract_text_rows`].
    ///
    /// [`extract_text_rows`]: DocumentExtractor::extract_text_rows
    fn extract_tables(&self, path: &Path) -> Result<Vec<ExtractedRow>>;

    /// Extract every non-empty text line as a single-cell pseudo-row.
    fn extract_text_rows(&self, path: &Path) -> Result<Vec<ExtractedRow>>;

    /// Extract the full text of each non-empty page.
    fn extract_text_blocks(&self, path: &Path) -> Result<Vec<String>>;
}
