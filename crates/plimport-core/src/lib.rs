//! Core library for vendor price-list import.
//!
//! This crate provides:
//! - PDF text extraction (table rows, text lines, page blocks)
//! - Price token extraction (currency amounts and ranges, document order)
//! - Fuzzy row/block matching (alias patterns + generic word-overlap scorer)
//! - Field assignment onto catalog price fields
//! - The catalog update orchestrator with its acceptance policy

pub mod error;
pub mod importer;
pub mod matching;
pub mod models;
pub mod pdf;

pub use error::{ImportError, Result};
pub use importer::{assign, required_tokens, stamp, update_prices, MAC_CATEGORIES, MAIN_CATEGORIES};
pub use matching::{choose_row, find_price_tokens, normalize, search_in_text};
pub use models::catalog::{Catalog, Category, Item, PriceFields};
pub use models::config::ImportConfig;
pub use models::document::{DocumentData, ExtractedRow};
pub use models::report::{ImportReport, MatchStatus, PassOutcome, ReportEntry};
pub use pdf::{DocumentExtractor, PdfTextExtractor};
