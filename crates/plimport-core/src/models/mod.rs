//! Data structures: catalog, extracted document content, config, report.

pub mod catalog;
pub mod config;
pub mod document;
pub mod report;

pub use catalog::{Catalog, Category, Item, PriceFields};
pub use config::ImportConfig;
pub use document::{DocumentData, ExtractedRow};
pub use report::{ImportReport, MatchStatus, PassOutcome, ReportEntry};
