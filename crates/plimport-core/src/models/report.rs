//! Per-run match report.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Outcome of matching one catalog item against the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStatus {
    /// Price fields were written.
    Updated,
    /// No row or text window was found for the item.
    NoMatch,
    /// A span was found but it contained fewer tokens than the item needs.
    NotEnoughPrices,
}

/// One report line: item id, outcome, and the matched span when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub id: String,
    pub status: MatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<String>,
}

impl ReportEntry {
    pub fn updated(id: impl Into<String>, row: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: MatchStatus::Updated,
            row: Some(row.into()),
        }
    }

    pub fn no_match(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: MatchStatus::NoMatch,
            row: None,
        }
    }

    pub fn not_enough_prices(id: impl Into<String>, row: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: MatchStatus::NotEnoughPrices,
            row: Some(row.into()),
        }
    }
}

/// Statistics of one orchestrator pass over a category set.
#[derive(Debug, Clone, Default)]
pub struct PassOutcome {
    pub matched: usize,
    pub total: usize,
    pub entries: Vec<ReportEntry>,
}

/// The aggregate report written next to the catalog after every run,
/// accepted or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub matched: usize,
    pub total: usize,
    pub ratio: f64,
    pub main: Vec<ReportEntry>,
    pub mac: Vec<ReportEntry>,
}

impl ImportReport {
    /// Combine the main and mac passes. The ratio is 0 when nothing was
    /// processed at all.
    pub fn new(main: PassOutcome, mac: PassOutcome) -> Self {
        let matched = main.matched + mac.matched;
        let total = main.total + mac.total;
        let ratio = if total == 0 {
            0.0
        } else {
            matched as f64 / total as f64
        };
        Self {
            matched,
            total,
            ratio,
            main: main.entries,
            mac: mac.entries,
        }
    }

    /// Whether the run meets the acceptance threshold for a catalog write.
    pub fn accepted(&self, threshold: f64) -> bool {
        self.ratio >= threshold
    }

    /// Write the report as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_serialization() {
        let entry = ReportEntry::not_enough_prices("imac", "iMac 119 €");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"id":"imac","status":"not-enough-prices","row":"iMac 119 €"}"#
        );

        let no_match = serde_json::to_string(&ReportEntry::no_match("mac-pro")).unwrap();
        assert_eq!(no_match, r#"{"id":"mac-pro","status":"no-match"}"#);
    }

    #[test]
    fn test_ratio_zero_when_empty() {
        let report = ImportReport::new(PassOutcome::default(), PassOutcome::default());
        assert_eq!(report.ratio, 0.0);
        assert!(!report.accepted(1.0));
        assert!(report.accepted(0.0));
    }

    #[test]
    fn test_ratio_and_acceptance() {
        let main = PassOutcome {
            matched: 3,
            total: 5,
            entries: Vec::new(),
        };
        let report = ImportReport::new(main, PassOutcome::default());
        assert_eq!(report.ratio, 0.6);
        assert!(report.accepted(0.6));
        assert!(!report.accepted(1.0));
    }
}
