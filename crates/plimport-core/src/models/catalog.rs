//! Catalog data model.
//!
//! The catalog JSON file is owned by the consuming application and carries
//! fields this tool knows nothing about. Every level therefore keeps a
//! flattened passthrough map so unknown keys survive the read/write cycle
//! untouched; only the price fields and the update metadata are structured.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{ImportError, Result};

/// The product catalog: ordered categories, update metadata, passthrough rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,

    /// ISO date of the last successful import.
    #[serde(rename = "lastUpdated", skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    /// URLs of the documents used in the last successful import.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A product category with an ordered list of items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub items: Vec<Item>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A catalog item. Only `id`, `name` and the price fields matter here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(rename = "appleCare", skip_serializing_if = "Option::is_none")]
    pub apple_care: Option<PriceFields>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Semantic price fields of an item.
///
/// Prices are the literal tokens extracted from the source document, never
/// parsed into numbers. Presence of `standard_monthly` on input is what the
/// field assignment policy uses to infer how many tokens an item expects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceFields {
    #[serde(rename = "standardOneTime", skip_serializing_if = "Option::is_none")]
    pub standard_one_time: Option<String>,

    #[serde(rename = "standardMonthly", skip_serializing_if = "Option::is_none")]
    pub standard_monthly: Option<String>,

    #[serde(rename = "theftOneTime", skip_serializing_if = "Option::is_none")]
    pub theft_one_time: Option<String>,

    #[serde(rename = "theftMonthly", skip_serializing_if = "Option::is_none")]
    pub theft_monthly: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .map_err(|e| ImportError::Catalog(format!("failed to read {}: {e}", path.display())))?;
        serde_json::from_str(&data)
            .map_err(|e| ImportError::Catalog(format!("failed to parse {}: {e}", path.display())))
    }

    /// Write the catalog back as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .map_err(|e| ImportError::Catalog(format!("failed to write {}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_fields_round_trip() {
        let json = r#"{
            "version": 3,
            "categories": [
                {
                    "id": "iphone",
                    "label": "iPhone",
                    "items": [
                        {
                            "id": "iphone-17",
                            "name": "iPhone 17",
                            "price": "969 €",
                            "appleCare": {
                                "standardOneTime": "199 €",
                                "standardMonthly": "10,99 €",
                                "plan": "classic"
                            }
                        }
                    ]
                }
            ]
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.extra["version"], 3);
        assert_eq!(catalog.categories[0].extra["label"], "iPhone");

        let item = &catalog.categories[0].items[0];
        assert_eq!(item.extra["price"], "969 €");
        let fields = item.apple_care.as_ref().unwrap();
        assert_eq!(fields.standard_one_time.as_deref(), Some("199 €"));
        assert_eq!(fields.extra["plan"], "classic");

        let out: Value = serde_json::from_str(&serde_json::to_string(&catalog).unwrap()).unwrap();
        let reference: Value = serde_json::from_str(json).unwrap();
        assert_eq!(out, reference);
    }

    #[test]
    fn test_load_failures_are_catalog_errors() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, ImportError::Catalog(_)));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, "not json").unwrap();
        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, ImportError::Catalog(_)));
        assert!(err.to_string().contains("catalog.json"));
    }

    #[test]
    fn test_missing_apple_care_is_none() {
        let json = r#"{"categories": [{"id": "mac", "items": [{"id": "imac", "name": "iMac"}]}]}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert!(catalog.categories[0].items[0].apple_care.is_none());
    }
}
