//! Catalog update orchestrator.
//!
//! Walks the catalog categories restricted to a category set, resolves a
//! match per item through an ordered strategy chain, applies the field
//! assignment policy, and aggregates the per-item outcomes into pass
//! statistics. Per-item failures never stop the pass; the acceptance
//! decision happens afterwards on the aggregate ratio.

pub mod assign;

pub use assign::{assign, required_tokens};

use tracing::{debug, info};

use crate::matching::{choose_row, find_price_tokens, search_in_text};
use crate::models::catalog::{Catalog, PriceFields};
use crate::models::document::DocumentData;
use crate::models::report::{PassOutcome, ReportEntry};

/// Categories covered by the main price-list document.
pub const MAIN_CATEGORIES: &[&str] = &[
    "iphone", "ipad", "watch", "airpods", "beats", "appletv", "homepod",
];

/// Categories covered by the Mac price-list document.
pub const MAC_CATEGORIES: &[&str] = &["mac"];

/// The matching strategies, tried in this order until one yields enough
/// tokens for the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchStrategy {
    /// Best-matching table row (or text pseudo-row).
    TableRows,
    /// Price-bearing text window after a name match in the raw page text.
    TextWindow,
}

const STRATEGIES: [MatchStrategy; 2] = [MatchStrategy::TableRows, MatchStrategy::TextWindow];

impl MatchStrategy {
    fn locate(self, item_id: &str, item_name: &str, doc: &DocumentData) -> Option<String> {
        match self {
            MatchStrategy::TableRows => choose_row(item_id, item_name, &doc.rows),
            MatchStrategy::TextWindow => {
                if doc.blocks.is_empty() {
                    None
                } else {
                    search_in_text(item_id, item_name, &doc.blocks)
                }
            }
        }
    }
}

/// Try the strategies in order; the first span delivering at least
/// `required` tokens wins. A span that under-delivers is kept so the report
/// can show the human what was found, but a later strategy may replace it.
fn resolve_item(
    item_id: &str,
    item_name: &str,
    doc: &DocumentData,
    required: usize,
) -> Option<(String, Vec<String>)> {
    let mut fallback: Option<(String, Vec<String>)> = None;

    for strategy in STRATEGIES {
        if let Some(span) = strategy.locate(item_id, item_name, doc) {
            let tokens = find_price_tokens(&span);
            debug!(
                "{item_id}: {:?} found {} token(s), {required} required",
                strategy,
                tokens.len()
            );
            if tokens.len() >= required {
                return Some((span, tokens));
            }
            fallback = Some((span, tokens));
        }
    }

    fallback
}

/// Update the price fields of every item in the given categories from the
/// extracted document, recording one outcome per item.
pub fn update_prices(
    catalog: &mut Catalog,
    doc: &DocumentData,
    category_ids: &[&str],
) -> PassOutcome {
    let mut outcome = PassOutcome::default();

    for category in catalog
        .categories
        .iter_mut()
        .filter(|c| category_ids.contains(&c.id.as_str()))
    {
        for item in &mut category.items {
            outcome.total += 1;
            let required = required_tokens(item.apple_care.as_ref());

            let Some((span, tokens)) = resolve_item(&item.id, &item.name, doc, required) else {
                debug!("{}: no match", item.id);
                outcome.entries.push(ReportEntry::no_match(&item.id));
                continue;
            };

            // The price-fields object is only inserted once the item is
            // known to update: a failed item must not even gain an empty
            // `appleCare` object.
            if tokens.len() < required {
                outcome
                    .entries
                    .push(ReportEntry::not_enough_prices(&item.id, span));
                continue;
            }

            let fields = item.apple_care.get_or_insert_with(PriceFields::default);
            assign(fields, &tokens, required);
            outcome.matched += 1;
            outcome.entries.push(ReportEntry::updated(&item.id, span));
        }
    }

    info!(
        "pass over {:?}: matched {}/{}",
        category_ids, outcome.matched, outcome.total
    );
    outcome
}

/// Stamp the catalog with the update date and the source document URLs.
/// Called only once a run has passed the acceptance check.
pub fn stamp(catalog: &mut Catalog, sources: Vec<String>) {
    catalog.last_updated = Some(chrono::Local::now().date_naive().to_string());
    catalog.sources = Some(sources);
}
