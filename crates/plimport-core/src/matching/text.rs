//! Windowed free-text search over raw page blocks.
//!
//! Secondary strategy for documents where the item never lands in a usable
//! row: find the item name in the raw page text and take the text window
//! right after it. The window only counts when it actually contains a price
//! token, so a bare mention of the name elsewhere in the document cannot
//! hijack the match.

use tracing::trace;

use super::aliases::{alias_patterns, flexible_regex};
use super::tokens::find_price_tokens;

/// Characters of context taken after a name match.
const WINDOW_CHARS: usize = 600;

/// Search the page blocks for the item and return the price-bearing window
/// following its name, if any.
///
/// Items with alias patterns reuse them in their whitespace-tolerant form;
/// unregistered items fall back to the escaped literal display name.
pub fn search_in_text(item_id: &str, item_name: &str, blocks: &[String]) -> Option<String> {
    match alias_patterns(item_id) {
        Some(patterns) => {
            for block in blocks {
                for pattern in patterns {
                    if let Some(window) = window_after(block, pattern.find_in_block(block)) {
                        trace!("text window for {item_id}: {} chars", window.len());
                        return Some(window);
                    }
                }
            }
            None
        }
        None => {
            let literal = flexible_regex(&regex::escape(item_name));
            for block in blocks {
                let end = literal.find(block).map(|m| m.end());
                if let Some(window) = window_after(block, end) {
                    trace!("text window for {item_id}: {} chars", window.len());
                    return Some(window);
                }
            }
            None
        }
    }
}

/// The window after a match end, accepted only when it carries a price
/// token. Char-based, not byte-based: the currency sign is multibyte.
fn window_after(block: &str, match_end: Option<usize>) -> Option<String> {
    let end = match_end?;
    let window: String = block[end..].chars().take(WINDOW_CHARS).collect();
    if find_price_tokens(&window).is_empty() {
        None
    } else {
        Some(window)
    }
}
