//! Row-based matching: alias-driven selection with a generic fallback scorer.

use tracing::trace;

use super::aliases::alias_patterns;
use super::normalize::normalize;
use crate::models::ExtractedRow;

/// Locate the best-matching row for a catalog item.
///
/// Items with a registered alias entry are matched strictly by their pattern
/// list: patterns are tried most-specific first, rows in document order per
/// pattern, and no pattern match means no match at all. Items without an
/// alias entry go through a word-overlap scorer over the normalized display
/// name, accepted only above a conservative threshold.
///
/// Returns the raw (unnormalized) row text, cells joined by a space.
pub fn choose_row(item_id: &str, item_name: &str, rows: &[ExtractedRow]) -> Option<String> {
    if let Some(patterns) = alias_patterns(item_id) {
        for pattern in patterns {
            for row in rows {
                let row_text = row.text();
                if pattern.matches_row(&normalize(&row_text)) {
                    trace!("alias match for {item_id}: {row_text}");
                    return Some(row_text);
                }
            }
        }
        return None;
    }

    let target = normalize(item_name);
    let target_words: Vec<&str> = target.split(' ').filter(|w| !w.is_empty()).collect();

    let mut best: Option<String> = None;
    let mut best_score = 0;
    for row in rows {
        let row_text = row.text();
        let row_norm = normalize(&row_text);
        if row_norm.is_empty() {
            continue;
        }
        let score = target_words
            .iter()
            .filter(|&&word| row_norm.contains(word))
            .count();
        if score > best_score {
            best_score = score;
            best = Some(row_text);
        }
    }

    // Short names would otherwise match almost anything.
    if best_score >= 2.max(target_words.len() / 2) {
        best
    } else {
        None
    }
}
