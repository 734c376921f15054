//! Price token extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A single currency amount, e.g. "199 €" or "16,58 €".
    pub static ref PRICE_TOKEN: Regex = Regex::new(r"\d+(?:[.,]\d+)?\s*€").unwrap();

    /// A currency range, e.g. "29 – 39 €".
    pub static ref RANGE_TOKEN: Regex = Regex::new(r"\d+\s*[\u{2013}-]\s*\d+\s*€").unwrap();
}

/// Find currency tokens in a text span: range tokens first in document
/// order, then single amounts in document order, skipping exact-string
/// duplicates.
///
/// Ranges go first because a range contains digits that the single-amount
/// pattern would otherwise capture on their own; collecting ranges up front
/// and deduplicating by literal string avoids double counting. Tokens are
/// the matched substrings verbatim; no numeric parsing happens anywhere.
pub fn find_price_tokens(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = RANGE_TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    for m in PRICE_TOKEN.find_iter(text) {
        if !tokens.iter().any(|t| t == m.as_str()) {
            tokens.push(m.as_str().to_string());
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_amounts_in_document_order() {
        let tokens = find_price_tokens("199 € ou 16,58 €/mois");
        assert_eq!(tokens, vec!["199 €", "16,58 €"]);
    }

    #[test]
    fn test_ranges_come_first() {
        let tokens = find_price_tokens("29 \u{2013} 39 € puis 5,99 €");
        assert_eq!(tokens[0], "29 \u{2013} 39 €");
        assert_eq!(*tokens.last().unwrap(), "5,99 €");
    }

    #[test]
    fn test_exact_duplicates_skipped() {
        let tokens = find_price_tokens("199 € ou encore 199 € et 3,99 €");
        assert_eq!(tokens, vec!["199 €", "3,99 €"]);
    }

    #[test]
    fn test_ascii_hyphen_range() {
        let tokens = find_price_tokens("garantie 29 - 39 €");
        assert_eq!(tokens[0], "29 - 39 €");
    }

    #[test]
    fn test_no_tokens() {
        assert!(find_price_tokens("aucun prix ici").is_empty());
    }
}
