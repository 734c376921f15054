//! Text canonicalization for row matching.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9 ]+").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    // A lone letter followed by a word, e.g. "a pple" or "i mac": kerning in
    // the PDF text layer splits words this way.
    static ref SPLIT_LETTER: Regex = Regex::new(r"\b([a-z])\s+([a-z])").unwrap();
}

/// Canonicalize text for substring/regex matching: lowercase, unify dash
/// variants, strip everything outside `[a-z0-9 ]`, collapse whitespace and
/// rejoin single-letter split artifacts. Idempotent.
///
/// Applied to rows and lines only; windowed free-text search matches against
/// raw block text instead.
pub fn normalize(text: &str) -> String {
    let text = text.to_lowercase();
    let text = text.replace(['\u{2013}', '\u{2014}'], "-");
    let text = NON_ALNUM.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = SPLIT_LETTER.replace_all(text.trim(), "$1$2");
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lowercase_and_strip() {
        assert_eq!(normalize("iPad Pro 11\u{2033} (M5)"), "ipad pro 11 m5");
    }

    #[test]
    fn test_dash_variants_unified() {
        assert_eq!(normalize("29 \u{2013} 39"), normalize("29 - 39"));
        assert_eq!(normalize("29 \u{2014} 39"), "29 39");
    }

    #[test]
    fn test_split_letter_repair() {
        assert_eq!(normalize("A pple Watch"), normalize("Apple Watch"));
        assert_eq!(normalize("i Mac"), "imac");
    }

    #[test]
    fn test_idempotent() {
        for input in ["A pple W atch Ultra \u{2013} 3", "  iPhone   17  Pro ", "x y z"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(normalize("MacBook   Air\t13"), "macbook air 13");
    }
}
