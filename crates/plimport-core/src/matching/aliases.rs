//! Static alias table: item id -> ordered match patterns.
//!
//! Process-wide read-only configuration, compiled once. Each entry lists
//! patterns most-specific first; the row matcher treats the list as a
//! priority order, not a union.
//!
//! Every pattern is kept in two compiled forms: a `row` form tested against
//! normalized row text, and a `flexible` form with spaces widened to `\W+`,
//! case-insensitive, tested against raw page text where line breaks and
//! punctuation survive. A pattern may carry an exclusion: it only matches
//! where the include regex hits and the exclusion does not match starting at
//! the same position (e.g. "iphone 16" must not fire on "iphone 16 plus").

use lazy_static::lazy_static;
use regex::{Match, Regex, RegexBuilder};
use std::collections::HashMap;

/// One compiled alias pattern.
pub struct AliasPattern {
    row: Regex,
    row_exclude: Option<Regex>,
    flexible: Regex,
    flexible_exclude: Option<Regex>,
}

impl AliasPattern {
    fn build(row: &str, flexible: &str, exclude: Option<(&str, &str)>) -> Self {
        Self {
            row: Regex::new(row).unwrap(),
            row_exclude: exclude.map(|(r, _)| Regex::new(r).unwrap()),
            flexible: flexible_regex(flexible),
            flexible_exclude: exclude.map(|(_, f)| flexible_regex(f)),
        }
    }

    /// Test the pattern against normalized row text.
    pub fn matches_row(&self, normalized_row: &str) -> bool {
        find_guarded(&self.row, self.row_exclude.as_ref(), normalized_row).is_some()
    }

    /// Search raw block text; returns the byte offset just past the match.
    pub fn find_in_block(&self, block: &str) -> Option<usize> {
        find_guarded(&self.flexible, self.flexible_exclude.as_ref(), block).map(|m| m.end())
    }
}

/// Compile a pattern for raw-text search: any run of non-word characters may
/// stand in for a space, case-insensitively.
pub(crate) fn flexible_regex(pattern: &str) -> Regex {
    RegexBuilder::new(&pattern.replace(' ', r"\W+"))
        .case_insensitive(true)
        .build()
        .unwrap()
}

/// First include match not cancelled by an exclusion anchored at the same
/// start position.
fn find_guarded<'t>(
    include: &Regex,
    exclude: Option<&Regex>,
    text: &'t str,
) -> Option<Match<'t>> {
    for m in include.find_iter(text) {
        let excluded = exclude
            .is_some_and(|re| re.find(&text[m.start()..]).is_some_and(|e| e.start() == 0));
        if !excluded {
            return Some(m);
        }
    }
    None
}

fn pat(pattern: &'static str) -> AliasPattern {
    AliasPattern::build(pattern, pattern, None)
}

fn pat_not(pattern: &'static str, exclude: &'static str) -> AliasPattern {
    AliasPattern::build(pattern, pattern, Some((exclude, exclude)))
}

/// Pattern whose row form differs from the raw-text form (normalization
/// strips accented letters, so the two sides see different spellings).
fn pat_flex(row: &'static str, flexible: &'static str) -> AliasPattern {
    AliasPattern::build(row, flexible, None)
}

lazy_static! {
    static ref ALIASES: HashMap<&'static str, Vec<AliasPattern>> = build_aliases();
}

/// Look up the alias pattern list for an item id.
pub fn alias_patterns(item_id: &str) -> Option<&'static [AliasPattern]> {
    ALIASES.get(item_id).map(|patterns| patterns.as_slice())
}

fn build_aliases() -> HashMap<&'static str, Vec<AliasPattern>> {
    let mut map: HashMap<&'static str, Vec<AliasPattern>> = HashMap::new();

    // iPhone
    map.insert("iphone-17-pro", vec![pat(r"\biphone 17 pro\b")]);
    map.insert(
        "iphone-17-pro-max",
        vec![pat(r"\biphone 17 pro max\b"), pat(r"\b17 pro max\b")],
    );
    map.insert("iphone-air", vec![pat(r"\biphone air\b")]);
    map.insert(
        "iphone-17",
        vec![pat(r"\biphone 17 16\b"), pat(r"\biphone 17\b")],
    );
    // The bare "iphone 16" guard excludes only the literal "plus"
    // continuation. Any other word after the number ("iphone 16 et ...")
    // is ordinary row text and still matches; "16e" is already fenced off
    // by the word boundary.
    map.insert(
        "iphone-16",
        vec![
            pat(r"\biphone 17 16\b"),
            pat_not(r"\biphone 16\b", r"\biphone 16 plus\b"),
        ],
    );
    map.insert("iphone-16-plus", vec![pat(r"\biphone 16 plus\b")]);
    map.insert("iphone-16e", vec![pat(r"\biphone 16e\b")]);

    // iPad
    map.insert(
        "ipad-10-a16",
        vec![
            pat(r"\bipad ipad mini\b"),
            pat(r"\bipad\b.*\ba16\b"),
            pat(r"\bipad a16\b"),
        ],
    );
    map.insert(
        "ipad-mini-a17-pro",
        vec![
            pat(r"\bipad ipad mini\b"),
            pat(r"\bipad mini\b.*\ba17 pro\b"),
            pat(r"\bipad mini a17 pro\b"),
        ],
    );
    map.insert(
        "ipad-air-11",
        vec![
            pat(r"\bipad air 11\b"),
            pat(r"\bipad air 11\b.*\bm3\b"),
            pat(r"\bipad air 11\b.*\bm2\b"),
        ],
    );
    map.insert(
        "ipad-air-13",
        vec![
            pat(r"\bipad air 13\b"),
            pat(r"\bipad air 13\b.*\bm3\b"),
            pat(r"\bipad air 13\b.*\bm2\b"),
        ],
    );
    map.insert(
        "ipad-pro-11",
        vec![pat(r"\bipad pro 11\b.*\bm5\b"), pat(r"\bipad pro 11\b.*\bm4\b")],
    );
    map.insert(
        "ipad-pro-13",
        vec![pat(r"\bipad pro 13\b.*\bm5\b"), pat(r"\bipad pro 13\b.*\bm4\b")],
    );

    // Watch
    map.insert("watch-se-3", vec![pat(r"\bapple watch\b.*\bse\b")]);
    map.insert(
        "watch-series-11",
        vec![pat(r"\bapple watch\b.*\bseries\b.*\b11\b")],
    );
    map.insert("watch-ultra-3", vec![pat(r"\bapple watch\b.*\bultra\b")]);
    // Normalization turns "hermès" into "herm s" and the split-letter repair
    // then glues the stray "s" onto the next word, so the row form only pins
    // the "herm" stem.
    map.insert(
        "watch-hermes-11",
        vec![
            pat(r"\bapple watch edition\b"),
            pat_flex(r"\bherm.*ultra\b", r"\bherm[eè]s\b.*\bultra\b"),
        ],
    );
    map.insert(
        "watch-hermes-ultra-3",
        vec![
            pat(r"\bapple watch edition\b"),
            pat_flex(r"\bherm.*ultra\b", r"\bherm[eè]s\b.*\bultra\b"),
        ],
    );

    // Mac
    map.insert("macbook-air-13", vec![pat(r"\bmacbook air 13\b")]);
    map.insert("macbook-air-15", vec![pat(r"\bmacbook air 15\b")]);
    map.insert("macbook-pro-14", vec![pat(r"\bmacbook pro 14\b")]);
    map.insert("macbook-pro-16", vec![pat(r"\bmacbook pro 16\b")]);
    map.insert("imac", vec![pat(r"\bimac\b")]);
    map.insert("mac-mini", vec![pat(r"\bmac mini\b")]);
    map.insert("mac-studio", vec![pat(r"\bmac studio\b")]);
    map.insert("mac-pro", vec![pat(r"\bmac pro\b")]);
    map.insert("studio-display", vec![pat(r"\bstudio display\b")]);
    map.insert(
        "pro-display-xdr",
        vec![pat(r"\bpro display xdr\b"), pat(r"\bpro display\b")],
    );

    // AirPods
    map.insert(
        "airpods-4",
        vec![pat(r"\bairpods airpods pro\b.*\b2e\b"), pat(r"\bairpods\b")],
    );
    map.insert(
        "airpods-4-anc",
        vec![pat(r"\bairpods airpods pro\b.*\b2e\b"), pat(r"\bairpods\b")],
    );
    map.insert(
        "airpods-pro-3",
        vec![pat(r"\bairpods pro\b.*\b3e\b"), pat(r"\bairpods pro\b.*\b3\b")],
    );
    map.insert("airpods-max", vec![pat(r"\bairpods max\b")]);

    // Apple TV / HomePod
    map.insert("appletv-4k", vec![pat(r"\bapple tv\b")]);
    map.insert("homepod-mini", vec![pat(r"\bhomepod mini\b")]);
    map.insert(
        "homepod-2",
        vec![pat_not(r"\bhomepod\b", r"\bhomepod mini\b")],
    );

    // Beats: the price list carries one line for the whole family.
    for id in [
        "beats-studio-pro",
        "beats-solo-4",
        "beats-solo-buds",
        "powerbeats-fit",
        "powerbeats-pro-2",
        "beats-studio-buds-plus",
        "beats-flex",
        "beats-pill",
    ] {
        map.insert(id, vec![pat(r"\bbeats\b")]);
    }

    map
}
