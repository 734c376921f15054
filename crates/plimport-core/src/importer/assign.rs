//! Field assignment policy: positional mapping of extracted price tokens
//! onto an item's semantic price fields.

use crate::models::PriceFields;

/// How many tokens an item needs before its fields may be written.
///
/// The tier shape is inferred from the catalog itself: an item whose
/// monthly-base field is already populated is known to carry two base
/// prices, everything else needs just the one-time price.
pub fn required_tokens(fields: Option<&PriceFields>) -> usize {
    match fields {
        Some(f) if f.standard_monthly.is_some() => 2,
        _ => 1,
    }
}

/// Assign tokens positionally onto the price fields.
///
/// tokens[0] is the one-time base price; with a required count of 2,
/// tokens[1] is the monthly base price. When four or more tokens are
/// available the premium-tier pair is filled opportunistically from
/// tokens[2] and tokens[3]. At most four tokens are ever consumed and
/// their document order is preserved; tokens are written verbatim.
///
/// Returns `false` without touching any field when fewer than `required`
/// tokens are supplied.
pub fn assign(fields: &mut PriceFields, tokens: &[String], required: usize) -> bool {
    if tokens.len() < required {
        return false;
    }

    fields.standard_one_time = Some(tokens[0].clone());
    if required == 2 {
        fields.standard_monthly = Some(tokens[1].clone());
    }

    if tokens.len() >= 4 {
        fields.theft_one_time = Some(tokens[2].clone());
        fields.theft_monthly = Some(tokens[3].clone());
    }

    true
}
