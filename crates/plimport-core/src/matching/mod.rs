//! The matching/extraction pipeline: text normalization, price token
//! extraction, alias-driven row selection and windowed free-text search.

pub mod aliases;
pub mod normalize;
pub mod rows;
pub mod text;
pub mod tokens;

pub use aliases::{alias_patterns, AliasPattern};
pub use normalize::normalize;
pub use rows::choose_row;
pub use text::search_in_text;
pub use tokens::find_price_tokens;
