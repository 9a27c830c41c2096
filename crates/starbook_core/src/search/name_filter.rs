//! Name-based roster filter.
//!
//! # Responsibility
//! - Decide which records a free-text query keeps visible.
//!
//! # Invariants
//! - Matching is case-insensitive and substring-based over `"first last"`.
//! - The empty query is the identity filter, preserving roster order.
//! - Country, description and gender are never consulted.

use crate::model::celebrity::Celebrity;

/// Returns whether `query` keeps `celebrity` visible.
pub fn matches_name(celebrity: &Celebrity, query: &str) -> bool {
    celebrity
        .full_name()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Narrows the roster to the visible subset, preserving order.
pub fn filter_by_name<'a>(celebrities: &'a [Celebrity], query: &str) -> Vec<&'a Celebrity> {
    let needle = query.to_lowercase();
    celebrities
        .iter()
        .filter(|celebrity| celebrity.full_name().to_lowercase().contains(&needle))
        .collect()
}
