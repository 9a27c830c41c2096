//! Roster filtering entry points.
//!
//! # Responsibility
//! - Expose the name-filter predicate the frontend narrows the list with.
//! - Keep visible-subset shaping inside core.

pub mod name_filter;
