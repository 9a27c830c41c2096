//! Record store layer.
//!
//! # Responsibility
//! - Own the authoritative in-memory roster for the whole session.
//! - Isolate resource acquisition behind the `CelebritySource` seam.
//!
//! # Invariants
//! - The roster is loaded at most once per process.
//! - Mutations replace the published list wholesale; readers never observe a
//!   partially mutated roster.

pub mod celebrity_store;
pub mod source;
