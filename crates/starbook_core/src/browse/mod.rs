//! Browse-session orchestration.
//!
//! # Responsibility
//! - Hold the panel, edit and confirmation state the frontend renders from.
//! - Keep the session invariants checkable independent of any UI toolkit.
//!
//! # Invariants
//! - At most one record is editable at a time across the whole roster.
//! - The edit capability is gated on derived `age >= 18`.

pub mod coordinator;
