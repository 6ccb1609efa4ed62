//! Field validation for raw user input.
//!
//! # Responsibility
//! - Evaluate per-field rule sets before a record reaches the store.
//!
//! # Invariants
//! - Validation is pure: no side effects, never panics, never errors.

pub mod field_rule;
