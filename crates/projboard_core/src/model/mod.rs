//! Domain model for project records.
//!
//! # Responsibility
//! - Define the canonical record shape delivered to list components.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Records are immutable once created; there is no update or delete.

pub mod project;
