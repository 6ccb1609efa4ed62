//! Observable project state.
//!
//! # Responsibility
//! - Own the ordered project sequence and the listener sequence.
//! - Broadcast a full snapshot to every listener after each mutation.
//!
//! # Invariants
//! - Insertion order is the iteration order of every snapshot.
//! - Listeners only observe mutations made after they registered.
//! - A snapshot is an owned copy; listeners cannot reach store internals.

pub mod project_store;
