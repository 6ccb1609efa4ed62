//! Core use-case services.
//!
//! # Responsibility
//! - Turn raw presentation-layer input into store mutations.
//! - Keep UI/FFI layers decoupled from validation rules.

pub mod project_form;
