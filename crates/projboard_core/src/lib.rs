//! Core logic for the project board.
//! Field validation, the observable project store and the form/list use-cases
//! built on top of them.

pub mod logging;
pub mod model;
pub mod projection;
pub mod service;
pub mod store;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectValidationError};
pub use projection::project_list::{ProjectListKind, ProjectListProjection};
pub use service::project_form::{ProjectDraft, ProjectField, ProjectFormService, SubmitError};
pub use store::project_store::{ProjectStore, Snapshot};
pub use validation::field_rule::{check, validate, FieldRule, FieldValue, RuleViolation};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
