//! Project record model.
//!
//! # Responsibility
//! - Define the record appended by the store and copied into snapshots.
//! - Generate identities at creation time.
//!
//! # Invariants
//! - `id` is generated from a v4 uuid and never reused for another project.
//! - Field values are never mutated after construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one project record.
pub type ProjectId = Uuid;

/// One submitted project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Generated at creation, unique within the process lifetime.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned to the project.
    pub people_count: u32,
}

impl Project {
    /// Creates a project with a freshly generated id.
    ///
    /// No field validation happens here; callers validate raw input first.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people_count: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            people_count,
        }
    }

    /// Creates a project with a caller-provided id.
    ///
    /// # Errors
    /// - Returns `ProjectValidationError::NilId` for `Uuid::nil()`.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> Result<Self, ProjectValidationError> {
        if id.is_nil() {
            return Err(ProjectValidationError::NilId);
        }
        Ok(Self {
            id,
            title: title.into(),
            description: description.into(),
            people_count,
        })
    }
}

/// Construction errors for `Project`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectValidationError {
    NilId,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "project id must not be nil"),
        }
    }
}

impl Error for ProjectValidationError {}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectValidationError};
    use uuid::Uuid;

    #[test]
    fn new_generates_distinct_ids() {
        let first = Project::new("A", "desc", 3);
        let second = Project::new("A", "desc", 3);
        assert!(!first.id.is_nil());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn with_id_rejects_nil_uuid() {
        let err = Project::with_id(Uuid::nil(), "A", "desc", 1).unwrap_err();
        assert_eq!(err, ProjectValidationError::NilId);
    }
}
