//! Project input form use-case.
//!
//! # Responsibility
//! - Build the per-field rule sets for raw form input.
//! - Submit a project to the store only when every field is valid.
//!
//! # Invariants
//! - Fields are checked in the order title, description, people.
//! - A rejected draft never reaches the store.
//! - A valid draft results in exactly one `add_project` call.

use crate::model::project::Project;
use crate::store::project_store::ProjectStore;
use crate::validation::field_rule::{check, FieldRule, RuleViolation};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DESCRIPTION_MIN_LENGTH: usize = 5;
pub const PEOPLE_MIN: f64 = 1.0;
pub const PEOPLE_MAX: f64 = 5.0;

/// Raw, unvalidated values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    /// Numeric text; blank parses as `0`.
    pub people: String,
}

impl ProjectDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }
}

/// Form field identifier used in rejection reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    People,
}

impl ProjectField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Why a draft was not submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// A field failed its rule set.
    InvalidField {
        field: ProjectField,
        violation: RuleViolation,
    },
    /// People count is within range but not a whole number.
    FractionalPeople(f64),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidField { field, violation } => {
                write!(f, "invalid {}: {violation}", field.as_str())
            }
            Self::FractionalPeople(value) => {
                write!(f, "invalid people: {value} is not a whole number")
            }
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidField { violation, .. } => Some(violation),
            Self::FractionalPeople(_) => None,
        }
    }
}

/// Form facade over a borrowed store.
pub struct ProjectFormService<'a> {
    store: &'a ProjectStore,
}

impl<'a> ProjectFormService<'a> {
    pub fn new(store: &'a ProjectStore) -> Self {
        Self { store }
    }

    /// Validates `draft` and appends it to the store.
    ///
    /// # Errors
    /// - `SubmitError::InvalidField` for the first field that fails its rules.
    /// - `SubmitError::FractionalPeople` when people is not a whole number.
    pub fn submit(&self, draft: &ProjectDraft) -> Result<Project, SubmitError> {
        let people_count = match validate_draft(draft) {
            Ok(people_count) => people_count,
            Err(err) => {
                debug!(
                    "event=project_submit module=form status=rejected reason={}",
                    rejection_reason(&err)
                );
                return Err(err);
            }
        };

        let project_id = self.store.add_project(
            draft.title.as_str(),
            draft.description.as_str(),
            people_count,
        );
        info!(
            "event=project_submit module=form status=ok project_id={}",
            project_id
        );
        Ok(Project {
            id: project_id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            people_count,
        })
    }
}

/// Rule set applied to the title input.
pub fn title_rule(title: &str) -> FieldRule {
    FieldRule::text(title).required()
}

/// Rule set applied to the description input.
pub fn description_rule(description: &str) -> FieldRule {
    FieldRule::text(description)
        .required()
        .min_length(DESCRIPTION_MIN_LENGTH)
}

/// Rule set applied to the numeric people input.
pub fn people_rule(people: f64) -> FieldRule {
    FieldRule::number(people)
        .required()
        .min(PEOPLE_MIN)
        .max(PEOPLE_MAX)
}

/// Converts people text the way a numeric form input does.
///
/// Blank input is `0`; anything unparsable is `NaN`.
pub fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Checks every field and returns the validated people count.
pub fn validate_draft(draft: &ProjectDraft) -> Result<u32, SubmitError> {
    check(&title_rule(&draft.title)).map_err(|violation| SubmitError::InvalidField {
        field: ProjectField::Title,
        violation,
    })?;
    check(&description_rule(&draft.description)).map_err(|violation| {
        SubmitError::InvalidField {
            field: ProjectField::Description,
            violation,
        }
    })?;

    let people = parse_people(&draft.people);
    check(&people_rule(people)).map_err(|violation| SubmitError::InvalidField {
        field: ProjectField::People,
        violation,
    })?;
    if people.fract() != 0.0 {
        return Err(SubmitError::FractionalPeople(people));
    }

    // Range check above bounds the value to PEOPLE_MIN..=PEOPLE_MAX.
    Ok(people as u32)
}

fn rejection_reason(err: &SubmitError) -> &'static str {
    match err {
        SubmitError::InvalidField { field, .. } => field.as_str(),
        SubmitError::FractionalPeople(_) => "people_fraction",
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_people, validate_draft, ProjectDraft, ProjectField, SubmitError};
    use crate::validation::field_rule::RuleViolation;

    #[test]
    fn parse_people_follows_numeric_input_conversion() {
        assert_eq!(parse_people(""), 0.0);
        assert_eq!(parse_people("  "), 0.0);
        assert_eq!(parse_people(" 4 "), 4.0);
        assert_eq!(parse_people("2.5"), 2.5);
        assert!(parse_people("many").is_nan());
    }

    #[test]
    fn validate_draft_accepts_boundary_values() {
        assert_eq!(validate_draft(&ProjectDraft::new("T", "12345", "1")), Ok(1));
        assert_eq!(validate_draft(&ProjectDraft::new("T", "12345", "5")), Ok(5));
    }

    #[test]
    fn validate_draft_reports_title_before_other_fields() {
        let err = validate_draft(&ProjectDraft::new(" ", "", "9")).unwrap_err();
        assert_eq!(
            err,
            SubmitError::InvalidField {
                field: ProjectField::Title,
                violation: RuleViolation::Required,
            }
        );
    }

    #[test]
    fn validate_draft_rejects_short_description() {
        let err = validate_draft(&ProjectDraft::new("T", "shor", "3")).unwrap_err();
        assert!(matches!(
            err,
            SubmitError::InvalidField {
                field: ProjectField::Description,
                violation: RuleViolation::TooShort { .. },
            }
        ));
    }

    #[test]
    fn validate_draft_rejects_blank_and_unparsable_people() {
        for raw in ["", "abc", "0", "-1"] {
            let err = validate_draft(&ProjectDraft::new("T", "long enough", raw)).unwrap_err();
            assert!(
                matches!(
                    err,
                    SubmitError::InvalidField {
                        field: ProjectField::People,
                        violation: RuleViolation::BelowMin { .. },
                    }
                ),
                "people `{raw}` should fail the minimum"
            );
        }
    }

    #[test]
    fn validate_draft_rejects_fractional_people() {
        let err = validate_draft(&ProjectDraft::new("T", "long enough", "2.5")).unwrap_err();
        assert_eq!(err, SubmitError::FractionalPeople(2.5));
        assert!(err.to_string().contains("whole number"));
    }
}
