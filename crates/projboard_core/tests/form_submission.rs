use projboard_core::service::project_form::{DESCRIPTION_MIN_LENGTH, PEOPLE_MAX};
use projboard_core::{
    ProjectDraft, ProjectField, ProjectFormService, ProjectListKind, ProjectListProjection,
    ProjectStore, RuleViolation, SubmitError,
};

#[test]
fn valid_draft_is_added_and_broadcast_to_both_lists() {
    let store = ProjectStore::new();
    let active = ProjectListProjection::attach(ProjectListKind::Active, &store);
    let finished = ProjectListProjection::attach(ProjectListKind::Finished, &store);
    let form = ProjectFormService::new(&store);

    let project = form
        .submit(&ProjectDraft::new("Build shed", "wooden garden shed", "4"))
        .expect("valid draft should submit");

    assert_eq!(project.title, "Build shed");
    assert_eq!(project.people_count, 4);
    assert_eq!(store.snapshot(), vec![project.clone()]);
    assert_eq!(active.assigned_projects(), vec![project.clone()]);
    assert_eq!(finished.rendered_titles(), vec!["Build shed"]);
}

#[test]
fn blank_title_is_rejected_and_store_is_unchanged() {
    let store = ProjectStore::new();
    let list = ProjectListProjection::attach(ProjectListKind::Active, &store);
    let form = ProjectFormService::new(&store);

    let err = form
        .submit(&ProjectDraft::new("", "hi", "3"))
        .expect_err("blank title must be rejected");

    assert_eq!(
        err,
        SubmitError::InvalidField {
            field: ProjectField::Title,
            violation: RuleViolation::Required,
        }
    );
    assert!(store.is_empty());
    assert_eq!(list.render_count(), 0);
}

#[test]
fn too_many_people_is_rejected_and_store_is_unchanged() {
    let store = ProjectStore::new();
    let form = ProjectFormService::new(&store);

    let err = form
        .submit(&ProjectDraft::new("Build shed", "short", "6"))
        .expect_err("six people exceeds the maximum");

    assert_eq!(
        err,
        SubmitError::InvalidField {
            field: ProjectField::People,
            violation: RuleViolation::AboveMax {
                max: PEOPLE_MAX,
                actual: 6.0,
            },
        }
    );
    assert_eq!(err.to_string(), "invalid people: value 6 is above maximum 5");
    assert!(store.is_empty());
}

#[test]
fn description_exactly_at_minimum_length_is_accepted() {
    let store = ProjectStore::new();
    let form = ProjectFormService::new(&store);
    let description = "x".repeat(DESCRIPTION_MIN_LENGTH);

    form.submit(&ProjectDraft::new("T", description, "1"))
        .expect("minimum length description is valid");
    assert_eq!(store.len(), 1);
}

#[test]
fn rejected_then_accepted_drafts_notify_once() {
    let store = ProjectStore::new();
    let list = ProjectListProjection::attach(ProjectListKind::Active, &store);
    let form = ProjectFormService::new(&store);

    assert!(form.submit(&ProjectDraft::new("T", "tiny", "2")).is_err());
    assert!(form.submit(&ProjectDraft::new("T", "long enough", "two")).is_err());
    form.submit(&ProjectDraft::new("T", "long enough", "2"))
        .expect("third draft is valid");

    assert_eq!(list.render_count(), 1);
    assert_eq!(store.len(), 1);
}
