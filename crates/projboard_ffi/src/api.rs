//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Own the process-wide store and the two list projections fed by it.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - All calls share one `ProjectStore`; list projections attach to it once.

use log::warn;
use projboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    FieldRule, Project, ProjectDraft, ProjectFormService, ProjectListKind, ProjectListProjection,
    ProjectStore, SubmitError,
};
use std::sync::OnceLock;

static BOARD: OnceLock<Board> = OnceLock::new();

struct Board {
    store: &'static ProjectStore,
    active: ProjectListProjection,
    finished: ProjectListProjection,
}

fn board() -> &'static Board {
    BOARD.get_or_init(|| {
        let store = ProjectStore::instance();
        Board {
            store,
            active: ProjectListProjection::attach(ProjectListKind::Active, store),
            finished: ProjectListProjection::attach(ProjectListKind::Finished, store),
        }
    })
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One project row for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    /// Stable project ID in string form.
    pub id: String,
    pub title: String,
    pub description: String,
    pub people_count: u32,
}

impl From<Project> for ProjectItem {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title,
            description: project.description,
            people_count: project.people_count,
        }
    }
}

/// Result envelope for form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSubmitResponse {
    /// Whether the project was added.
    pub ok: bool,
    /// Created project ID on success.
    pub project_id: Option<String>,
    /// Offending field (`title|description|people`) on rejection.
    pub invalid_field: Option<String>,
    /// Human-readable message for UI alerts.
    pub message: String,
}

/// List envelope for one list component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListResponse {
    pub list_id: String,
    pub heading: String,
    /// Projects from the latest snapshot, in insertion order.
    pub items: Vec<ProjectItem>,
    /// Number of snapshots the list has received.
    pub render_count: u64,
}

/// Validates and submits one project from raw form input.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics.
/// - Rejected input leaves the store untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn project_submit(title: String, description: String, people: String) -> ProjectSubmitResponse {
    let board = board();
    let draft = ProjectDraft::new(title, description, people);
    match ProjectFormService::new(board.store).submit(&draft) {
        Ok(project) => ProjectSubmitResponse {
            ok: true,
            project_id: Some(project.id.to_string()),
            invalid_field: None,
            message: "Project added.".to_string(),
        },
        Err(err) => {
            let invalid_field = match &err {
                SubmitError::InvalidField { field, .. } => Some(field.as_str().to_string()),
                SubmitError::FractionalPeople(_) => Some("people".to_string()),
            };
            ProjectSubmitResponse {
                ok: false,
                project_id: None,
                invalid_field,
                message: format!("Invalid input, please try again: {err}"),
            }
        }
    }
}

/// Returns the current contents of one list component.
///
/// `kind` is `active` or `finished`; anything else falls back to `active`.
#[flutter_rust_bridge::frb(sync)]
pub fn project_list(kind: String) -> ProjectListResponse {
    let board = board();
    let projection = match kind.trim().to_ascii_lowercase().as_str() {
        "active" => &board.active,
        "finished" => &board.finished,
        other => {
            warn!("event=project_list module=ffi status=fallback kind={other}");
            &board.active
        }
    };
    ProjectListResponse {
        list_id: projection.kind().list_id(),
        heading: projection.kind().heading(),
        items: projection
            .assigned_projects()
            .into_iter()
            .map(ProjectItem::from)
            .collect(),
        render_count: projection.render_count(),
    }
}

/// Checks one text field against optional rules.
///
/// Lets the UI flag a field before submitting the whole form.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_text_field(
    value: String,
    required: bool,
    min_length: Option<u32>,
    max_length: Option<u32>,
) -> bool {
    let mut rule = FieldRule::text(value);
    rule.required = required;
    rule.min_length = min_length.map(|n| n as usize);
    rule.max_length = max_length.map(|n| n as usize);
    projboard_core::validate(&rule)
}

/// Checks one numeric field against optional inclusive bounds.
#[flutter_rust_bridge::frb(sync)]
pub fn validate_number_field(value: f64, required: bool, min: Option<f64>, max: Option<f64>) -> bool {
    let mut rule = FieldRule::number(value);
    rule.required = required;
    rule.min = min;
    rule.max = max;
    projboard_core::validate(&rule)
}
