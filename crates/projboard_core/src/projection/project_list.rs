//! Project list projection.
//!
//! # Responsibility
//! - Hold the projects assigned to one list from the latest snapshot.
//! - Expose stable element ids and headings for the rendering layer.
//!
//! # Invariants
//! - Assigned projects are replaced wholesale by every snapshot.
//! - A projection attached after a mutation does not see that mutation
//!   until the next one.

use crate::model::project::Project;
use crate::store::project_store::{ProjectStore, Snapshot};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Which list a projection feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectListKind {
    Active,
    Finished,
}

impl ProjectListKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Id of the list section element, e.g. `active-projects`.
    pub fn element_id(self) -> String {
        format!("{}-projects", self.as_str())
    }

    /// Id of the list element, e.g. `active-project-list`.
    pub fn list_id(self) -> String {
        format!("{}-project-list", self.as_str())
    }

    /// Heading text, e.g. `ACTIVE PROJECTS`.
    pub fn heading(self) -> String {
        format!("{} PROJECTS", self.as_str().to_ascii_uppercase())
    }
}

#[derive(Debug, Default)]
struct ListState {
    assigned: Vec<Project>,
    render_count: u64,
}

/// Listener-backed view of the store for one list.
#[derive(Debug, Clone)]
pub struct ProjectListProjection {
    kind: ProjectListKind,
    state: Arc<Mutex<ListState>>,
}

impl ProjectListProjection {
    /// Creates a projection and registers its listener on `store`.
    pub fn attach(kind: ProjectListKind, store: &ProjectStore) -> Self {
        let projection = Self {
            kind,
            state: Arc::new(Mutex::new(ListState::default())),
        };
        let state = Arc::clone(&projection.state);
        store.add_listener(move |snapshot: Snapshot| {
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            state.assigned = snapshot;
            state.render_count += 1;
        });
        projection
    }

    pub fn kind(&self) -> ProjectListKind {
        self.kind
    }

    pub fn assigned_projects(&self) -> Vec<Project> {
        self.lock().assigned.clone()
    }

    /// Titles in list order, as the list items display them.
    pub fn rendered_titles(&self) -> Vec<String> {
        self.lock()
            .assigned
            .iter()
            .map(|project| project.title.clone())
            .collect()
    }

    /// Number of snapshots received so far.
    pub fn render_count(&self) -> u64 {
        self.lock().render_count
    }

    fn lock(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
