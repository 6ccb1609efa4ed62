//! Project store and listener fan-out.
//!
//! # Responsibility
//! - Append projects and notify listeners synchronously, in registration order.
//! - Provide one lazily created process-wide instance for composition roots
//!   that cannot pass a store by reference.
//!
//! # Invariants
//! - Append and broadcast form one critical section under a single mutex.
//!   The lock is held while listeners run.
//! - A listener must not call back into the same store; doing so deadlocks.
//! - A panicking listener aborts the remaining notifications and unwinds out
//!   of `add_project`. The append is kept and the store stays usable.
//! - Listeners are never removed and never de-duplicated.

use crate::model::project::{Project, ProjectId};
use log::{debug, info};
use once_cell::sync::OnceCell;
use std::fmt::{Debug, Formatter};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Owned copy of the store's projects, in insertion order.
pub type Snapshot = Vec<Project>;

type Listener = Box<dyn Fn(Snapshot) + Send + Sync>;

static INSTANCE: OnceCell<ProjectStore> = OnceCell::new();

struct StoreState {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

/// In-memory, append-only project container with snapshot broadcast.
pub struct ProjectStore {
    state: Mutex<StoreState>,
}

impl ProjectStore {
    /// Creates an empty, independent store.
    ///
    /// Prefer constructing one store at the composition root and passing it
    /// to every component that needs it.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StoreState {
                projects: Vec::new(),
                listeners: Vec::new(),
            }),
        }
    }

    /// Returns the process-wide store, creating it on first access.
    ///
    /// Every call returns the same instance; there is no teardown.
    pub fn instance() -> &'static ProjectStore {
        INSTANCE.get_or_init(|| {
            debug!("event=store_init module=store status=ok");
            ProjectStore::new()
        })
    }

    /// Whether `instance()` has been called at least once in this process.
    pub fn is_instance_initialized() -> bool {
        INSTANCE.get().is_some()
    }

    /// Registers `listener` to receive a snapshot after every later mutation.
    ///
    /// Registering the same callback twice makes it run twice per mutation.
    pub fn add_listener<F>(&self, listener: F)
    where
        F: Fn(Snapshot) + Send + Sync + 'static,
    {
        let mut state = self.lock();
        state.listeners.push(Box::new(listener));
        debug!(
            "event=listener_add module=store status=ok listener_count={}",
            state.listeners.len()
        );
    }

    /// Appends a new project and broadcasts the full snapshot.
    ///
    /// Input is trusted; callers validate before submitting. Returns the
    /// generated id.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people_count: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people_count);
        let project_id = project.id;

        let mut state = self.lock();
        state.projects.push(project);
        info!(
            "event=project_add module=store status=ok project_id={} project_count={} listener_count={}",
            project_id,
            state.projects.len(),
            state.listeners.len()
        );

        let StoreState {
            projects,
            listeners,
        } = &*state;
        for listener in listeners {
            listener(projects.clone());
        }

        project_id
    }

    /// Returns an owned copy of the current projects.
    pub fn snapshot(&self) -> Snapshot {
        self.lock().projects.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // Poisoning only means a listener panicked mid-broadcast; the
        // sequences themselves are still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for ProjectStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("ProjectStore")
            .field("projects", &state.projects)
            .field("listener_count", &state.listeners.len())
            .finish()
    }
}
