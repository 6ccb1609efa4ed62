//! CLI smoke entry point.
//!
//! # Responsibility
//! - Wire store, form and list projections the way a UI shell would.
//! - Keep output deterministic for quick local sanity checks (no ids printed).

use projboard_core::{
    ProjectDraft, ProjectFormService, ProjectListKind, ProjectListProjection, ProjectStore,
};

fn main() {
    println!("projboard_core ping={}", projboard_core::ping());
    println!("projboard_core version={}", projboard_core::core_version());

    let store = ProjectStore::new();
    let lists = [
        ProjectListProjection::attach(ProjectListKind::Active, &store),
        ProjectListProjection::attach(ProjectListKind::Finished, &store),
    ];
    let form = ProjectFormService::new(&store);

    let drafts = [
        ProjectDraft::new("", "hi", "3"),
        ProjectDraft::new("Build shed", "short", "6"),
        ProjectDraft::new("Build shed", "wooden garden shed", "4"),
    ];
    for draft in &drafts {
        match form.submit(draft) {
            Ok(project) => println!("submit title={} status=ok", project.title),
            Err(err) => println!("submit title={:?} status=rejected reason={err}", draft.title),
        }
    }

    for list in &lists {
        println!(
            "{} renders={} titles={:?}",
            list.kind().heading(),
            list.render_count(),
            list.rendered_titles()
        );
    }
}
