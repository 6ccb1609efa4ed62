//! Read-side projections fed by store snapshots.

pub mod project_list;
