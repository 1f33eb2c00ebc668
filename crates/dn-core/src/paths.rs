//! Endpoint paths, relative to the API base URL.

pub const PROJECTS: &str = "projects/";
pub const DIGGERS: &str = "diggers/";

pub fn project(id: u64) -> String {
    format!("projects/{id}")
}

pub fn project_diggers(project: u64) -> String {
    format!("projects/{project}/diggers")
}

pub fn digger(id: u64) -> String {
    format!("diggers/{id}")
}

pub fn digger_sessions(digger: u64) -> String {
    format!("diggers/{digger}/sessions")
}

pub fn session(digger: u64, id: u64) -> String {
    format!("diggers/{digger}/sessions/{id}")
}

pub fn session_data(digger: u64, id: u64) -> String {
    format!("diggers/{digger}/sessions/{id}/data")
}

/// Joins a base URL and a relative path with exactly one slash between them.
pub fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
