//! Core domain logic for Taskhive.
//! This crate is the single source of truth for business invariants.

pub mod classify;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use classify::{validate_classify_input, Classifier, ClassifyError, Prediction};
pub use config::Settings;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    NewTask, Task, TaskId, TaskPatch, TaskValidationError, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};
pub use repo::task_repo::{InMemoryTaskRepository, RepoError, RepoResult, TaskRepository};
pub use service::task_service::{ServiceError, ServiceResult, TaskService};

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
