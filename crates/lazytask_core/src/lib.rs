//! Core domain logic for lazytask.
//! This crate is the single source of truth for task-tracking invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod sync;

pub use logging::{default_log_level, init_logging};
pub use model::task::{parse_due_input, Task, TaskId, TaskValidationError, DUE_INPUT_FORMAT};
pub use model::urgency::{classify, Urgency};
pub use service::task_service::{TaskService, TaskServiceError, TaskServiceResult};
pub use store::task_store::{JsonFileStore, StoreError, StoreResult, TaskStore};
pub use sync::canvas::CanvasClient;
pub use sync::import::{import_assignments, SyncReport};
pub use sync::source::{
    AssignmentRecord, AssignmentSource, CourseId, CourseSummary, SyncError, SyncResult, TermId,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
