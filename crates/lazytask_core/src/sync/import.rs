//! Assignment import and merge into the local task collection.
//!
//! # Responsibility
//! - Drive the fetch sequence: current term, active courses, per-course
//!   assignments.
//! - Merge fetched assignments through the task service add path.
//!
//! # Invariants
//! - A term or course-listing failure aborts the import; a per-course
//!   assignment failure skips that course only.
//! - Imported descriptions are unique against the collection at merge time.
//! - The merged collection is persisted exactly once, after the merge.

use crate::service::task_service::TaskService;
use crate::store::task_store::TaskStore;
use crate::sync::source::{AssignmentSource, SyncResult};
use chrono::Local;
use log::{info, warn};

/// Outcome summary of one import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    /// Newly added tasks.
    pub imported: usize,
    /// Courses skipped because their assignment fetch failed.
    pub courses_failed: usize,
}

/// Imports current-term assignments into the task collection.
///
/// Every assignment carrying a due timestamp becomes a task described as
/// `[{course name}] {assignment name}` with the due timestamp converted from
/// UTC to the local zone. Assignments whose description already exists
/// (exact, case-sensitive match) are skipped.
pub fn import_assignments<S: TaskStore>(
    source: &dyn AssignmentSource,
    service: &mut TaskService<S>,
) -> SyncResult<SyncReport> {
    let term = source.current_term()?;
    let courses = source.active_courses()?;
    info!(
        "event=sync_start module=sync status=ok term={term} courses={}",
        courses.len()
    );

    let mut report = SyncReport::default();
    for course in courses
        .iter()
        .filter(|course| course.enrollment_term_id == Some(term))
    {
        let assignments = match source.course_assignments(course.id) {
            Ok(assignments) => assignments,
            Err(err) => {
                warn!(
                    "event=sync_course_skipped module=sync status=error course_id={} error={err}",
                    course.id
                );
                report.courses_failed += 1;
                continue;
            }
        };

        for assignment in assignments {
            let due_at = match assignment.due_at {
                Some(due_at) => due_at,
                None => continue,
            };

            let description = format!("[{}] {}", course.name, assignment.name);
            if service.has_description(&description) {
                continue;
            }

            match service.import_task(description, due_at.with_timezone(&Local)) {
                Ok(_) => report.imported += 1,
                Err(err) => {
                    warn!(
                        "event=sync_task_skipped module=sync status=error course_id={} error={err}",
                        course.id
                    );
                }
            }
        }
    }

    service.persist()?;
    info!(
        "event=sync_complete module=sync status=ok imported={} courses_failed={}",
        report.imported, report.courses_failed
    );
    Ok(report)
}
