//! Assignment source contract and wire records.
//!
//! # Responsibility
//! - Define the read-only view the import driver needs over a remote
//!   learning-management service.
//! - Type the payload shapes the endpoints return.
//!
//! # Invariants
//! - Implementations perform blocking calls; the import driver sequences
//!   them one at a time.

use crate::store::task_store::StoreError;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier of an academic enrollment term.
pub type TermId = i64;

/// Identifier of a course.
pub type CourseId = i64;

pub type SyncResult<T> = Result<T, SyncError>;

/// Sync-layer error for remote fetches and the final merge persist.
#[derive(Debug)]
pub enum SyncError {
    /// Request did not complete (connect, TLS, body read).
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Service answered with a non-success status.
    Api { endpoint: String, status: u16 },
    /// Body did not decode as the expected shape.
    Malformed { endpoint: String, message: String },
    /// Persisting the merged collection failed.
    Store(StoreError),
}

impl Display for SyncError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport { endpoint, source } => {
                write!(f, "request to `{endpoint}` failed: {source}")
            }
            Self::Api { endpoint, status } => {
                write!(f, "`{endpoint}` answered with status {status}")
            }
            Self::Malformed { endpoint, message } => {
                write!(f, "unexpected response from `{endpoint}`: {message}")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SyncError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport { source, .. } => Some(source),
            Self::Api { .. } => None,
            Self::Malformed { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for SyncError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Course as returned by the active-enrollment course listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseSummary {
    pub id: CourseId,
    pub name: String,
    /// Term the enrollment belongs to; absent for some course states.
    pub enrollment_term_id: Option<TermId>,
}

/// Assignment as returned by the per-course assignment listing.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentRecord {
    pub name: String,
    /// UTC due timestamp; assignments without one are not imported.
    pub due_at: Option<DateTime<Utc>>,
}

/// Read-only view over a remote learning-management service.
pub trait AssignmentSource {
    /// Fetches the identifier of the current academic term.
    fn current_term(&self) -> SyncResult<TermId>;

    /// Fetches all courses with an active enrollment.
    fn active_courses(&self) -> SyncResult<Vec<CourseSummary>>;

    /// Fetches the assignments of one course.
    fn course_assignments(&self, course_id: CourseId) -> SyncResult<Vec<AssignmentRecord>>;
}
