//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, service and sync.
//! - Validate user-entered description and due-date input.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `created` is assigned at insertion time and never modified.
//! - `description` is non-empty for every persisted task.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Input format for user-entered due dates: `MM-DD-YYYY HH:MM AM/PM`.
pub const DUE_INPUT_FORMAT: &str = "%m-%d-%Y %I:%M %p";

/// Stable identifier for every task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation error for task creation and edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Description is empty or whitespace-only.
    EmptyDescription,
    /// Due input does not match `MM-DD-YYYY HH:MM AM/PM`.
    InvalidDueFormat(String),
    /// Parsed wall-clock time does not exist unambiguously in the local zone.
    UnrepresentableLocalTime(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description cannot be empty"),
            Self::InvalidDueFormat(value) => write!(
                f,
                "due date `{value}` does not match MM-DD-YYYY HH:MM AM/PM"
            ),
            Self::UnrepresentableLocalTime(value) => write!(
                f,
                "due date `{value}` does not exist in the local timezone"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// One actionable item: what to do and when it is due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable ID used to address edits and completion.
    pub id: TaskId,
    /// Free-text description; sync-imported tasks use `[{course}] {name}`.
    pub description: String,
    /// Absolute due timestamp in the local zone.
    pub due: DateTime<Local>,
    /// Insertion timestamp. Never modified after creation.
    pub created: DateTime<Local>,
}

impl Task {
    /// Creates a task with a generated stable ID and `created = now`.
    pub fn new(description: impl Into<String>, due: DateTime<Local>) -> Self {
        Self::with_id(Uuid::new_v4(), description, due, Local::now())
    }

    /// Creates a task with caller-provided identity and creation time.
    ///
    /// Used by tests and round-trip paths where those values already exist.
    pub fn with_id(
        id: TaskId,
        description: impl Into<String>,
        due: DateTime<Local>,
        created: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            due,
            created,
        }
    }

    /// Checks the invariants every persisted task must hold.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.description.trim().is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        Ok(())
    }
}

/// Parses user-entered due input in the `MM-DD-YYYY HH:MM AM/PM` format.
///
/// The wall-clock time is interpreted in the local zone. Times that do not
/// exist there (DST transitions) are rejected rather than silently shifted.
pub fn parse_due_input(input: &str) -> Result<DateTime<Local>, TaskValidationError> {
    let trimmed = input.trim();
    let naive = NaiveDateTime::parse_from_str(trimmed, DUE_INPUT_FORMAT)
        .map_err(|_| TaskValidationError::InvalidDueFormat(trimmed.to_string()))?;
    Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| TaskValidationError::UnrepresentableLocalTime(trimmed.to_string()))
}
