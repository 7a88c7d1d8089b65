//! Task use-case service.
//!
//! # Responsibility
//! - Own the in-memory task collection and orchestrate every mutation.
//! - Validate manual input before it reaches the collection.
//!
//! # Invariants
//! - The collection holds tasks in insertion order; `list_by_due` derives
//!   the display ordering without reordering storage.
//! - After every public mutation the in-memory collection matches the
//!   persisted state: a failed save rolls the mutation back.
//! - `created` and `id` are never modified after insertion.

use crate::model::task::{parse_due_input, Task, TaskId, TaskValidationError};
use crate::store::task_store::{StoreError, TaskStore};
use chrono::{DateTime, Local};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Service error for task operations.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Manual input was rejected; the collection is unchanged.
    Validation(TaskValidationError),
    /// No task carries the given ID.
    NotFound(TaskId),
    /// Persistence failure; the mutation was rolled back.
    Store(StoreError),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for TaskServiceError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for TaskServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case service owning the task collection and its store.
pub struct TaskService<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
}

impl<S: TaskStore> TaskService<S> {
    /// Opens the service over persisted state.
    ///
    /// A missing file yields an empty collection; corrupt persisted data is
    /// surfaced unchanged so the caller can decide recovery policy.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let tasks = store.load()?;
        Ok(Self { store, tasks })
    }

    /// Adds a manually entered task.
    ///
    /// `due_input` must match `MM-DD-YYYY HH:MM AM/PM`. On success the task
    /// is appended with `created = now` and the collection is persisted.
    pub fn add_task(&mut self, description: &str, due_input: &str) -> TaskServiceResult<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskValidationError::EmptyDescription.into());
        }
        let due = parse_due_input(due_input)?;

        let task = Task::new(description, due);
        self.tasks.push(task.clone());
        if let Err(err) = self.store.save(&self.tasks) {
            self.tasks.pop();
            return Err(err.into());
        }

        info!(
            "event=task_add module=service status=ok id={} due={}",
            task.id,
            task.due.to_rfc3339()
        );
        Ok(task)
    }

    /// Rewrites the description and due date of one task.
    ///
    /// Validation matches [`add_task`]. `id` and `created` stay untouched,
    /// and any failure leaves the stored task exactly as it was.
    pub fn update_task(
        &mut self,
        id: TaskId,
        description: &str,
        due_input: &str,
    ) -> TaskServiceResult<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskValidationError::EmptyDescription.into());
        }
        let due = parse_due_input(due_input)?;

        let position = self
            .position_of(id)
            .ok_or(TaskServiceError::NotFound(id))?;
        let previous = self.tasks[position].clone();

        self.tasks[position].description = description.to_string();
        self.tasks[position].due = due;
        if let Err(err) = self.store.save(&self.tasks) {
            self.tasks[position] = previous;
            return Err(err.into());
        }

        info!("event=task_update module=service status=ok id={id}");
        Ok(self.tasks[position].clone())
    }

    /// Completes (removes) one task and returns the removed record.
    pub fn complete_task(&mut self, id: TaskId) -> TaskServiceResult<Task> {
        let position = self
            .position_of(id)
            .ok_or(TaskServiceError::NotFound(id))?;

        let removed = self.tasks.remove(position);
        if let Err(err) = self.store.save(&self.tasks) {
            self.tasks.insert(position, removed);
            return Err(err.into());
        }

        info!("event=task_complete module=service status=ok id={id}");
        Ok(removed)
    }

    /// Tasks ordered ascending by due date.
    ///
    /// The sort is stable: tasks sharing a due date keep insertion order, so
    /// repeated listings are reproducible between calls.
    pub fn list_by_due(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.tasks.iter().collect();
        view.sort_by_key(|task| task.due);
        view
    }

    /// Looks up one task by stable ID.
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks currently held.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Exact, case-sensitive membership test used by sync de-duplication.
    pub fn has_description(&self, description: &str) -> bool {
        self.tasks.iter().any(|task| task.description == description)
    }

    /// Appends an already well-formed task without persisting.
    ///
    /// This is the import-side add path: the due timestamp is taken as-is
    /// instead of being parsed from display format, but an empty description
    /// is still rejected. Import callers batch appends and call [`persist`]
    /// once at the end.
    ///
    /// [`persist`]: Self::persist
    pub fn import_task(
        &mut self,
        description: impl Into<String>,
        due: DateTime<Local>,
    ) -> TaskServiceResult<Task> {
        let task = Task::new(description, due);
        task.validate()?;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Writes the full collection through the store.
    pub fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.tasks)
    }

    fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}
