//! Task store contract and JSON file implementation.
//!
//! # Responsibility
//! - Load and save the full task collection as human-diffable JSON.
//! - Surface corrupt persisted state instead of masking it.
//!
//! # Invariants
//! - `save` writes the complete collection or nothing: the payload lands in
//!   a sibling temp file first and is renamed over the target.
//! - `load` never overwrites the file, so corrupt data survives for manual
//!   recovery.

use crate::model::task::Task;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for the task collection.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem read/write failure.
    Io(io::Error),
    /// Persisted data exists but cannot be parsed as a task collection.
    Corrupt { path: PathBuf, message: String },
    /// The collection could not be serialized.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Corrupt { path, message } => {
                write!(f, "corrupt task file `{}`: {message}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to serialize tasks: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Corrupt { .. } => None,
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Whole-collection persistence contract.
///
/// Callers always pass the complete collection; no partial writes exist.
pub trait TaskStore {
    fn load(&self) -> StoreResult<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> StoreResult<()>;
}

/// File-backed store serializing the collection as a pretty JSON array.
///
/// The storage location is an explicit constructor argument; no process-wide
/// default path exists.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store bound to one file location.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the bound file location.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<Task>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(
                    "event=store_load module=store status=ok count=0 missing=true path={}",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        let tasks: Vec<Task> = serde_json::from_str(&text).map_err(|err| StoreError::Corrupt {
            path: self.path.clone(),
            message: err.to_string(),
        })?;

        info!(
            "event=store_load module=store status=ok count={} path={}",
            tasks.len(),
            self.path.display()
        );
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let mut body = serde_json::to_string_pretty(tasks).map_err(StoreError::Serialize)?;
        body.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write-then-rename so readers never observe a half-written file.
        let mut tmp_name = self.path.clone().into_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, body)?;
        fs::rename(&tmp_path, &self.path)?;

        info!(
            "event=store_save module=store status=ok count={} path={}",
            tasks.len(),
            self.path.display()
        );
        Ok(())
    }
}
