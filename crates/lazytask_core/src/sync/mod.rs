//! External learning-management sync.
//!
//! # Responsibility
//! - Define the read-only source contract for remote assignment data.
//! - Import remote assignments into the local task collection.
//!
//! # Invariants
//! - Import funnels every new task through the task service add path.
//! - Credentials are caller-supplied configuration, never embedded.

pub mod canvas;
pub mod import;
pub mod source;
