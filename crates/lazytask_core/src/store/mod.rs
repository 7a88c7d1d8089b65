//! Persistence layer for the task collection.
//!
//! # Responsibility
//! - Define the whole-collection load/save contract.
//! - Keep file-format details inside the store boundary.
//!
//! # Invariants
//! - Saves replace the persisted state atomically.
//! - A missing file reads as an empty collection; an unparseable file is a
//!   corrupt-state error, never silently discarded.

pub mod task_store;
