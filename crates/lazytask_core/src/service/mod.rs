//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store access into use-case level task operations.
//! - Keep presentation layers decoupled from storage details.

pub mod task_service;
