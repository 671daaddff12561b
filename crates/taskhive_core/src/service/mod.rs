//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Enforce cross-record invariants the repository does not know about.
//!
//! # Invariants
//! - Services hold no mutable state of their own; all mutation goes
//!   through the injected repository.

pub mod task_service;
