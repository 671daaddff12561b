//! Domain model for task records.
//!
//! # Responsibility
//! - Define the canonical task record and its companion input shapes.
//! - Own structural validation rules so boundary layers can reject bad
//!   input before it reaches service or repository code.
//!
//! # Invariants
//! - Every task is identified by a store-assigned `TaskId` that is never
//!   reused, even after deletion.
//! - Validation lives here, not in the repository: the store accepts any
//!   well-formed value it is handed.

pub mod task;
