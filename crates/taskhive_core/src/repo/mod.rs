//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data-access contract for task records.
//! - Keep locking and storage details out of service orchestration.
//!
//! # Invariants
//! - Repositories know nothing about business rules; absence of a record
//!   is reported as `Option`/`bool`, never as an error.
//! - Every operation on one store instance is serialized: callers observe
//!   a single total order with no partially-applied mutation.

pub mod task_repo;
