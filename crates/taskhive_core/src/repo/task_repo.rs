//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide atomic CRUD primitives over the authoritative task mapping.
//! - Own id allocation: ids are handed out in strictly increasing order
//!   and never reused, even after deletion.
//!
//! # Invariants
//! - Each operation, including the `list` snapshot copy, runs under one
//!   exclusive lock for its full duration.
//! - `list` returns tasks in insertion order, tracked independently of
//!   the numeric id.
//! - Returned records are owned copies; later store mutation never
//!   changes a value already handed to a caller.

use crate::model::task::{NewTask, Task, TaskId, TaskPatch};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

pub type RepoResult<T> = Result<T, RepoError>;

/// Infrastructure failure of a repository operation.
///
/// Business conditions (missing id, duplicate title) are not errors at
/// this layer.
#[derive(Debug)]
pub enum RepoError {
    /// The store lock was poisoned by a panic in another thread.
    Poisoned,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Poisoned => write!(f, "task store lock poisoned"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for task CRUD operations.
///
/// Expressed as a trait so alternative backends (persistent, sharded)
/// can be substituted without touching the service layer.
pub trait TaskRepository {
    /// Returns a snapshot of all tasks in insertion order.
    fn list(&self) -> RepoResult<Vec<Task>>;
    /// Looks up one task by id. Absence is not an error.
    fn get(&self, id: TaskId) -> RepoResult<Option<Task>>;
    /// Allocates the next id, stores the record and returns it.
    fn create(&self, draft: &NewTask) -> RepoResult<Task>;
    /// Applies the provided patch fields; `None` when the id is absent.
    fn update(&self, id: TaskId, patch: &TaskPatch) -> RepoResult<Option<Task>>;
    /// Removes the record; returns whether it was present.
    fn delete(&self, id: TaskId) -> RepoResult<bool>;
}

impl<R: TaskRepository + ?Sized> TaskRepository for &R {
    fn list(&self) -> RepoResult<Vec<Task>> {
        (**self).list()
    }

    fn get(&self, id: TaskId) -> RepoResult<Option<Task>> {
        (**self).get(id)
    }

    fn create(&self, draft: &NewTask) -> RepoResult<Task> {
        (**self).create(draft)
    }

    fn update(&self, id: TaskId, patch: &TaskPatch) -> RepoResult<Option<Task>> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: TaskId) -> RepoResult<bool> {
        (**self).delete(id)
    }
}

impl<R: TaskRepository + ?Sized> TaskRepository for Arc<R> {
    fn list(&self) -> RepoResult<Vec<Task>> {
        (**self).list()
    }

    fn get(&self, id: TaskId) -> RepoResult<Option<Task>> {
        (**self).get(id)
    }

    fn create(&self, draft: &NewTask) -> RepoResult<Task> {
        (**self).create(draft)
    }

    fn update(&self, id: TaskId, patch: &TaskPatch) -> RepoResult<Option<Task>> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: TaskId) -> RepoResult<bool> {
        (**self).delete(id)
    }
}

/// Lock-guarded in-memory task repository.
///
/// One mutex guards the id-to-task mapping, the insertion-order key list
/// and the next-id counter together, so no operation can observe a state
/// where only part of a mutation has been applied.
pub struct InMemoryTaskRepository {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    tasks: HashMap<TaskId, Task>,
    /// Insertion order of live ids. Kept separately from the map so
    /// `list` order does not depend on hash iteration or numeric id.
    order: Vec<TaskId>,
    next_id: TaskId,
}

impl InMemoryTaskRepository {
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                tasks: HashMap::new(),
                order: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn locked(&self) -> RepoResult<std::sync::MutexGuard<'_, StoreInner>> {
        self.inner.lock().map_err(|_| RepoError::Poisoned)
    }
}

impl Default for InMemoryTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn list(&self) -> RepoResult<Vec<Task>> {
        let inner = self.locked()?;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.tasks.get(id))
            .cloned()
            .collect())
    }

    fn get(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let inner = self.locked()?;
        Ok(inner.tasks.get(&id).cloned())
    }

    fn create(&self, draft: &NewTask) -> RepoResult<Task> {
        let mut inner = self.locked()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let task = Task {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            done: draft.done,
        };
        inner.tasks.insert(id, task.clone());
        inner.order.push(id);
        Ok(task)
    }

    fn update(&self, id: TaskId, patch: &TaskPatch) -> RepoResult<Option<Task>> {
        let mut inner = self.locked()?;
        let Some(existing) = inner.tasks.get(&id) else {
            return Ok(None);
        };
        let updated = patch.apply_to(existing);
        inner.tasks.insert(id, updated.clone());
        Ok(Some(updated))
    }

    fn delete(&self, id: TaskId) -> RepoResult<bool> {
        let mut inner = self.locked()?;
        if inner.tasks.remove(&id).is_none() {
            return Ok(false);
        }
        inner.order.retain(|kept| *kept != id);
        Ok(true)
    }
}
