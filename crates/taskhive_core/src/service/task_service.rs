//! Task use-case service.
//!
//! # Responsibility
//! - Provide the CRUD entry points consumed by boundary layers.
//! - Enforce title uniqueness and existence-before-mutate, translating
//!   absence into a typed `NotFound`.
//!
//! # Invariants
//! - The service never bypasses the repository contract and performs no
//!   locking of its own.
//! - Title comparison is case-insensitive via Unicode lowercasing.

use crate::model::task::{NewTask, Task, TaskId, TaskPatch};
use crate::repo::task_repo::{RepoError, RepoResult, TaskRepository};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Typed failure surfaced to the boundary layer.
#[derive(Debug)]
pub enum ServiceError {
    /// The requested id does not correspond to a live task.
    NotFound(TaskId),
    /// A live task already carries this title (case-insensitively).
    DuplicateTitle(String),
    /// Repository infrastructure failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::DuplicateTitle(title) => {
                write!(f, "a task titled `{title}` already exists")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateTitle(_) => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper for task CRUD operations.
///
/// The repository is injected at construction; the service is stateless
/// over it and safe to recreate freely.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns all live tasks in insertion order.
    pub fn list_tasks(&self) -> RepoResult<Vec<Task>> {
        self.repo.list()
    }

    /// Gets one task by id.
    ///
    /// # Errors
    /// - `NotFound` when the id has no live task.
    pub fn get_task(&self, id: TaskId) -> ServiceResult<Task> {
        self.repo.get(id)?.ok_or(ServiceError::NotFound(id))
    }

    /// Creates a task after checking title uniqueness.
    ///
    /// The duplicate scan and the insert are two repository calls, each
    /// atomic on its own but not combined: two concurrent creates with
    /// the same title can both pass the scan before either inserts.
    ///
    /// # Errors
    /// - `DuplicateTitle` when a live task already carries the title,
    ///   compared case-insensitively.
    pub fn create_task(&self, draft: &NewTask) -> ServiceResult<Task> {
        let wanted = draft.title.to_lowercase();
        let clash = self
            .repo
            .list()?
            .into_iter()
            .any(|existing| existing.title.to_lowercase() == wanted);
        if clash {
            warn!(
                "event=task_create_rejected module=service status=duplicate_title title_chars={}",
                draft.title.chars().count()
            );
            return Err(ServiceError::DuplicateTitle(draft.title.clone()));
        }

        let task = self.repo.create(draft)?;
        info!(
            "event=task_created module=service status=ok id={} done={}",
            task.id, task.done
        );
        Ok(task)
    }

    /// Applies a partial update to an existing task.
    ///
    /// Fields the patch leaves unset keep their stored values; an empty
    /// patch returns the record unchanged. Title uniqueness is not
    /// re-checked on update.
    ///
    /// # Errors
    /// - `NotFound` when the id has no live task.
    pub fn update_task(&self, id: TaskId, patch: &TaskPatch) -> ServiceResult<Task> {
        let updated = self
            .repo
            .update(id, patch)?
            .ok_or(ServiceError::NotFound(id))?;
        info!(
            "event=task_updated module=service status=ok id={} done={}",
            updated.id, updated.done
        );
        Ok(updated)
    }

    /// Deletes a task by id.
    ///
    /// # Errors
    /// - `NotFound` when the id has no live task, including a repeat
    ///   delete of an already-removed id.
    pub fn delete_task(&self, id: TaskId) -> ServiceResult<()> {
        if !self.repo.delete(id)? {
            return Err(ServiceError::NotFound(id));
        }
        info!("event=task_deleted module=service status=ok id={id}");
        Ok(())
    }
}
