//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record returned by every read path.
//! - Provide creation/patch input shapes with explicit field-provided
//!   semantics for partial updates.
//!
//! # Invariants
//! - `id` is assigned by the store, strictly increasing, never reused.
//! - `title` is 1..=200 chars; `description` is at most 2000 chars.
//! - A `TaskPatch` field left as `None` means "keep the current value",
//!   never "reset to default".

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable numeric identifier assigned by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u64;

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 200;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 2000;

/// Structural validation failure for task input shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
    TitleTooLong { chars: usize },
    DescriptionTooLong { chars: usize },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::TitleTooLong { chars } => write!(
                f,
                "title is {chars} chars, maximum is {TITLE_MAX_CHARS}"
            ),
            Self::DescriptionTooLong { chars } => write!(
                f,
                "description is {chars} chars, maximum is {DESCRIPTION_MAX_CHARS}"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
///
/// Read operations return owned copies of this value; later mutation of
/// the store never changes a copy already handed out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned stable ID used for lookup, update and delete.
    pub id: TaskId,
    /// Short human label, unique case-insensitively among live tasks.
    pub title: String,
    /// Optional free-form detail text.
    pub description: Option<String>,
    /// Completion flag, starts as `false`.
    pub done: bool,
}

/// Input fields for creating a task.
///
/// The store fills in `id`; everything else comes from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub done: bool,
}

impl NewTask {
    /// Creates a draft with the given title and no description.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            done: false,
        }
    }

    /// Creates a draft with a title and description.
    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            done: false,
        }
    }

    /// Checks structural constraints on the draft.
    ///
    /// # Errors
    /// - `EmptyTitle` when the title has no characters.
    /// - `TitleTooLong` / `DescriptionTooLong` when char counts exceed the
    ///   documented maxima. Counts are chars, not bytes.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_title(&self.title)?;
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }
}

/// Partial update for an existing task.
///
/// Each field carries an explicit provided/not-provided flag: `None`
/// keeps the stored value. For `description` the inner option allows
/// clearing: `Some(None)` removes the description entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub done: Option<bool>,
}

impl TaskPatch {
    /// Sets a replacement title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Clears the description.
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Sets the completion flag.
    pub fn done(mut self, done: bool) -> Self {
        self.done = Some(done);
        self
    }

    /// Returns whether the patch provides no fields at all.
    ///
    /// An empty patch is a valid no-op update, not an error.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.done.is_none()
    }

    /// Checks structural constraints on the provided fields only.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(Some(description)) = &self.description {
            validate_description(description)?;
        }
        Ok(())
    }

    /// Applies the provided fields on top of an existing record.
    pub fn apply_to(&self, task: &Task) -> Task {
        Task {
            id: task.id,
            title: self.title.clone().unwrap_or_else(|| task.title.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| task.description.clone()),
            done: self.done.unwrap_or(task.done),
        }
    }
}

fn validate_title(title: &str) -> Result<(), TaskValidationError> {
    let chars = title.chars().count();
    if chars == 0 {
        return Err(TaskValidationError::EmptyTitle);
    }
    if chars > TITLE_MAX_CHARS {
        return Err(TaskValidationError::TitleTooLong { chars });
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), TaskValidationError> {
    let chars = description.chars().count();
    if chars > DESCRIPTION_MAX_CHARS {
        return Err(TaskValidationError::DescriptionTooLong { chars });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        NewTask, Task, TaskPatch, TaskValidationError, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
    };

    fn stored_task() -> Task {
        Task {
            id: 7,
            title: "Water plants".to_string(),
            description: Some("balcony first".to_string()),
            done: false,
        }
    }

    #[test]
    fn validate_accepts_title_at_limit() {
        let draft = NewTask::new("x".repeat(TITLE_MAX_CHARS));
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_title() {
        let draft = NewTask::new("");
        assert_eq!(draft.validate(), Err(TaskValidationError::EmptyTitle));
    }

    #[test]
    fn validate_rejects_over_length_title_and_description() {
        let draft = NewTask::new("y".repeat(TITLE_MAX_CHARS + 1));
        assert!(matches!(
            draft.validate(),
            Err(TaskValidationError::TitleTooLong { .. })
        ));

        let draft = NewTask::with_description("ok", "z".repeat(DESCRIPTION_MAX_CHARS + 1));
        assert!(matches!(
            draft.validate(),
            Err(TaskValidationError::DescriptionTooLong { .. })
        ));
    }

    #[test]
    fn validate_counts_chars_not_bytes() {
        // 200 multibyte chars are within the limit even though the byte
        // length is far larger.
        let draft = NewTask::new("ё".repeat(TITLE_MAX_CHARS));
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn empty_patch_applies_as_identity() {
        let task = stored_task();
        let patch = TaskPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply_to(&task), task);
    }

    #[test]
    fn patch_applies_only_provided_fields() {
        let task = stored_task();
        let updated = TaskPatch::default().done(true).apply_to(&task);
        assert_eq!(updated.title, task.title);
        assert_eq!(updated.description, task.description);
        assert!(updated.done);
    }

    #[test]
    fn patch_can_clear_description() {
        let task = stored_task();
        let updated = TaskPatch::default().clear_description().apply_to(&task);
        assert_eq!(updated.description, None);
        assert_eq!(updated.title, task.title);
    }

    #[test]
    fn patch_validates_only_provided_fields() {
        let patch = TaskPatch::default().done(true);
        assert_eq!(patch.validate(), Ok(()));

        let patch = TaskPatch::default().title("");
        assert_eq!(patch.validate(), Err(TaskValidationError::EmptyTitle));
    }

    #[test]
    fn task_serializes_with_stable_field_names() {
        let task = stored_task();
        let json = serde_json::to_value(&task).expect("task should serialize");
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Water plants");
        assert_eq!(json["done"], false);
    }

    #[test]
    fn new_task_deserializes_with_defaults() {
        let draft: NewTask =
            serde_json::from_str(r#"{"title":"Buy milk"}"#).expect("draft should parse");
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.description, None);
        assert!(!draft.done);
    }
}
