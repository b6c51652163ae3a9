//! Task entity
//!
//! The simplest of the four kinds: a checkable item with an optional due
//! date, category, and tags.

use crate::entity::{EntityDraft, EntityKind};
use crate::ids::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single to-do item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier
    pub id: EntityId,
    /// Identifying label; defaults to `"Untitled Task"` when omitted
    pub title: String,
    /// Whether the task has been checked off
    #[serde(default)]
    pub completed: bool,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Calendar day the task is due
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// User-chosen grouping label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-form labels
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl EntityKind for Task {
    type Draft = TaskDraft;

    const KIND: &'static str = "task";
    const DEFAULT_TITLE: &'static str = "Untitled Task";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Partial task for create/update calls
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl TaskDraft {
    /// Draft carrying only a title
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// With completion state
    #[inline]
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// With due date
    #[inline]
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// With category
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl EntityDraft for TaskDraft {
    type Entity = Task;

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    fn materialize(self, id: EntityId) -> Task {
        Task {
            id,
            title: self.title.unwrap_or_else(|| Task::DEFAULT_TITLE.to_string()),
            completed: self.completed.unwrap_or(false),
            description: self.description,
            due_date: self.due_date,
            category: self.category,
            tags: self.tags.unwrap_or_default(),
        }
    }

    fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(description) = self.description {
            task.description = Some(description);
        }
        if let Some(due_date) = self.due_date {
            task.due_date = Some(due_date);
        }
        if let Some(category) = self.category {
            task.category = Some(category);
        }
        if let Some(tags) = self.tags {
            task.tags = tags;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_normalizes_to_default_title() {
        let mut draft = TaskDraft::default();
        draft.normalize();
        assert_eq!(draft.title.as_deref(), Some("Untitled Task"));
    }

    #[test]
    fn empty_string_title_is_substituted_too() {
        let mut draft = TaskDraft::titled("");
        draft.normalize();
        assert_eq!(draft.title.as_deref(), Some("Untitled Task"));
    }

    #[test]
    fn present_title_survives_normalization() {
        let mut draft = TaskDraft::titled("Water the plants");
        draft.normalize();
        assert_eq!(draft.title.as_deref(), Some("Water the plants"));
    }

    #[test]
    fn apply_leaves_absent_fields_untouched() {
        let task = TaskDraft::titled("Original")
            .with_category("home")
            .materialize(EntityId::generate());
        let mut updated = task.clone();
        TaskDraft::default().with_completed(true).apply_to(&mut updated);
        assert!(updated.completed);
        assert_eq!(updated.title, "Original");
        assert_eq!(updated.category.as_deref(), Some("home"));
    }
}
