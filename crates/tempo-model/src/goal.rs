//! Goal entity

use crate::entity::{EntityDraft, EntityKind};
use crate::ids::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Being worked toward (creation default)
    #[default]
    Active,
    /// Reached
    Completed,
    /// Shelved without completion
    Archived,
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalStatus::Active => write!(f, "active"),
            GoalStatus::Completed => write!(f, "completed"),
            GoalStatus::Archived => write!(f, "archived"),
        }
    }
}

/// A longer-horizon objective with optional progress tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: EntityId,
    pub title: String,
    pub status: GoalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    /// Completion percentage, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl EntityKind for Goal {
    type Draft = GoalDraft;

    const KIND: &'static str = "goal";
    const DEFAULT_TITLE: &'static str = "Untitled Goal";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Partial goal for create/update calls
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalDraft {
    pub title: Option<String>,
    pub status: Option<GoalStatus>,
    pub description: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub progress: Option<u8>,
    pub category: Option<String>,
}

impl GoalDraft {
    /// Draft carrying only a title
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// With progress percentage
    #[inline]
    #[must_use]
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = Some(progress);
        self
    }
}

impl EntityDraft for GoalDraft {
    type Entity = Goal;

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    fn materialize(self, id: EntityId) -> Goal {
        Goal {
            id,
            title: self.title.unwrap_or_else(|| Goal::DEFAULT_TITLE.to_string()),
            status: self.status.unwrap_or_default(),
            description: self.description,
            target_date: self.target_date,
            progress: self.progress,
            category: self.category,
        }
    }

    fn apply_to(self, goal: &mut Goal) {
        if let Some(title) = self.title {
            goal.title = title;
        }
        if let Some(status) = self.status {
            goal.status = status;
        }
        if let Some(description) = self.description {
            goal.description = Some(description);
        }
        if let Some(target_date) = self.target_date {
            goal.target_date = Some(target_date);
        }
        if let Some(progress) = self.progress {
            goal.progress = Some(progress);
        }
        if let Some(category) = self.category {
            goal.category = Some(category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_materializes_active_default_titled_goal() {
        let goal = GoalDraft::default().materialize(EntityId::generate());
        assert_eq!(goal.title, "Untitled Goal");
        assert_eq!(goal.status, GoalStatus::Active);
    }
}
