//! Project entity
//!
//! Projects are the one kind whose status crosses the client boundary as a
//! raw string (the original form widget submits free text). Unknown values
//! are silently dropped during normalization rather than rejected.

use crate::entity::{EntityDraft, EntityKind};
use crate::ids::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Idea,
    Planning,
    InProgress,
    Completed,
    Archived,
}

/// Raw string did not name a known project status
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for ProjectStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "idea" => Ok(ProjectStatus::Idea),
            "planning" => Ok(ProjectStatus::Planning),
            "in-progress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            "archived" => Ok(ProjectStatus::Archived),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Idea => write!(f, "idea"),
            ProjectStatus::Planning => write!(f, "planning"),
            ProjectStatus::InProgress => write!(f, "in-progress"),
            ProjectStatus::Completed => write!(f, "completed"),
            ProjectStatus::Archived => write!(f, "archived"),
        }
    }
}

/// A multi-step undertaking with an optional lifecycle status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f32>,
}

impl Project {
    /// Derived completion flag
    #[inline]
    #[must_use]
    pub fn completed(&self) -> bool {
        matches!(self.status, Some(ProjectStatus::Completed))
    }
}

impl EntityKind for Project {
    type Draft = ProjectDraft;

    const KIND: &'static str = "project";
    const DEFAULT_TITLE: &'static str = "Untitled Project";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Partial project for create/update calls
///
/// `status` stays a raw string here; see [`ProjectDraft::normalize`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub estimated_hours: Option<f32>,
}

impl ProjectDraft {
    /// Draft carrying only a title
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// With a raw status string, coerced during normalization
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// With estimated hours
    #[inline]
    #[must_use]
    pub fn with_estimated_hours(mut self, hours: f32) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    fn parsed_status(&self) -> Option<ProjectStatus> {
        self.status.as_deref().and_then(|raw| raw.parse().ok())
    }
}

impl EntityDraft for ProjectDraft {
    type Entity = Project;

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    /// Default-title substitution plus status coercion: a raw status
    /// outside the known enumeration becomes `None`, silently.
    fn normalize(&mut self) {
        if self.title().map_or(true, str::is_empty) {
            self.set_title(Project::DEFAULT_TITLE.to_string());
        }
        if let Some(raw) = &self.status {
            if ProjectStatus::from_str(raw).is_err() {
                self.status = None;
            }
        }
    }

    fn materialize(self, id: EntityId) -> Project {
        let status = self.parsed_status();
        Project {
            id,
            title: self
                .title
                .unwrap_or_else(|| Project::DEFAULT_TITLE.to_string()),
            status,
            description: self.description,
            due_date: self.due_date,
            category: self.category,
            tags: self.tags.unwrap_or_default(),
            estimated_hours: self.estimated_hours,
        }
    }

    fn apply_to(self, project: &mut Project) {
        let status = self.parsed_status();
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(status) = status {
            project.status = Some(status);
        }
        if let Some(description) = self.description {
            project.description = Some(description);
        }
        if let Some(due_date) = self.due_date {
            project.due_date = Some(due_date);
        }
        if let Some(category) = self.category {
            project.category = Some(category);
        }
        if let Some(tags) = self.tags {
            project.tags = tags;
        }
        if let Some(estimated_hours) = self.estimated_hours {
            project.estimated_hours = Some(estimated_hours);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_parse() {
        assert_eq!(
            "in-progress".parse::<ProjectStatus>(),
            Ok(ProjectStatus::InProgress)
        );
        assert_eq!("idea".parse::<ProjectStatus>(), Ok(ProjectStatus::Idea));
    }

    #[test]
    fn bogus_status_is_dropped_not_stored() {
        let mut draft = ProjectDraft::titled("Ship v1").with_status("bogus");
        draft.normalize();
        assert_eq!(draft.status, None);

        let project = ProjectDraft::titled("Ship v1")
            .with_status("bogus")
            .materialize(EntityId::generate());
        assert_eq!(project.status, None);
    }

    #[test]
    fn completed_is_derived_from_status() {
        let done = ProjectDraft::titled("Done")
            .with_status("completed")
            .materialize(EntityId::generate());
        assert!(done.completed());

        let idea = ProjectDraft::titled("Idea")
            .with_status("idea")
            .materialize(EntityId::generate());
        assert!(!idea.completed());
    }

    #[test]
    fn untitled_draft_gets_project_placeholder() {
        let mut draft = ProjectDraft::default();
        draft.normalize();
        assert_eq!(draft.title.as_deref(), Some("Untitled Project"));
    }
}
