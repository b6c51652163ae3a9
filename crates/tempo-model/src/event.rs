//! Calendar event entity

use crate::entity::{EntityDraft, EntityKind};
use crate::ids::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar entry with a required start instant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EntityId,
    pub title: String,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Display color hint, e.g. `"#7c3aed"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl EntityKind for Event {
    type Draft = EventDraft;

    const KIND: &'static str = "event";
    const DEFAULT_TITLE: &'static str = "Untitled Event";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Partial event for create/update calls
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub end_time: Option<DateTime<Utc>>,
    pub color: Option<String>,
    pub location: Option<String>,
}

impl EventDraft {
    /// Draft carrying only a title
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// With start instant
    #[inline]
    #[must_use]
    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// With location
    #[inline]
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl EntityDraft for EventDraft {
    type Entity = Event;

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    fn materialize(self, id: EntityId) -> Event {
        Event {
            id,
            title: self.title.unwrap_or_else(|| Event::DEFAULT_TITLE.to_string()),
            // A created event needs a start instant; absent one, it starts now.
            start_time: self.start_time.unwrap_or_else(Utc::now),
            description: self.description,
            end_time: self.end_time,
            color: self.color,
            location: self.location,
        }
    }

    fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(start_time) = self.start_time {
            event.start_time = start_time;
        }
        if let Some(description) = self.description {
            event.description = Some(description);
        }
        if let Some(end_time) = self.end_time {
            event.end_time = Some(end_time);
        }
        if let Some(color) = self.color {
            event.color = Some(color);
        }
        if let Some(location) = self.location {
            event.location = Some(location);
        }
    }
}
