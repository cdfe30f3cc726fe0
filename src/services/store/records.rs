//! JSON record shapes exchanged with the data service, and the mapping
//! between wire records and the `CalendarEvent` model.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::event::{CalendarEvent, EventType};

/// Denormalized foreign-key label the service attaches on fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub name: String,
}

/// An event as the service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub all_day: bool,
    #[serde(default)]
    pub location: Option<String>,
    pub event_type: EventType,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub client_id: Option<i64>,
    #[serde(default)]
    pub project: Option<NamedRef>,
    #[serde(default)]
    pub client: Option<NamedRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Local>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Local>>,
}

impl EventRecord {
    pub fn into_model(self) -> CalendarEvent {
        CalendarEvent {
            id: Some(self.id),
            title: self.title,
            description: self.description,
            location: self.location,
            start: self.start_time,
            end: self.end_time,
            all_day: self.all_day,
            event_type: self.event_type,
            project_id: self.project_id,
            client_id: self.client_id,
            project_name: self.project.map(|p| p.name),
            client_name: self.client.map(|c| c.name),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Payload for creating an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEventRecord {
    pub user_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub all_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub event_type: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
}

impl NewEventRecord {
    pub fn from_event(event: &CalendarEvent, user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            title: event.title.clone(),
            description: event.description.clone(),
            start_time: event.start,
            end_time: event.end,
            all_day: event.all_day,
            location: event.location.clone(),
            event_type: event.event_type,
            project_id: event.project_id,
            client_id: event.client_id,
        }
    }
}

/// Partial update; only the populated fields change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Local>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Local>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Option<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Option<i64>>,
}

impl EventPatch {
    /// A patch rewriting every persistable field from the composed event.
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            title: Some(event.title.clone()),
            description: Some(event.description.clone()),
            start_time: Some(event.start),
            end_time: Some(event.end),
            all_day: Some(event.all_day),
            location: Some(event.location.clone()),
            event_type: Some(event.event_type),
            project_id: Some(event.project_id),
            client_id: Some(event.client_id),
        }
    }
}
