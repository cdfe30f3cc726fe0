// Event module
// Calendar event model scoped to one user account

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Kind of business activity an event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Meeting,
    Call,
    Internal,
    Deadline,
    Other,
}

impl EventType {
    /// Human-readable label for grid chips and dialogs.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Meeting => "Meeting",
            EventType::Call => "Call",
            EventType::Internal => "Internal",
            EventType::Deadline => "Deadline",
            EventType::Other => "Other",
        }
    }

    /// Wire name used by the data service.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Meeting => "meeting",
            EventType::Call => "call",
            EventType::Internal => "internal",
            EventType::Deadline => "deadline",
            EventType::Other => "other",
        }
    }

    /// Parse a wire name; unknown values fall back to `Other`.
    pub fn parse(value: &str) -> Self {
        match value {
            "meeting" => EventType::Meeting,
            "call" => EventType::Call,
            "internal" => EventType::Internal,
            "deadline" => EventType::Deadline,
            _ => EventType::Other,
        }
    }

    pub const ALL: [EventType; 5] = [
        EventType::Meeting,
        EventType::Call,
        EventType::Internal,
        EventType::Deadline,
        EventType::Other,
    ];
}

/// Calendar event owned by exactly one user account.
///
/// Start and end are independently settable for timed events; the service
/// accepts an end before the start, so no ordering is enforced here. All-day
/// events carry start == end at local midnight.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub all_day: bool,
    pub event_type: EventType,
    pub project_id: Option<i64>,
    pub client_id: Option<i64>,
    /// Denormalized labels supplied by the data service on fetch.
    pub project_name: Option<String>,
    pub client_name: Option<String>,
    pub created_at: Option<DateTime<Local>>,
    pub updated_at: Option<DateTime<Local>>,
}

impl CalendarEvent {
    /// Create a new event with required fields.
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start instant
    /// * `end` - Event end instant
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, String> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        Ok(Self {
            id: None,
            title,
            description: None,
            location: None,
            start,
            end,
            all_day: false,
            event_type: EventType::default(),
            project_id: None,
            client_id: None,
            project_name: None,
            client_name: None,
            created_at: None,
            updated_at: None,
        })
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event. Checks the title only; start/end ordering is
    /// intentionally unchecked for timed events.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    title: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    all_day: bool,
    event_type: EventType,
    project_id: Option<i64>,
    client_id: Option<i64>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            location: None,
            start: None,
            end: None,
            all_day: false,
            event_type: EventType::default(),
            project_id: None,
            client_id: None,
        }
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the event location
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the start instant
    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end instant
    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set as all-day event
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Set the event type
    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.event_type = event_type;
        self
    }

    /// Link the event to a project
    pub fn project_id(mut self, project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Link the event to a client
    pub fn client_id(mut self, client_id: i64) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<CalendarEvent, String> {
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = CalendarEvent {
            id: None,
            title,
            description: self.description,
            location: self.location,
            start,
            end,
            all_day: self.all_day,
            event_type: self.event_type,
            project_id: self.project_id,
            client_id: self.client_id,
            project_name: None,
            client_name: None,
            created_at: None,
            updated_at: None,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
