//! Event form state, validation and record composition, plus the
//! create/edit dialog state machine.
//!
//! The form mirrors the dialog's raw inputs: a date, two time-of-day
//! fields, a couple of select widgets whose unset value is the literal
//! string `"none"`, and free-text fields. Submission either composes a
//! persistable [`CalendarEvent`] or reports a field-scoped validation
//! error that keeps the dialog open.

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use thiserror::Error;

use crate::models::event::{CalendarEvent, EventType};
use crate::models::settings::Settings;

/// Sentinel the project/client selects report when nothing is chosen.
pub const NONE_SENTINEL: &str = "none";

/// Which form field a validation error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    StartTime,
    EndTime,
}

/// A user-visible, field-scoped validation failure. Fully recoverable by
/// editing the form; nothing is submitted while one is outstanding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FormField,
    pub message: String,
}

impl ValidationError {
    fn title(message: impl Into<String>) -> Self {
        Self {
            field: FormField::Title,
            message: message.into(),
        }
    }
}

/// Raw dialog field state.
#[derive(Debug, Clone, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub all_day: bool,
    pub event_type: EventType,
    /// Raw select values; `"none"` (or blank) means no reference.
    pub project_ref: String,
    pub client_ref: String,
    pub error: Option<ValidationError>,
}

impl EventForm {
    /// Blank form for a new event on the given day, prefilled from the
    /// configured default start time and duration.
    pub fn new_event(date: NaiveDate, settings: &Settings) -> Self {
        let start_time = settings.default_start_time();
        let end = NaiveDateTime::new(date, start_time)
            + chrono::Duration::minutes(settings.default_event_duration);

        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            date,
            start_time,
            end_time: end.time(),
            all_day: false,
            event_type: EventType::default(),
            project_ref: NONE_SENTINEL.to_string(),
            client_ref: NONE_SENTINEL.to_string(),
            error: None,
        }
    }

    /// Prefill from an existing event for editing.
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            location: event.location.clone().unwrap_or_default(),
            date: event.start.date_naive(),
            start_time: event.start.time(),
            end_time: event.end.time(),
            all_day: event.all_day,
            event_type: event.event_type,
            project_ref: event
                .project_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| NONE_SENTINEL.to_string()),
            client_ref: event
                .client_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| NONE_SENTINEL.to_string()),
            error: None,
        }
    }

    /// Map a raw select value to a foreign-key reference. The `"none"`
    /// sentinel and blank/unparsable values mean no reference; the literal
    /// string never reaches a record.
    pub fn parse_reference(raw: &str) -> Option<i64> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case(NONE_SENTINEL) {
            return None;
        }
        raw.parse::<i64>().ok()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::title("Event title is required"));
        }
        Ok(())
    }

    fn local_datetime(
        date: NaiveDate,
        time: NaiveTime,
        field: FormField,
    ) -> Result<DateTime<Local>, ValidationError> {
        match Local.from_local_datetime(&NaiveDateTime::new(date, time)) {
            LocalResult::Single(dt) => Ok(dt),
            LocalResult::Ambiguous(dt, _) => Ok(dt),
            LocalResult::None => Err(ValidationError {
                field,
                message: "Time is invalid for the selected day".to_string(),
            }),
        }
    }

    /// Compose the persistable event.
    ///
    /// All-day events collapse start and end to the form date at local
    /// midnight; whatever the time inputs hold is ignored entirely. Timed
    /// events combine the date with each time field as given; an end
    /// before the start is composed as-is, not rejected or swapped.
    pub fn compose(&self) -> Result<CalendarEvent, ValidationError> {
        self.validate()?;

        let midnight = NaiveTime::MIN;
        let (start, end) = if self.all_day {
            let day_start = Self::local_datetime(self.date, midnight, FormField::StartTime)?;
            (day_start, day_start)
        } else {
            (
                Self::local_datetime(self.date, self.start_time, FormField::StartTime)?,
                Self::local_datetime(self.date, self.end_time, FormField::EndTime)?,
            )
        };

        let mut event = CalendarEvent::new(self.title.trim(), start, end)
            .map_err(ValidationError::title)?;
        event.all_day = self.all_day;
        event.event_type = self.event_type;
        if !self.description.trim().is_empty() {
            event.description = Some(self.description.trim().to_string());
        }
        if !self.location.trim().is_empty() {
            event.location = Some(self.location.trim().to_string());
        }
        event.project_id = Self::parse_reference(&self.project_ref);
        event.client_id = Self::parse_reference(&self.client_ref);

        Ok(event)
    }
}

/// What a successful submit targets.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Create(CalendarEvent),
    Update(i64, CalendarEvent),
}

/// Create/edit dialog state machine.
///
/// `Closed -> Open(create, blank)` via [`EventDialog::open_create`]; a valid
/// submit closes the dialog and yields the outcome for the caller to
/// persist; an invalid submit keeps it open with the error shown. Editing
/// follows the same transitions against an update target. Cancel discards
/// in-progress edits. Deletion goes through an explicit confirmation state
/// before the store call.
#[derive(Debug, Default, PartialEq)]
pub enum EventDialog {
    #[default]
    Closed,
    Open {
        target: DialogTarget,
        form: EventForm,
    },
    ConfirmingDelete {
        event_id: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTarget {
    Create,
    Edit(i64),
}

impl EventDialog {
    pub fn open_create(&mut self, date: NaiveDate, settings: &Settings) {
        *self = EventDialog::Open {
            target: DialogTarget::Create,
            form: EventForm::new_event(date, settings),
        };
    }

    pub fn open_edit(&mut self, event: &CalendarEvent) {
        let Some(id) = event.id else {
            log::warn!("cannot edit an event without an id");
            return;
        };
        *self = EventDialog::Open {
            target: DialogTarget::Edit(id),
            form: EventForm::from_event(event),
        };
    }

    /// Ask for confirmation before a delete; the store call happens only
    /// after [`EventDialog::confirm_delete`].
    pub fn request_delete(&mut self, event_id: i64) {
        *self = EventDialog::ConfirmingDelete { event_id };
    }

    /// Confirm a pending delete, returning the id to remove.
    pub fn confirm_delete(&mut self) -> Option<i64> {
        if let EventDialog::ConfirmingDelete { event_id } = *self {
            *self = EventDialog::Closed;
            Some(event_id)
        } else {
            None
        }
    }

    /// Close without persisting; in-progress edits are discarded.
    pub fn cancel(&mut self) {
        *self = EventDialog::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EventDialog::Closed)
    }

    pub fn form_mut(&mut self) -> Option<&mut EventForm> {
        match self {
            EventDialog::Open { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Submit the open form. On success the dialog closes and the caller
    /// persists the outcome; on validation failure the dialog stays open
    /// with the error attached to the offending field.
    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        let EventDialog::Open { target, form } = self else {
            return None;
        };

        match form.compose() {
            Ok(event) => {
                let outcome = match *target {
                    DialogTarget::Create => SubmitOutcome::Create(event),
                    DialogTarget::Edit(id) => SubmitOutcome::Update(id, event),
                };
                *self = EventDialog::Closed;
                Some(outcome)
            }
            Err(err) => {
                log::debug!("event form rejected: {err}");
                form.error = Some(err);
                None
            }
        }
    }
}
