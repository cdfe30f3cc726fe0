//! Remote event store client surface.
//!
//! Record persistence lives in the Workdesk data service; this module owns
//! the typed trait the rest of the crate talks to, the JSON record shapes,
//! and the reqwest implementation. All calls are async and non-blocking;
//! nothing here retries on its own and no client-side timeout is imposed.
//! A failure is surfaced once and the user re-triggers the action.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::event::CalendarEvent;

pub mod records;
pub mod remote;

pub use records::{EventPatch, EventRecord, NewEventRecord};
pub use remote::RemoteEventStore;

/// Failure talking to the event service.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("network error talking to the event service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("event service returned HTTP {status}")]
    Status { status: u16 },
    #[error("event service returned a malformed record: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Create/read/update/delete of calendar events scoped to one user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventStore: Send + Sync {
    /// All events owned by the given user.
    async fn fetch_events(&self, user_id: &str) -> Result<Vec<EventRecord>, StoreError>;

    /// Persist a new event; the service assigns the id and timestamps.
    async fn create_event(&self, record: NewEventRecord) -> Result<EventRecord, StoreError>;

    /// Apply a partial update to an existing event.
    async fn update_event(&self, id: i64, patch: EventPatch) -> Result<EventRecord, StoreError>;

    /// Delete an event. The UI confirms explicitly before calling this.
    async fn delete_event(&self, id: i64) -> Result<(), StoreError>;
}

/// Fetch a user's events and map the wire records to models.
pub async fn fetch_user_events(
    store: &dyn EventStore,
    user_id: &str,
) -> Result<Vec<CalendarEvent>, StoreError> {
    let records = store.fetch_events(user_id).await?;
    Ok(records.into_iter().map(EventRecord::into_model).collect())
}
