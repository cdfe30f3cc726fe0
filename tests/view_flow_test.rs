// Integration tests for the calendar view flow: load, navigate, edit,
// delete, and the staleness rules around the remote store.

mod fixtures;

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Datelike;
use pretty_assertions::assert_eq;

use workdesk_calendar::models::settings::Settings;
use workdesk_calendar::models::view::{Selection, ViewMode};
use workdesk_calendar::services::form::{EventDialog, SubmitOutcome};
use workdesk_calendar::services::navigation::Direction;
use workdesk_calendar::services::store::{
    fetch_user_events, EventPatch, EventRecord, EventStore, NewEventRecord, StoreError,
};
use workdesk_calendar::services::view::CalendarViewState;

use fixtures::{dates, events};

/// Deterministic stand-in for the remote data service.
struct InMemoryEventStore {
    records: Mutex<BTreeMap<i64, EventRecord>>,
    next_id: Mutex<i64>,
    fail_next_fetch: AtomicBool,
}

impl InMemoryEventStore {
    fn new() -> Self {
        Self {
            records: Mutex::new(BTreeMap::new()),
            next_id: Mutex::new(1),
            fail_next_fetch: AtomicBool::new(false),
        }
    }

    fn seed(&self, record: EventRecord) {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id = (*next_id).max(record.id + 1);
        self.records.lock().unwrap().insert(record.id, record);
    }

    fn fail_next_fetch(&self) {
        self.fail_next_fetch.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn fetch_events(&self, _user_id: &str) -> Result<Vec<EventRecord>, StoreError> {
        if self.fail_next_fetch.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Status { status: 503 });
        }
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }

    async fn create_event(&self, record: NewEventRecord) -> Result<EventRecord, StoreError> {
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            id
        };
        let stored = EventRecord {
            id,
            title: record.title,
            description: record.description,
            start_time: record.start_time,
            end_time: record.end_time,
            all_day: record.all_day,
            location: record.location,
            event_type: record.event_type,
            project_id: record.project_id,
            client_id: record.client_id,
            project: None,
            client: None,
            created_at: None,
            updated_at: None,
        };
        self.records.lock().unwrap().insert(id, stored.clone());
        Ok(stored)
    }

    async fn update_event(&self, id: i64, patch: EventPatch) -> Result<EventRecord, StoreError> {
        let mut records = self.records.lock().unwrap();
        let record = records
            .get_mut(&id)
            .ok_or(StoreError::Status { status: 404 })?;
        if let Some(title) = patch.title {
            record.title = title;
        }
        if let Some(start_time) = patch.start_time {
            record.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            record.end_time = end_time;
        }
        if let Some(all_day) = patch.all_day {
            record.all_day = all_day;
        }
        if let Some(project_id) = patch.project_id {
            record.project_id = project_id;
        }
        Ok(record.clone())
    }

    async fn delete_event(&self, id: i64) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::Status { status: 404 })
    }
}

/// Run one full fetch cycle against the store and apply it to the view.
async fn refresh(view: &mut CalendarViewState, store: &InMemoryEventStore) {
    let request = view.begin_fetch();
    let result = fetch_user_events(store, "user-1").await;
    view.apply_fetch(request.generation, result);
}

#[tokio::test]
async fn test_initial_load_renders_fetched_events() {
    fixtures::init_logging();
    let store = InMemoryEventStore::new();
    store.seed(events::record(1, &events::timed(2025, 3, 15, 9, "Standup")));
    store.seed(events::record(2, &events::all_day(2025, 3, 20, "Fair")));

    let mut view = CalendarViewState::new(dates::saturday_mid_march());
    refresh(&mut view, &store).await;

    let cells = view.grid(dates::saturday_mid_march());
    assert_eq!(cells.len(), 42);
    let standup_cell = cells
        .iter()
        .find(|c| c.date == dates::saturday_mid_march())
        .unwrap();
    assert_eq!(standup_cell.events.len(), 1);
    assert!(standup_cell.is_today);

    let fair_cell = cells.iter().find(|c| c.events.iter().any(|e| e.all_day));
    assert!(fair_cell.is_some());
}

#[tokio::test]
async fn test_failed_initial_load_renders_empty_state() {
    fixtures::init_logging();
    let store = InMemoryEventStore::new();
    store.seed(events::record(1, &events::timed(2025, 3, 15, 9, "Hidden")));
    store.fail_next_fetch();

    let mut view = CalendarViewState::new(dates::saturday_mid_march());
    refresh(&mut view, &store).await;

    assert!(view.grid(dates::saturday_mid_march()).iter().all(|c| c.events.is_empty()));
    assert!(view.take_notice().is_some());

    // The user re-triggers; nothing retries on its own
    refresh(&mut view, &store).await;
    assert_eq!(view.agenda(dates::saturday_mid_march()).len(), 1);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_events() {
    fixtures::init_logging();
    let store = InMemoryEventStore::new();
    store.seed(events::record(1, &events::timed(2025, 3, 15, 9, "Kept")));

    let mut view = CalendarViewState::new(dates::saturday_mid_march());
    refresh(&mut view, &store).await;
    assert_eq!(view.agenda(dates::saturday_mid_march()).len(), 1);

    store.fail_next_fetch();
    refresh(&mut view, &store).await;

    assert_eq!(view.agenda(dates::saturday_mid_march()).len(), 1);
    assert!(view.take_notice().unwrap().contains("Could not load events"));
}

#[tokio::test]
async fn test_stale_fetch_cannot_overwrite_newer_navigation() {
    fixtures::init_logging();
    let store = InMemoryEventStore::new();
    store.seed(events::record(1, &events::timed(2025, 3, 15, 9, "March")));
    store.seed(events::record(2, &events::timed(2025, 4, 15, 9, "April")));

    let mut view = CalendarViewState::new(dates::saturday_mid_march());

    // First fetch goes out, then the user navigates before it lands
    let stale = view.begin_fetch();
    let stale_result = store.fetch_events("user-1").await.map(|records| {
        records
            .into_iter()
            .filter(|r| r.start_time.date_naive().month() == 3)
            .map(EventRecord::into_model)
            .collect()
    });

    view.navigate(Direction::Next);
    refresh(&mut view, &store).await;
    assert_eq!(view.agenda(chrono::NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()).len(), 1);

    // The superseded response arrives late and is dropped
    view.apply_fetch(stale.generation, stale_result);
    assert_eq!(view.agenda(chrono::NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()).len(), 1);
}

#[tokio::test]
async fn test_create_flow_through_dialog_and_store() {
    fixtures::init_logging();
    let store = InMemoryEventStore::new();
    let mut view = CalendarViewState::new(dates::saturday_mid_march());
    let settings = Settings::default();

    let mut dialog = EventDialog::default();
    dialog.open_create(dates::saturday_mid_march(), &settings);
    {
        let form = dialog.form_mut().unwrap();
        form.title = "Pitch prep".to_string();
        form.client_ref = "3".to_string();
    }

    let Some(SubmitOutcome::Create(event)) = dialog.submit() else {
        panic!("expected a create outcome");
    };
    let created = store
        .create_event(NewEventRecord::from_event(&event, "user-1"))
        .await
        .unwrap();
    assert_eq!(created.client_id, Some(3));

    refresh(&mut view, &store).await;
    let agenda = view.agenda(dates::saturday_mid_march());
    assert_eq!(agenda.len(), 1);
    assert_eq!(agenda[0].title, "Pitch prep");
    assert_eq!(agenda[0].id, Some(created.id));
}

#[tokio::test]
async fn test_edit_flow_updates_record() {
    fixtures::init_logging();
    let store = InMemoryEventStore::new();
    store.seed(events::record(9, &events::timed(2025, 3, 15, 9, "Old title")));

    let mut view = CalendarViewState::new(dates::saturday_mid_march());
    refresh(&mut view, &store).await;
    let existing = view.agenda(dates::saturday_mid_march())[0].clone();

    let mut dialog = EventDialog::default();
    dialog.open_edit(&existing);
    dialog.form_mut().unwrap().title = "New title".to_string();

    let Some(SubmitOutcome::Update(id, updated)) = dialog.submit() else {
        panic!("expected an update outcome");
    };
    assert_eq!(id, 9);
    store
        .update_event(id, EventPatch::from_event(&updated))
        .await
        .unwrap();

    refresh(&mut view, &store).await;
    assert_eq!(view.agenda(dates::saturday_mid_march())[0].title, "New title");
}

#[tokio::test]
async fn test_delete_flow_requires_confirmation() {
    fixtures::init_logging();
    let store = InMemoryEventStore::new();
    store.seed(events::record(5, &events::client_call(2025, 3, 15)));

    let mut view = CalendarViewState::new(dates::saturday_mid_march());
    refresh(&mut view, &store).await;
    assert_eq!(view.agenda(dates::saturday_mid_march()).len(), 1);

    let mut dialog = EventDialog::default();
    dialog.request_delete(5);
    // Cancelling the confirmation leaves the record alone
    dialog.cancel();
    assert_eq!(dialog.confirm_delete(), None);
    assert_eq!(store.fetch_events("user-1").await.unwrap().len(), 1);

    dialog.request_delete(5);
    let id = dialog.confirm_delete().unwrap();
    store.delete_event(id).await.unwrap();

    refresh(&mut view, &store).await;
    assert!(view.agenda(dates::saturday_mid_march()).is_empty());
}

#[tokio::test]
async fn test_month_navigation_clamps_into_short_month_grid() {
    fixtures::init_logging();
    let store = InMemoryEventStore::new();
    store.seed(events::record(1, &events::timed(2025, 2, 28, 9, "Month close")));

    let mut view = CalendarViewState::new(dates::jan_31());
    view.navigate(Direction::Next);
    // Feb has no 31st; the anchor clamps to the last valid day
    assert_eq!(
        view.anchor(),
        chrono::NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
    );

    refresh(&mut view, &store).await;
    let cells = view.grid(dates::first_of_february());
    assert_eq!(cells.len(), 42);
    assert_eq!(
        cells[0].date,
        chrono::NaiveDate::from_ymd_opt(2025, 1, 27).unwrap()
    );
    assert_eq!(view.agenda(view.anchor()).len(), 1);
}

#[tokio::test]
async fn test_mode_switch_and_selection_shapes_across_renders() {
    fixtures::init_logging();
    let store = InMemoryEventStore::new();
    store.seed(events::record(1, &events::timed(2025, 3, 10, 9, "Monday")));
    store.seed(events::record(2, &events::timed(2025, 3, 16, 9, "Sunday")));

    let mut view = CalendarViewState::new(dates::saturday_mid_march());
    refresh(&mut view, &store).await;

    view.set_mode(ViewMode::Week);
    assert_eq!(
        view.selection(),
        Selection::Range {
            from: chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            to: chrono::NaiveDate::from_ymd_opt(2025, 3, 16).unwrap(),
        }
    );
    let cells = view.grid(dates::saturday_mid_march());
    assert_eq!(cells.len(), 7);
    assert_eq!(cells[0].events.len(), 1);
    assert_eq!(cells[6].events.len(), 1);

    // Day mode narrows to the agenda; the week-shaped selection converts
    view.set_mode(ViewMode::Day);
    assert_eq!(view.selection(), Selection::Single(dates::saturday_mid_march()));
    assert_eq!(view.grid(dates::saturday_mid_march()).len(), 1);
}
