// Test fixtures - reusable test data
// Provides consistent dates and events across the integration tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};

use workdesk_calendar::models::event::{CalendarEvent, EventType};
use workdesk_calendar::services::store::EventRecord;

/// Initialize test logging once; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Saturday, March 15, 2025, a mid-month weekend anchor
    pub fn saturday_mid_march() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    /// Saturday, February 1, 2025; the short month whose grid opens in January
    pub fn first_of_february() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    /// Friday, January 31, 2025; the month-navigation clamping case
    pub fn jan_31() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    pub fn instant(y: i32, m: u32, d: u32, hour: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, hour, min, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// A one-hour timed event on the given day.
    pub fn timed(y: i32, m: u32, d: u32, hour: u32, title: &str) -> CalendarEvent {
        let start = dates::instant(y, m, d, hour, 0);
        CalendarEvent::new(title, start, start + Duration::hours(1)).unwrap()
    }

    /// An all-day event, start and end collapsed to local midnight.
    pub fn all_day(y: i32, m: u32, d: u32, title: &str) -> CalendarEvent {
        let start = dates::instant(y, m, d, 0, 0);
        let mut event = CalendarEvent::new(title, start, start).unwrap();
        event.all_day = true;
        event
    }

    /// A client call linked to project and client references.
    pub fn client_call(y: i32, m: u32, d: u32) -> CalendarEvent {
        CalendarEvent::builder()
            .title("Client call")
            .start(dates::instant(y, m, d, 11, 0))
            .end(dates::instant(y, m, d, 11, 30))
            .event_type(EventType::Call)
            .project_id(7)
            .client_id(3)
            .build()
            .unwrap()
    }

    /// Wire-shaped record as the data service would return it.
    pub fn record(id: i64, event: &CalendarEvent) -> EventRecord {
        EventRecord {
            id,
            title: event.title.clone(),
            description: event.description.clone(),
            start_time: event.start,
            end_time: event.end,
            all_day: event.all_day,
            location: event.location.clone(),
            event_type: event.event_type,
            project_id: event.project_id,
            client_id: event.client_id,
            project: None,
            client: None,
            created_at: None,
            updated_at: None,
        }
    }
}
