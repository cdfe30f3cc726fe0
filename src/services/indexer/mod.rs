//! Event-to-day membership.
//!
//! An event belongs to the calendar day its start falls on; equality is on
//! year+month+day only, time-of-day is ignored. Two strategies share those
//! semantics: a per-cell linear scan, fine at small scale, and a day-key map
//! built once per fetch for O(1) lookups when a 42-cell grid would otherwise
//! rescan the full list per cell.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::event::CalendarEvent;
use crate::utils::date::day_key;

/// Whether `event` starts on the given calendar day.
pub fn same_day(event: &CalendarEvent, date: NaiveDate) -> bool {
    day_key(event.start) == date
}

/// All events starting on `date`, in input order. O(events) per call.
pub fn events_on_day<'a>(events: &'a [CalendarEvent], date: NaiveDate) -> Vec<&'a CalendarEvent> {
    events.iter().filter(|e| same_day(e, date)).collect()
}

/// Events pre-bucketed by day key. Build once per fetch; look up per cell.
#[derive(Debug, Clone, Default)]
pub struct DayIndex {
    buckets: HashMap<NaiveDate, Vec<CalendarEvent>>,
    len: usize,
}

impl DayIndex {
    /// Bucket the fetched events by calendar day. Each bucket is ordered by
    /// start time so the day view agenda comes out sorted.
    pub fn from_events(events: Vec<CalendarEvent>) -> Self {
        let len = events.len();
        let mut buckets: HashMap<NaiveDate, Vec<CalendarEvent>> = HashMap::new();
        for event in events {
            buckets.entry(day_key(event.start)).or_default().push(event);
        }
        for bucket in buckets.values_mut() {
            bucket.sort_by_key(|e| e.start);
        }
        Self { buckets, len }
    }

    /// Events on the given day, ordered by start time.
    pub fn events_for(&self, date: NaiveDate) -> &[CalendarEvent] {
        self.buckets.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of indexed events.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct days carrying at least one event.
    pub fn day_count(&self) -> usize {
        self.buckets.len()
    }
}
