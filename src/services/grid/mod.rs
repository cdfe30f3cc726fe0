//! Grid builder: maps an anchor date and view mode to renderable date cells.
//!
//! Pure functions of their inputs. The cell sequence is fully recomputed on
//! every call with no internal memoization, so repeated calls with identical
//! inputs yield identical output and the host page can safely rebuild on
//! every render.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::event::CalendarEvent;
use crate::models::view::{DateRange, GridCell, ViewMode};
use crate::services::indexer::DayIndex;
use crate::utils::date::{month_grid_origin, week_start, MONTH_GRID_CELLS};

/// Derive the visible date range for an anchor and mode.
///
/// - day: `[anchor, anchor]`
/// - week: the Monday-start 7-day window containing the anchor
/// - month: the 42-cell window opening on the Monday on or before the 1st
///   of the anchor's month
pub fn visible_range(anchor: NaiveDate, mode: ViewMode) -> DateRange {
    match mode {
        ViewMode::Day => DateRange::new(anchor, anchor),
        ViewMode::Week => {
            let start = week_start(anchor);
            DateRange::new(start, start + Duration::days(6))
        }
        ViewMode::Month => {
            let origin = month_grid_origin(anchor);
            DateRange::new(origin, origin + Duration::days(MONTH_GRID_CELLS as i64 - 1))
        }
    }
}

/// Build the cell sequence for the given anchor and mode, without events.
///
/// Month mode always yields exactly 42 cells regardless of the month's
/// length; days outside the anchor's month are flagged out-of-period but
/// remain selectable. Week mode yields 7 cells, Monday through Sunday. Day
/// mode yields the single cell backing the agenda list.
pub fn build_cells(anchor: NaiveDate, mode: ViewMode, today: NaiveDate) -> Vec<GridCell> {
    let range = visible_range(anchor, mode);
    range
        .days()
        .map(|date| {
            let in_current_period = match mode {
                // Out-of-month leading/trailing days are de-emphasized
                ViewMode::Month => {
                    date.month() == anchor.month() && date.year() == anchor.year()
                }
                ViewMode::Day | ViewMode::Week => true,
            };
            GridCell::new(date, in_current_period, date == today)
        })
        .collect()
}

/// Build cells and attach each day's events from a prebuilt index.
pub fn build_cells_with_events(
    anchor: NaiveDate,
    mode: ViewMode,
    today: NaiveDate,
    index: &DayIndex,
) -> Vec<GridCell> {
    let mut cells = build_cells(anchor, mode, today);
    for cell in &mut cells {
        cell.events = index.events_for(cell.date).to_vec();
    }
    cells
}

/// Attach events to an existing cell sequence by scanning the full list.
/// Equivalent to the indexed variant; costs O(cells × events).
pub fn attach_events_by_scan(cells: &mut [GridCell], events: &[CalendarEvent]) {
    for cell in cells.iter_mut() {
        cell.events = crate::services::indexer::events_on_day(events, cell.date)
            .into_iter()
            .cloned()
            .collect();
    }
}
