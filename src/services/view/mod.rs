//! View-mode controller: the single owner of calendar view state.
//!
//! Holds the active mode, the anchor date and the host page's selection
//! value, derives the visible range, and correlates event fetches with the
//! navigation state that issued them so a late response can never
//! overwrite a newer one. All computation here is synchronous; the store
//! round-trip happens outside and hands its result back through
//! [`CalendarViewState::apply_fetch`].

use chrono::NaiveDate;

use crate::models::event::CalendarEvent;
use crate::models::view::{DateRange, GridCell, Selection, ViewMode};
use crate::services::grid;
use crate::services::indexer::DayIndex;
use crate::services::navigation::{self, Direction};
use crate::services::store::StoreError;

/// Correlation handle for one event fetch: the generation stamp plus the
/// range and mode that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub range: DateRange,
    pub mode: ViewMode,
}

/// Calendar view state for the lifetime of one page view.
///
/// The anchor resets to the injected "today" on construction; nothing is
/// persisted.
pub struct CalendarViewState {
    mode: ViewMode,
    anchor: NaiveDate,
    selection: Selection,
    index: DayIndex,
    /// Stamp handed to the most recent fetch; responses carrying an older
    /// stamp are stale and get discarded.
    current_generation: u64,
    loading: bool,
    /// Whether any fetch has ever been applied; decides empty-state vs.
    /// keep-previous on failure.
    loaded_once: bool,
    notice: Option<String>,
}

impl CalendarViewState {
    /// Fresh view state anchored on the injected current date.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_mode(today, ViewMode::default())
    }

    pub fn with_mode(today: NaiveDate, mode: ViewMode) -> Self {
        let mut state = Self {
            mode,
            anchor: today,
            selection: Selection::Single(today),
            index: DayIndex::default(),
            current_generation: 0,
            loading: false,
            loaded_once: false,
            notice: None,
        };
        state.selection = state.selection_for_mode();
        state
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// The selection value exposed to the host page: a scalar date in day
    /// and month modes, a `{from, to}` pair in week mode.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Take the transient error notice, if a background refresh failed.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// The visible range for the current anchor and mode.
    pub fn visible_range(&self) -> DateRange {
        grid::visible_range(self.anchor, self.mode)
    }

    /// Switch representation, keeping the focused date inside the new
    /// period. The selection value is converted between shapes rather than
    /// erroring when the stored shape doesn't match the new mode.
    pub fn set_mode(&mut self, mode: ViewMode) {
        if self.mode == mode {
            return;
        }
        log::debug!("view mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.selection = self.selection_for_mode();
    }

    /// Apply an explicit selection from the host page. A shape that doesn't
    /// fit the current mode is a logic error on the caller's side; it is
    /// handled by falling back to the anchor date, never by panicking,
    /// since the selection's shape legitimately changes between renders
    /// when the mode does.
    pub fn select(&mut self, selection: Selection) {
        match (self.mode, selection) {
            (ViewMode::Day | ViewMode::Month, Selection::Single(date)) => {
                self.anchor = date;
            }
            (ViewMode::Week, Selection::Range { from, .. }) => {
                self.anchor = from;
            }
            (mode, other) => {
                log::debug!(
                    "selection shape {other:?} does not fit mode {mode:?}; keeping anchor {}",
                    self.anchor
                );
            }
        }
        self.selection = self.selection_for_mode();
    }

    /// The single date the current selection focuses, with the anchor as
    /// the defensive fallback for shape mismatches.
    pub fn selection_anchor(&self) -> NaiveDate {
        match (self.mode, self.selection) {
            (ViewMode::Day | ViewMode::Month, Selection::Single(date)) => date,
            (ViewMode::Week, Selection::Range { from, .. }) => from,
            _ => self.anchor,
        }
    }

    /// One navigation step in the current mode.
    pub fn navigate(&mut self, direction: Direction) {
        self.anchor = navigation::advance(self.anchor, self.mode, direction);
        self.selection = self.selection_for_mode();
    }

    /// Re-anchor on the injected current date.
    pub fn jump_to_today(&mut self, today: NaiveDate) {
        self.anchor = today;
        self.selection = self.selection_for_mode();
    }

    /// Stamp a new fetch for the current range. Any response issued for an
    /// earlier stamp becomes stale from this point on.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.current_generation += 1;
        self.loading = true;
        FetchRequest {
            generation: self.current_generation,
            range: self.visible_range(),
            mode: self.mode,
        }
    }

    /// Hand a completed fetch back to the view. Responses for superseded
    /// generations are discarded. A failed refresh keeps the previously
    /// rendered events and records a transient notice; a failed initial
    /// load leaves the empty state.
    pub fn apply_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<CalendarEvent>, StoreError>,
    ) {
        if generation != self.current_generation {
            log::debug!(
                "discarding stale fetch response (generation {generation}, current {})",
                self.current_generation
            );
            return;
        }
        self.loading = false;
        match result {
            Ok(events) => {
                log::debug!("applying {} events to view", events.len());
                self.index = DayIndex::from_events(events);
                self.loaded_once = true;
            }
            Err(err) => {
                log::warn!("event fetch failed: {err}");
                if !self.loaded_once {
                    self.index = DayIndex::default();
                }
                self.notice = Some(format!("Could not load events: {err}"));
            }
        }
    }

    /// The renderable cells for the active view, events attached. Fully
    /// recomputed on every call.
    pub fn grid(&self, today: NaiveDate) -> Vec<GridCell> {
        grid::build_cells_with_events(self.anchor, self.mode, today, &self.index)
    }

    /// The agenda list backing day view: that day's events ordered by
    /// start time.
    pub fn agenda(&self, date: NaiveDate) -> &[CalendarEvent] {
        self.index.events_for(date)
    }

    fn selection_for_mode(&self) -> Selection {
        match self.mode {
            ViewMode::Day | ViewMode::Month => Selection::Single(self.anchor),
            ViewMode::Week => {
                let range = grid::visible_range(self.anchor, ViewMode::Week);
                Selection::Range {
                    from: range.from,
                    to: range.to,
                }
            }
        }
    }
}
