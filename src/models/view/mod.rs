// View models
// Shapes shared between the view controller, grid builder and the host page

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::event::CalendarEvent;

/// Which calendar representation is active. Selects both the range-derivation
/// rule and the selection-value shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    #[default]
    Month,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Day => "Day",
            ViewMode::Week => "Week",
            ViewMode::Month => "Month",
        }
    }
}

/// Inclusive date range, always derived from an anchor date and a view mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Iterate every day in the range, inclusive on both ends.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.from.iter_days().take_while({
            let to = self.to;
            move |d| *d <= to
        })
    }

    pub fn len_days(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }
}

/// The host page's selection value. Day and month views select a single
/// date; week view selects the whole visible window. Consumers match on the
/// variant rather than probing for a `from` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Single(NaiveDate),
    Range { from: NaiveDate, to: NaiveDate },
}

/// One renderable date slot. Ephemeral: rebuilt from (anchor, mode, today)
/// on every render, with no persistent identity.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub date: NaiveDate,
    /// False for the leading/trailing out-of-month days a 42-cell grid
    /// carries. Out-of-period cells stay selectable.
    pub in_current_period: bool,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
}

impl GridCell {
    pub fn new(date: NaiveDate, in_current_period: bool, is_today: bool) -> Self {
        Self {
            date,
            in_current_period,
            is_today,
            events: Vec::new(),
        }
    }
}
