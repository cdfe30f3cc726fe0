//! Range-based navigation: the next anchor date for a navigation action.
//!
//! Step sizes are per mode: one day, one week, one month. Month steps
//! preserve the day-of-month and clamp to the target month's last day when
//! the source day does not exist there; raw date arithmetic would roll into
//! the following month instead. Day and week steps are exact inverses of
//! each other. Month steps are not: once clamping fires, prev(next(d)) can
//! land on a different day (Jan 31 -> Feb 28 -> Jan 28), which is the
//! documented behavior, not a defect.

use chrono::{Duration, NaiveDate};

use crate::models::view::ViewMode;
use crate::utils::date::shift_month;

/// Direction of a navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Compute the new anchor for one navigation step.
pub fn advance(anchor: NaiveDate, mode: ViewMode, direction: Direction) -> NaiveDate {
    let sign: i32 = match direction {
        Direction::Previous => -1,
        Direction::Next => 1,
    };
    match mode {
        ViewMode::Day => anchor + Duration::days(sign as i64),
        ViewMode::Week => anchor + Duration::weeks(sign as i64),
        ViewMode::Month => shift_month(anchor, sign),
    }
}
