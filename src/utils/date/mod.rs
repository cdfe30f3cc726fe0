// Date utility functions
// Calendar-day arithmetic shared by the grid, indexer and navigation code

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

/// Number of cells in a month grid: 6 rows of 7 days.
pub const MONTH_GRID_CELLS: usize = 42;

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// Strip the time-of-day from an instant, leaving the calendar day used for
/// same-day membership tests.
pub fn day_key(instant: DateTime<Local>) -> NaiveDate {
    instant.date_naive()
}

pub fn start_of_day(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|dt| dt.and_local_timezone(date.timezone()).earliest())
        .unwrap_or(date)
}

pub fn end_of_day(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(23, 59, 59)
        .and_then(|dt| dt.and_local_timezone(date.timezone()).latest())
        .unwrap_or(date)
}

/// The Monday on or before the given date.
///
/// `number_from_monday` is 1 for Monday through 7 for Sunday, so the offset
/// back to Monday is uniformly `weekday - 1` days. Sunday counts as weekday 7,
/// never 0.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().number_from_monday() as i64;
    date - Duration::days(weekday - 1)
}

/// First cell of the month grid containing `date`: the Monday on or before
/// the 1st of that month.
pub fn month_grid_origin(date: NaiveDate) -> NaiveDate {
    let first_of_month = date.with_day(1).unwrap_or(date);
    week_start(first_of_month)
}

pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Build a date in `year`/`month`, clamping the day to the last valid day of
/// that month instead of letting it roll over.
pub fn clamp_day(year: i32, month: u32, desired_day: u32) -> NaiveDate {
    let max_day = last_day_of_month(year, month);
    let day = desired_day.min(max_day);
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, max_day))
        .unwrap_or(NaiveDate::MIN)
}

/// Shift by whole months, preserving the day-of-month where the target month
/// allows it and clamping to the month end otherwise.
pub fn shift_month(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    clamp_day(new_year, new_month as u32, current.day())
}
