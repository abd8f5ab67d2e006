use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

/// Length of the reporting window, in days. The window covers the
/// consecutive calendar days ending at and including "today".
pub const SERIES_WINDOW_DAYS: i64 = 7;

/// First day of the window (inclusive). Grouped queries filter on
/// `date >= window_start(today)`.
pub fn window_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(SERIES_WINDOW_DAYS - 1)
}

/// All days of the window in ascending chronological order, today last.
pub fn window_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (0..SERIES_WINDOW_DAYS)
        .rev()
        .map(|days_back| today - Duration::days(days_back))
        .collect()
}

/// Expand a sparse date → sum mapping into a dense series parallel to
/// `dates`. Grouped queries emit no row at all for a day with zero activity,
/// so missing days must become explicit zeros or chart consumers would see a
/// shorter, misaligned series.
pub fn zero_fill(dates: &[NaiveDate], sums: &HashMap<NaiveDate, i64>) -> Vec<i64> {
    dates
        .iter()
        .map(|date| sums.get(date).copied().unwrap_or(0))
        .collect()
}
