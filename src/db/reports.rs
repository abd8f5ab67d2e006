use std::collections::HashMap;

use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::db::{meals, workouts};
use crate::models::report::SevenDaySeries;
use crate::utils::series::{window_dates, window_start, zero_fill};

/// Build the dense 7-day activity series for the window ending at `today`.
///
/// The grouped queries return sparse per-day sums; days with no records are
/// absent entirely. The sums are keyed by date and expanded against the full
/// window so every series always has exactly 7 date-ascending entries.
#[tracing::instrument(
    name = "Build seven day series",
    skip(pool),
    fields(user_id = %user_id, today = %today)
)]
pub async fn seven_day_series(
    pool: &SqlitePool,
    user_id: i64,
    today: NaiveDate,
) -> Result<SevenDaySeries, sqlx::Error> {
    let since = window_start(today);

    let activity = workouts::daily_activity_sums(pool, user_id, since).await?;
    let meal_calories = meals::daily_calorie_sums(pool, user_id, since).await?;

    let durations_by_day: HashMap<NaiveDate, i64> = activity
        .iter()
        .map(|row| (row.date, row.total_duration))
        .collect();
    let burned_by_day: HashMap<NaiveDate, i64> = activity
        .iter()
        .map(|row| (row.date, row.total_calories))
        .collect();
    let consumed_by_day: HashMap<NaiveDate, i64> = meal_calories
        .iter()
        .map(|row| (row.date, row.total_calories))
        .collect();

    let dates = window_dates(today);
    Ok(SevenDaySeries {
        durations: zero_fill(&dates, &durations_by_day),
        burned: zero_fill(&dates, &burned_by_day),
        consumed: zero_fill(&dates, &consumed_by_day),
        dates,
    })
}
