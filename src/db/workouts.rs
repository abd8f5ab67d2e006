use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::report::DailyActivitySum;
use crate::models::workout::{NewWorkoutRequest, WorkoutEntry};

#[tracing::instrument(
    name = "Insert workout entry",
    skip(pool, request),
    fields(user_id = %user_id, date = %request.date, exercise_type = %request.exercise_type)
)]
pub async fn insert_workout(
    pool: &SqlitePool,
    user_id: i64,
    request: &NewWorkoutRequest,
) -> Result<WorkoutEntry, sqlx::Error> {
    sqlx::query_as::<_, WorkoutEntry>(
        r#"
        INSERT INTO workouts (user_id, date, exercise_type, duration_minutes, calories_burned, notes)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING id, user_id, date, exercise_type, duration_minutes, calories_burned, notes
        "#,
    )
    .bind(user_id)
    .bind(request.date)
    .bind(&request.exercise_type)
    .bind(request.duration_minutes)
    .bind(request.calories_burned())
    .bind(&request.notes)
    .fetch_one(pool)
    .await
}

/// Delete is scoped to the owning user so one user cannot remove another's
/// entries by guessing ids.
#[tracing::instrument(name = "Delete workout entry", skip(pool), fields(user_id = %user_id))]
pub async fn delete_workout(
    pool: &SqlitePool,
    user_id: i64,
    workout_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM workouts
        WHERE id = ?1 AND user_id = ?2
        "#,
    )
    .bind(workout_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn workouts_for_day(
    pool: &SqlitePool,
    user_id: i64,
    date: NaiveDate,
) -> Result<Vec<WorkoutEntry>, sqlx::Error> {
    sqlx::query_as::<_, WorkoutEntry>(
        r#"
        SELECT id, user_id, date, exercise_type, duration_minutes, calories_burned, notes
        FROM workouts
        WHERE user_id = ?1 AND date = ?2
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .bind(date)
    .fetch_all(pool)
    .await
}

/// Grouped per-day duration and calorie sums from `since` onward. Sparse:
/// days without workouts produce no row.
pub async fn daily_activity_sums(
    pool: &SqlitePool,
    user_id: i64,
    since: NaiveDate,
) -> Result<Vec<DailyActivitySum>, sqlx::Error> {
    sqlx::query_as::<_, DailyActivitySum>(
        r#"
        SELECT date,
               SUM(duration_minutes) AS total_duration,
               SUM(calories_burned) AS total_calories
        FROM workouts
        WHERE user_id = ?1 AND date >= ?2
        GROUP BY date
        ORDER BY date
        "#,
    )
    .bind(user_id)
    .bind(since)
    .fetch_all(pool)
    .await
}
