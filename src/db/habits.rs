use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::habit::{Habit, NewHabitRequest};

#[tracing::instrument(
    name = "Insert habit",
    skip(pool, request),
    fields(user_id = %user_id, habit_name = %request.habit_name)
)]
pub async fn insert_habit(
    pool: &SqlitePool,
    user_id: i64,
    request: &NewHabitRequest,
) -> Result<Habit, sqlx::Error> {
    sqlx::query_as::<_, Habit>(
        r#"
        INSERT INTO habits (user_id, habit_name, frequency, goal_description)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, user_id, habit_name, frequency, goal_description, streak, last_completed
        "#,
    )
    .bind(user_id)
    .bind(&request.habit_name)
    .bind(&request.frequency)
    .bind(&request.goal_description)
    .fetch_one(pool)
    .await
}

/// Mark a habit completed for `today`. The increment-and-stamp is a single
/// conditional UPDATE, so repeated or concurrent completions on the same day
/// cannot double-count: the second one matches no row.
///
/// Returns the updated habit, or None when either the habit does not exist
/// for this user or it was already completed today — callers that need to
/// distinguish the two re-fetch by id.
#[tracing::instrument(
    name = "Complete habit",
    skip(pool),
    fields(user_id = %user_id, habit_id = %habit_id, today = %today)
)]
pub async fn complete_habit(
    pool: &SqlitePool,
    user_id: i64,
    habit_id: i64,
    today: NaiveDate,
) -> Result<Option<Habit>, sqlx::Error> {
    sqlx::query_as::<_, Habit>(
        r#"
        UPDATE habits
        SET streak = streak + 1, last_completed = ?3
        WHERE id = ?1 AND user_id = ?2
          AND (last_completed IS NULL OR last_completed != ?3)
        RETURNING id, user_id, habit_name, frequency, goal_description, streak, last_completed
        "#,
    )
    .bind(habit_id)
    .bind(user_id)
    .bind(today)
    .fetch_optional(pool)
    .await
}

pub async fn fetch_habit(
    pool: &SqlitePool,
    user_id: i64,
    habit_id: i64,
) -> Result<Option<Habit>, sqlx::Error> {
    sqlx::query_as::<_, Habit>(
        r#"
        SELECT id, user_id, habit_name, frequency, goal_description, streak, last_completed
        FROM habits
        WHERE id = ?1 AND user_id = ?2
        "#,
    )
    .bind(habit_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Delete habit", skip(pool), fields(user_id = %user_id))]
pub async fn delete_habit(
    pool: &SqlitePool,
    user_id: i64,
    habit_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM habits
        WHERE id = ?1 AND user_id = ?2
        "#,
    )
    .bind(habit_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn habits_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Habit>, sqlx::Error> {
    sqlx::query_as::<_, Habit>(
        r#"
        SELECT id, user_id, habit_name, frequency, goal_description, streak, last_completed
        FROM habits
        WHERE user_id = ?1
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
