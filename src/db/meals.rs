use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::meal::{MealEntry, NewMealRequest};
use crate::models::report::DailyCalorieSum;

#[tracing::instrument(
    name = "Insert meal entry",
    skip(pool, request),
    fields(user_id = %user_id, date = %request.date, meal_type = %request.meal_type)
)]
pub async fn insert_meal(
    pool: &SqlitePool,
    user_id: i64,
    request: &NewMealRequest,
) -> Result<MealEntry, sqlx::Error> {
    sqlx::query_as::<_, MealEntry>(
        r#"
        INSERT INTO meals (user_id, date, meal_type, food_item, calories)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, user_id, date, meal_type, food_item, calories
        "#,
    )
    .bind(user_id)
    .bind(request.date)
    .bind(&request.meal_type)
    .bind(&request.food_item)
    .bind(request.calories)
    .fetch_one(pool)
    .await
}

#[tracing::instrument(name = "Delete meal entry", skip(pool), fields(user_id = %user_id))]
pub async fn delete_meal(
    pool: &SqlitePool,
    user_id: i64,
    meal_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM meals
        WHERE id = ?1 AND user_id = ?2
        "#,
    )
    .bind(meal_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn meals_for_day(
    pool: &SqlitePool,
    user_id: i64,
    date: NaiveDate,
) -> Result<Vec<MealEntry>, sqlx::Error> {
    sqlx::query_as::<_, MealEntry>(
        r#"
        SELECT id, user_id, date, meal_type, food_item, calories
        FROM meals
        WHERE user_id = ?1 AND date = ?2
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .bind(date)
    .fetch_all(pool)
    .await
}

/// Grouped per-day calorie sums from `since` onward. Sparse: days without
/// meals produce no row.
pub async fn daily_calorie_sums(
    pool: &SqlitePool,
    user_id: i64,
    since: NaiveDate,
) -> Result<Vec<DailyCalorieSum>, sqlx::Error> {
    sqlx::query_as::<_, DailyCalorieSum>(
        r#"
        SELECT date, SUM(calories) AS total_calories
        FROM meals
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
