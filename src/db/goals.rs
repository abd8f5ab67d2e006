use sqlx::SqlitePool;

use crate::models::goal::{Goal, NewGoalRequest, UpdateGoalRequest, WEIGHT_GOAL_TYPE};
use crate::models::report::WeightCheckpoint;

#[tracing::instrument(
    name = "Insert goal",
    skip(pool, request),
    fields(user_id = %user_id, goal_type = %request.goal_type)
)]
pub async fn insert_goal(
    pool: &SqlitePool,
    user_id: i64,
    request: &NewGoalRequest,
) -> Result<Goal, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        INSERT INTO goals (user_id, goal_type, target_value, target_date, current_value)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, user_id, goal_type, target_value, target_date, current_value, completed
        "#,
    )
    .bind(user_id)
    .bind(&request.goal_type)
    .bind(request.target_value)
    .bind(request.target_date)
    .bind(request.current_value)
    .fetch_one(pool)
    .await
}

/// current_value and completed are the only mutable columns.
#[tracing::instrument(name = "Update goal progress", skip(pool, update), fields(user_id = %user_id))]
pub async fn update_goal(
    pool: &SqlitePool,
    user_id: i64,
    goal_id: i64,
    update: &UpdateGoalRequest,
) -> Result<Option<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        UPDATE goals
        SET current_value = ?1, completed = ?2
        WHERE id = ?3 AND user_id = ?4
        RETURNING id, user_id, goal_type, target_value, target_date, current_value, completed
        "#,
    )
    .bind(update.current_value)
    .bind(update.completed)
    .bind(goal_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Delete goal", skip(pool), fields(user_id = %user_id))]
pub async fn delete_goal(
    pool: &SqlitePool,
    user_id: i64,
    goal_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM goals
        WHERE id = ?1 AND user_id = ?2
        "#,
    )
    .bind(goal_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn goals_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Goal>, sqlx::Error> {
    sqlx::query_as::<_, Goal>(
        r#"
        SELECT id, user_id, goal_type, target_value, target_date, current_value, completed
        FROM goals
        WHERE user_id = ?1
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Weight-type goals only, in chronological target-date order. Goals are
/// sparse checkpoints, not a daily series, so no zero-fill applies.
pub async fn weight_checkpoints(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<WeightCheckpoint>, sqlx::Error> {
    sqlx::query_as::<_, WeightCheckpoint>(
        r#"
        SELECT target_date, target_value, current_value
        FROM goals
        WHERE user_id = ?1 AND goal_type = ?2
        ORDER BY target_date
        "#,
    )
    .bind(user_id)
    .bind(WEIGHT_GOAL_TYPE)
    .fetch_all(pool)
    .await
}
