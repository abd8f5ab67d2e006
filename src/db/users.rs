use chrono::Utc;
use secrecy::ExposeSecret;
use sqlx::SqlitePool;

use crate::models::user::{
    RegistrationRequest, UpdateProfileRequest, UserCredentials, UserProfile,
};
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Insert new user",
    skip(pool, user_form),
    fields(username = %user_form.username)
)]
pub async fn insert_user(
    pool: &SqlitePool,
    user_form: &RegistrationRequest,
) -> Result<i64, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        r#"
        INSERT INTO users (username, password_hash, name, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
    )
    .bind(&user_form.username)
    .bind(hash_password(user_form.password.expose_secret()))
    .bind(&user_form.name)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute user insert query: {:?}", e);
        e
    })?;

    Ok(result.last_insert_rowid())
}

pub async fn find_user_credentials(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<UserCredentials>, sqlx::Error> {
    sqlx::query_as::<_, UserCredentials>(
        r#"
        SELECT id, username, password_hash
        FROM users
        WHERE username = ?1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn fetch_profile(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, username, name, age, gender, height, weight, goal_weight, daily_calorie_target
        FROM users
        WHERE id = ?1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

#[tracing::instrument(name = "Update user profile", skip(pool, update), fields(user_id = %user_id))]
pub async fn update_profile(
    pool: &SqlitePool,
    user_id: i64,
    update: &UpdateProfileRequest,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET name = ?1,
            age = ?2,
            gender = ?3,
            height = ?4,
            weight = ?5,
            goal_weight = ?6,
            daily_calorie_target = ?7,
            updated_at = ?8
        WHERE id = ?9
        "#,
    )
    .bind(&update.name)
    .bind(update.age)
    .bind(&update.gender)
    .bind(update.height)
    .bind(update.weight)
    .bind(update.goal_weight)
    .bind(update.daily_calorie_target)
    .bind(Utc::now())
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
