use actix_web::{web, HttpResponse, Result};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::report::{DailySnapshot, DashboardResponse};

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Defaults to today when absent.
    pub date: Option<NaiveDate>,
}

/// One-day view: the day's workouts and meals with their calorie totals,
/// plus the user's goals and habits.
#[tracing::instrument(
    name = "Build daily dashboard",
    skip(pool, claims, query),
    fields(username = %claims.username)
)]
pub async fn get_dashboard(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": "Invalid user ID in token"
            })));
        }
    };

    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    let workouts = db::workouts::workouts_for_day(&pool, user_id, date)
        .await
        .map_err(|e| {
            tracing::error!("Database error fetching workouts: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to fetch workouts")
        })?;
    let meals = db::meals::meals_for_day(&pool, user_id, date)
        .await
        .map_err(|e| {
            tracing::error!("Database error fetching meals: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to fetch meals")
        })?;
    let goals = db::goals::goals_for_user(&pool, user_id).await.map_err(|e| {
        tracing::error!("Database error fetching goals: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to fetch goals")
    })?;
    let habits = db::habits::habits_for_user(&pool, user_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error fetching habits: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to fetch habits")
        })?;

    let snapshot = DailySnapshot::from_entries(&workouts, &meals);

    Ok(HttpResponse::Ok().json(DashboardResponse {
        date,
        workouts,
        meals,
        goals,
        habits,
        total_calories_burned: snapshot.total_calories_burned,
        total_calories_consumed: snapshot.total_calories_consumed,
    }))
}
