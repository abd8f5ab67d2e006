use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;

/// Mark a habit completed for today. Idempotent within a calendar day: the
/// first call increments the streak, repeats return the habit unchanged.
pub async fn complete_habit(
    pool: web::Data<SqlitePool>,
    habit_id: web::Path<i64>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let habit_id = habit_id.into_inner();
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": "Invalid user ID in token"
            })));
        }
    };

    let today = Utc::now().date_naive();

    let updated = db::habits::complete_habit(&pool, user_id, habit_id, today)
        .await
        .map_err(|e| {
            tracing::error!("Database error completing habit: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to complete habit")
        })?;

    if let Some(habit) = updated {
        return Ok(HttpResponse::Ok().json(habit));
    }

    // No row matched: either already completed today (return as-is) or the
    // habit does not exist for this user.
    let existing = db::habits::fetch_habit(&pool, user_id, habit_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error fetching habit: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to fetch habit")
        })?;

    match existing {
        Some(habit) => Ok(HttpResponse::Ok().json(habit)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "error": "Habit not found"
        }))),
    }
}
