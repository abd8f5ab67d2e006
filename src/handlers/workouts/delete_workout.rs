use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;

pub async fn delete_workout(
    pool: web::Data<SqlitePool>,
    workout_id: web::Path<i64>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let workout_id = workout_id.into_inner();
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": "Invalid user ID in token"
            })));
        }
    };

    let rows_affected = db::workouts::delete_workout(&pool, user_id, workout_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error deleting workout: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to delete workout")
        })?;

    if rows_affected == 0 {
        return Ok(HttpResponse::NotFound().json(json!({
            "error": "Workout not found"
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Workout deleted"
    })))
}
