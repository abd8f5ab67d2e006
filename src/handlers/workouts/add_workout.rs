use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::workout::NewWorkoutRequest;

/// Record a workout. The calories-burned figure is derived from the duration
/// at insert time and stored on the row, so later formula changes never
/// rewrite history.
pub async fn add_workout(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
    request: web::Json<NewWorkoutRequest>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": "Invalid user ID in token"
            })));
        }
    };

    if let Err(e) = request.validate() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": e
        })));
    }

    let entry = db::workouts::insert_workout(&pool, user_id, &request)
        .await
        .map_err(|e| {
            tracing::error!("Database error inserting workout: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to record workout")
        })?;

    Ok(HttpResponse::Ok().json(entry))
}
