use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::habit::NewHabitRequest;

pub async fn add_habit(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
    request: web::Json<NewHabitRequest>,
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

    let habit = db::habits::insert_habit(&pool, user_id, &request)
        .await
        .map_err(|e| {
            tracing::error!("Database error inserting habit: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to create habit")
        })?;

    Ok(HttpResponse::Ok().json(habit))
}
