use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;

pub async fn delete_habit(
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

    let rows_affected = db::habits::delete_habit(&pool, user_id, habit_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error deleting habit: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to delete habit")
        })?;

    if rows_affected == 0 {
        return Ok(HttpResponse::NotFound().json(json!({
            "error": "Habit not found"
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Habit deleted"
    })))
}
