use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;

pub async fn delete_goal(
    pool: web::Data<SqlitePool>,
    goal_id: web::Path<i64>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let goal_id = goal_id.into_inner();
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": "Invalid user ID in token"
            })));
        }
    };

    let rows_affected = db::goals::delete_goal(&pool, user_id, goal_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error deleting goal: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to delete goal")
        })?;

    if rows_affected == 0 {
        return Ok(HttpResponse::NotFound().json(json!({
            "error": "Goal not found"
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Goal deleted"
    })))
}
