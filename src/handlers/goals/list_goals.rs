use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;

pub async fn list_goals(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": "Invalid user ID in token"
            })));
        }
    };

    let goals = db::goals::goals_for_user(&pool, user_id).await.map_err(|e| {
        tracing::error!("Database error fetching goals: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to fetch goals")
    })?;

    Ok(HttpResponse::Ok().json(json!({
        "goals": goals,
        "count": goals.len()
    })))
}
