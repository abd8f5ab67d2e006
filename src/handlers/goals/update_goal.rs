use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::goal::UpdateGoalRequest;

pub async fn update_goal(
    pool: web::Data<SqlitePool>,
    goal_id: web::Path<i64>,
    claims: web::ReqData<Claims>,
    request: web::Json<UpdateGoalRequest>,
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

    let goal = db::goals::update_goal(&pool, user_id, goal_id, &request)
        .await
        .map_err(|e| {
            tracing::error!("Database error updating goal: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to update goal")
        })?;

    match goal {
        Some(goal) => Ok(HttpResponse::Ok().json(goal)),
        None => Ok(HttpResponse::NotFound().json(json!({
            "error": "Goal not found"
        }))),
    }
}
