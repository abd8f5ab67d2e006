use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::goal::NewGoalRequest;

pub async fn add_goal(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
    request: web::Json<NewGoalRequest>,
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

    let goal = db::goals::insert_goal(&pool, user_id, &request)
        .await
        .map_err(|e| {
            tracing::error!("Database error inserting goal: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to create goal")
        })?;

    Ok(HttpResponse::Ok().json(goal))
}
