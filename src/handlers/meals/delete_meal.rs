use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;

pub async fn delete_meal(
    pool: web::Data<SqlitePool>,
    meal_id: web::Path<i64>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let meal_id = meal_id.into_inner();
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": "Invalid user ID in token"
            })));
        }
    };

    let rows_affected = db::meals::delete_meal(&pool, user_id, meal_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error deleting meal: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to delete meal")
        })?;

    if rows_affected == 0 {
        return Ok(HttpResponse::NotFound().json(json!({
            "error": "Meal not found"
        })));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Meal deleted"
    })))
}
