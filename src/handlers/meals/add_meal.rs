use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::meal::NewMealRequest;

pub async fn add_meal(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
    request: web::Json<NewMealRequest>,
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

    let entry = db::meals::insert_meal(&pool, user_id, &request)
        .await
        .map_err(|e| {
            tracing::error!("Database error inserting meal: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to record meal")
        })?;

    Ok(HttpResponse::Ok().json(entry))
}
