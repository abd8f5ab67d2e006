use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::user::UpdateProfileRequest;

#[tracing::instrument(
    name = "Get user profile",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_profile(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
        }
    };

    match db::users::fetch_profile(&pool, user_id).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => HttpResponse::NotFound().json(json!({
            "error": "User not found"
        })),
        Err(e) => {
            tracing::error!("Database error fetching profile: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to fetch profile"))
        }
    }
}

#[tracing::instrument(
    name = "Update user profile",
    skip(pool, claims, request),
    fields(username = %claims.username)
)]
pub async fn update_profile(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
    request: web::Json<UpdateProfileRequest>,
) -> HttpResponse {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"));
        }
    };

    match db::users::update_profile(&pool, user_id, &request).await {
        Ok(0) => HttpResponse::NotFound().json(json!({
            "error": "User not found"
        })),
        Ok(_) => match db::users::fetch_profile(&pool, user_id).await {
            Ok(Some(profile)) => HttpResponse::Ok().json(profile),
            Ok(None) => HttpResponse::NotFound().json(json!({
                "error": "User not found"
            })),
            Err(e) => {
                tracing::error!("Database error re-fetching profile: {}", e);
                HttpResponse::InternalServerError()
                    .json(ApiResponse::<()>::error("Failed to fetch profile"))
            }
        },
        Err(e) => {
            tracing::error!("Database error updating profile: {}", e);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update profile"))
        }
    }
}
