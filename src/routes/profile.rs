use actix_web::{get, put, web, HttpResponse};
use sqlx::SqlitePool;

use crate::handlers::profile_handler::{get_profile, update_profile};
use crate::middleware::auth::Claims;
use crate::models::user::UpdateProfileRequest;

#[get("")]
pub async fn get_user_profile(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    get_profile(pool, claims).await
}

#[put("")]
pub async fn update_user_profile(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
    request: web::Json<UpdateProfileRequest>,
) -> HttpResponse {
    update_profile(pool, claims, request).await
}
