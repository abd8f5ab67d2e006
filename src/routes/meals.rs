use actix_web::{delete, post, web, HttpResponse, Result};
use sqlx::SqlitePool;

use crate::handlers::meals::add_meal::add_meal as add_meal_handler;
use crate::handlers::meals::delete_meal::delete_meal as delete_meal_handler;
use crate::middleware::auth::Claims;
use crate::models::meal::NewMealRequest;

#[post("")]
pub async fn add_meal(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
    request: web::Json<NewMealRequest>,
) -> Result<HttpResponse> {
    add_meal_handler(pool, claims, request).await
}

#[delete("/{meal_id}")]
pub async fn delete_meal(
    pool: web::Data<SqlitePool>,
    meal_id: web::Path<i64>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    delete_meal_handler(pool, meal_id, claims).await
}
