use actix_web::{delete, get, post, web, HttpResponse, Result};
use sqlx::SqlitePool;

use crate::handlers::habits::add_habit::add_habit as add_habit_handler;
use crate::handlers::habits::complete_habit::complete_habit as complete_habit_handler;
use crate::handlers::habits::delete_habit::delete_habit as delete_habit_handler;
use crate::handlers::habits::list_habits::list_habits as list_habits_handler;
use crate::middleware::auth::Claims;
use crate::models::habit::NewHabitRequest;

#[get("")]
pub async fn list_habits(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    list_habits_handler(pool, claims).await
}

#[post("")]
pub async fn add_habit(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
    request: web::Json<NewHabitRequest>,
) -> Result<HttpResponse> {
    add_habit_handler(pool, claims, request).await
}

#[post("/{habit_id}/complete")]
pub async fn complete_habit(
    pool: web::Data<SqlitePool>,
    habit_id: web::Path<i64>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    complete_habit_handler(pool, habit_id, claims).await
}

#[delete("/{habit_id}")]
pub async fn delete_habit(
    pool: web::Data<SqlitePool>,
    habit_id: web::Path<i64>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    delete_habit_handler(pool, habit_id, claims).await
}
