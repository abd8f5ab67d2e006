use actix_web::{delete, post, web, HttpResponse, Result};
use sqlx::SqlitePool;

use crate::handlers::workouts::add_workout::add_workout as add_workout_handler;
use crate::handlers::workouts::delete_workout::delete_workout as delete_workout_handler;
use crate::middleware::auth::Claims;
use crate::models::workout::NewWorkoutRequest;

#[post("")]
pub async fn add_workout(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
    request: web::Json<NewWorkoutRequest>,
) -> Result<HttpResponse> {
    add_workout_handler(pool, claims, request).await
}

#[delete("/{workout_id}")]
pub async fn delete_workout(
    pool: web::Data<SqlitePool>,
    workout_id: web::Path<i64>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    delete_workout_handler(pool, workout_id, claims).await
}
