use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use sqlx::SqlitePool;

use crate::handlers::goals::add_goal::add_goal as add_goal_handler;
use crate::handlers::goals::delete_goal::delete_goal as delete_goal_handler;
use crate::handlers::goals::list_goals::list_goals as list_goals_handler;
use crate::handlers::goals::update_goal::update_goal as update_goal_handler;
use crate::middleware::auth::Claims;
use crate::models::goal::{NewGoalRequest, UpdateGoalRequest};

#[get("")]
pub async fn list_goals(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    list_goals_handler(pool, claims).await
}

#[post("")]
pub async fn add_goal(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
    request: web::Json<NewGoalRequest>,
) -> Result<HttpResponse> {
    add_goal_handler(pool, claims, request).await
}

#[put("/{goal_id}")]
pub async fn update_goal(
    pool: web::Data<SqlitePool>,
    goal_id: web::Path<i64>,
    claims: web::ReqData<Claims>,
    request: web::Json<UpdateGoalRequest>,
) -> Result<HttpResponse> {
    update_goal_handler(pool, goal_id, claims, request).await
}

#[delete("/{goal_id}")]
pub async fn delete_goal(
    pool: web::Data<SqlitePool>,
    goal_id: web::Path<i64>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    delete_goal_handler(pool, goal_id, claims).await
}
