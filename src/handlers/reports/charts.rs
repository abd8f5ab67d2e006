use actix_web::{web, HttpRequest, HttpResponse, Result};
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;

use crate::config::jwt::JwtSettings;
use crate::db;
use crate::middleware::auth::try_claims_from_request;
use crate::models::report::{CalorieChartResponse, WorkoutChartResponse};

/// Chart surfaces degrade for anonymous callers: no session means an empty
/// JSON object, not a 401, so a chart consumer simply renders nothing.
fn chart_user_id(req: &HttpRequest, jwt_settings: &JwtSettings) -> Option<i64> {
    try_claims_from_request(req, jwt_settings).and_then(|claims| claims.user_id())
}

pub async fn get_workout_chart_data(
    req: HttpRequest,
    pool: web::Data<SqlitePool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse> {
    let user_id = match chart_user_id(&req, &jwt_settings) {
        Some(id) => id,
        None => return Ok(HttpResponse::Ok().json(json!({}))),
    };

    let today = Utc::now().date_naive();
    let series = db::reports::seven_day_series(&pool, user_id, today)
        .await
        .map_err(|e| {
            tracing::error!("Database error building workout chart data: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to build chart data")
        })?;

    Ok(HttpResponse::Ok().json(WorkoutChartResponse {
        dates: series.dates,
        durations: series.durations,
    }))
}

pub async fn get_calorie_chart_data(
    req: HttpRequest,
    pool: web::Data<SqlitePool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse> {
    let user_id = match chart_user_id(&req, &jwt_settings) {
        Some(id) => id,
        None => return Ok(HttpResponse::Ok().json(json!({}))),
    };

    let today = Utc::now().date_naive();
    let series = db::reports::seven_day_series(&pool, user_id, today)
        .await
        .map_err(|e| {
            tracing::error!("Database error building calorie chart data: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to build chart data")
        })?;

    Ok(HttpResponse::Ok().json(CalorieChartResponse {
        dates: series.dates,
        burned: series.burned,
        consumed: series.consumed,
    }))
}
