use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::report::WeeklyReportResponse;

/// Full progress report for the trailing 7-day window: dense activity and
/// calorie series plus the weight-goal checkpoint list.
#[tracing::instrument(
    name = "Build weekly report",
    skip(pool, claims),
    fields(username = %claims.username)
)]
pub async fn get_weekly_report(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({
                "error": "Invalid user ID in token"
            })));
        }
    };

    let today = Utc::now().date_naive();

    let series = db::reports::seven_day_series(&pool, user_id, today)
        .await
        .map_err(|e| {
            tracing::error!("Database error building weekly series: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to build report")
        })?;
    let weight_checkpoints = db::goals::weight_checkpoints(&pool, user_id)
        .await
        .map_err(|e| {
            tracing::error!("Database error fetching weight checkpoints: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to build report")
        })?;

    Ok(HttpResponse::Ok().json(WeeklyReportResponse {
        dates: series.dates,
        durations: series.durations,
        burned: series.burned,
        consumed: series.consumed,
        weight_checkpoints,
    }))
}
