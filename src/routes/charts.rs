use actix_web::{get, web, HttpRequest, HttpResponse, Result};
use sqlx::SqlitePool;

use crate::config::jwt::JwtSettings;
use crate::handlers::reports::charts::{get_calorie_chart_data, get_workout_chart_data};

#[get("/api/workout_data")]
pub async fn workout_data(
    req: HttpRequest,
    pool: web::Data<SqlitePool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse> {
    get_workout_chart_data(req, pool, jwt_settings).await
}

#[get("/api/calorie_data")]
pub async fn calorie_data(
    req: HttpRequest,
    pool: web::Data<SqlitePool>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse> {
    get_calorie_chart_data(req, pool, jwt_settings).await
}
