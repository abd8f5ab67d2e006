use actix_web::{get, web, HttpResponse, Result};
use sqlx::SqlitePool;

use crate::handlers::reports::weekly_report::get_weekly_report;
use crate::middleware::auth::Claims;

#[get("/weekly")]
pub async fn weekly_report(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    get_weekly_report(pool, claims).await
}
