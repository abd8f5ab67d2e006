use actix_web::{get, web, HttpResponse, Result};
use sqlx::SqlitePool;

use crate::handlers::dashboard_handler::{get_dashboard, DashboardQuery};
use crate::middleware::auth::Claims;

#[get("")]
pub async fn dashboard(
    pool: web::Data<SqlitePool>,
    claims: web::ReqData<Claims>,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse> {
    get_dashboard(pool, claims, query).await
}
