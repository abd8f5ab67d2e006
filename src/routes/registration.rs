use actix_web::{post, web, HttpResponse};
use sqlx::SqlitePool;

use crate::handlers::registration_handler::register_user;
use crate::models::user::RegistrationRequest;

#[post("/register_user")]
pub async fn register(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    register_user(user_form, pool).await
}
