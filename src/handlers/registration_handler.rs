use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::SqlitePool;

use crate::db::users::insert_user;
use crate::models::common::ApiResponse;
use crate::models::user::RegistrationRequest;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show the password
    skip(user_form, pool),
    fields(username = %user_form.username)
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<SqlitePool>,
) -> HttpResponse {
    match insert_user(&pool, &user_form).await {
        Ok(_) => HttpResponse::Ok().json(ApiResponse::<()>::success_message("User registered")),
        Err(e) if is_unique_violation(&e) => {
            tracing::info!("Registration rejected, username already taken");
            HttpResponse::Conflict().json(json!({
                "error": "Username already exists"
            }))
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db_error) if db_error.is_unique_violation())
}
