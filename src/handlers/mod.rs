pub mod auth_handler;
pub mod backend_health_handler;
pub mod dashboard_handler;
pub mod goals;
pub mod habits;
pub mod meals;
pub mod profile_handler;
pub mod registration_handler;
pub mod reports;
pub mod workouts;
