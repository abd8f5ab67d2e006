use actix_web::web;

pub mod auth;
pub mod backend_health;
pub mod charts;
pub mod dashboard;
pub mod goals;
pub mod habits;
pub mod meals;
pub mod profile;
pub mod registration;
pub mod reports;
pub mod workouts;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // Record routes (require authentication)
    cfg.service(
        web::scope("/workouts")
            .wrap(AuthMiddleware)
            .service(workouts::add_workout)
            .service(workouts::delete_workout),
    );
    cfg.service(
        web::scope("/meals")
            .wrap(AuthMiddleware)
            .service(meals::add_meal)
            .service(meals::delete_meal),
    );
    cfg.service(
        web::scope("/goals")
            .wrap(AuthMiddleware)
            .service(goals::list_goals)
            .service(goals::add_goal)
            .service(goals::update_goal)
            .service(goals::delete_goal),
    );
    cfg.service(
        web::scope("/habits")
            .wrap(AuthMiddleware)
            .service(habits::list_habits)
            .service(habits::add_habit)
            .service(habits::complete_habit)
            .service(habits::delete_habit),
    );
    cfg.service(
        web::scope("/profile")
            .wrap(AuthMiddleware)
            .service(profile::get_user_profile)
            .service(profile::update_user_profile),
    );
    cfg.service(
        web::scope("/dashboard")
            .wrap(AuthMiddleware)
            .service(dashboard::dashboard),
    );
    cfg.service(
        web::scope("/reports")
            .wrap(AuthMiddleware)
            .service(reports::weekly_report),
    );

    // Chart surfaces check the session themselves and degrade to an empty
    // object for anonymous callers
    cfg.service(charts::workout_data).service(charts::calorie_data);
}
