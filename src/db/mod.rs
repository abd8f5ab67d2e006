pub mod goals;
pub mod habits;
pub mod meals;
pub mod reports;
pub mod users;
pub mod workouts;
