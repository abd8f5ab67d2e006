pub mod add_workout;
pub mod delete_workout;
