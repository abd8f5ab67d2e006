pub mod add_habit;
pub mod complete_habit;
pub mod delete_habit;
pub mod list_habits;
